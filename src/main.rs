//! Hat-draw simulator CLI.
//!
//! Simulates drawing numbers out of a hat and summing them, and prints a
//! frequency chart of the results. By default it simulates a standard D6
//! die roll.
//!
//! Usage:
//!   hatsim [OPTIONS]
//!
//! Examples:
//!   hatsim                          # 10000 one-draw trials from 1-6
//!   hatsim -g 2 -r 3 -d 2           # two draws from 1,2,3,1,2,3
//!   hatsim -c "1,1,2,3,7,8" -in     # custom hat, with replacement

use hatsim::constants::*;
use hatsim::simulator::{run_simulation, SimConfig};
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    if config.chart.fill.is_empty() {
        eprintln!("Error: chart character must not be empty");
        process::exit(1);
    }

    match run_simulation(&config) {
        Ok(report) => println!("{}", report.to_text()),
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-i" | "--iterations" => {
                if i + 1 < args.len() {
                    config.iterations = args[i + 1].parse().unwrap_or(DEFAULT_NUM_ITERATIONS);
                    i += 1;
                }
            }
            "-r" | "--range" => {
                if i + 1 < args.len() {
                    config.range_size = args[i + 1].parse().unwrap_or(DEFAULT_RANGE);
                    i += 1;
                }
            }
            "-m" | "--minimum" => {
                if i + 1 < args.len() {
                    config.minimum = args[i + 1].parse().unwrap_or(DEFAULT_MINIMUM);
                    i += 1;
                }
            }
            "-d" | "--draws" => {
                if i + 1 < args.len() {
                    config.num_draws = args[i + 1].parse().unwrap_or(DEFAULT_NUM_DRAWS);
                    i += 1;
                }
            }
            "-g" | "--groups" => {
                if i + 1 < args.len() {
                    config.num_groups = args[i + 1].parse().unwrap_or(DEFAULT_NUM_GROUPS);
                    i += 1;
                }
            }
            "-c" | "--custom" => {
                if i + 1 < args.len() {
                    config.custom = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "-cs" | "--chart-size" => {
                if i + 1 < args.len() {
                    config.chart.size = args[i + 1].parse().unwrap_or(DEFAULT_CHART_SIZE);
                    i += 1;
                }
            }
            "-cc" | "--chart-character" => {
                if i + 1 < args.len() {
                    config.chart.fill = args[i + 1].clone();
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-o" | "--omit-zero-occurrences" => {
                config.chart.omit_zero_occurrences = true;
            }
            "-e" | "--show-exact-occurrences" => {
                config.chart.show_exact_occurrences = true;
            }
            "-np" | "--no-percentages" => {
                config.chart.no_percentages = true;
            }
            "-lr" | "--label-right" => {
                config.chart.label_right = true;
            }
            "-in" | "--independent" => {
                config.independent = true;
            }
            "-nh" | "--no-headers" => {
                config.no_headers = true;
            }
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Hat-Draw Distribution Simulator");
    println!();
    println!("Simulates drawing numbers out of a hat and summing them, and prints");
    println!("a frequency chart of the results. By default each draw removes the");
    println!("drawn number from the hat for the rest of the trial.");
    println!();
    println!("USAGE:");
    println!("    hatsim [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -i,  --iterations <N>         Number of trials to run (default: 10000)");
    println!("    -r,  --range <N>              Size of the range of numbers (default: 6)");
    println!("    -m,  --minimum <N>            Minimum value of the range (default: 1)");
    println!("    -d,  --draws <N>              Draws per trial (default: 1)");
    println!("    -g,  --groups <N>             Copies of the range in the hat (default: 1)");
    println!("    -c,  --custom <LIST>          Custom hat contents, e.g. \"1,1,2,3,7,8\"");
    println!("    -cs, --chart-size <N>         Bar length of the most frequent result (default: 100)");
    println!("    -cc, --chart-character <STR>  String the bars are made of (default: \"]\")");
    println!("    -s,  --seed <N>               Random seed for a reproducible run");
    println!("    -o,  --omit-zero-occurrences  Skip results that were never drawn");
    println!("    -e,  --show-exact-occurrences Show the raw count for each result");
    println!("    -np, --no-percentages         Hide the per-result percentages");
    println!("    -lr, --label-right            Put result labels after the bars");
    println!("    -in, --independent            Draw with replacement");
    println!("    -nh, --no-headers             Skip the summary above the chart");
    println!("    -h,  --help                   Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    hatsim                            # Standard D6 roll");
    println!("    hatsim -g 2 -r 3 -d 2             # Two depleting draws from 1,2,3,1,2,3");
    println!("    hatsim -c \"1,1,2,3,7,8\" -d 3 -in  # Custom hat, with replacement");
    println!("    hatsim -o -e -np                  # Compact chart with raw counts");
}
