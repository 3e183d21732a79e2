//! Report assembly and chart rendering.

use super::config::ChartOptions;
use super::table::FrequencyTable;

/// Everything a finished run produced, plus the options needed to print it.
#[derive(Debug, Clone)]
pub struct SimReport {
    /// Header description of the hat ("2 groups of 1-3" or the literal list)
    pub hat_desc: String,
    pub iterations: u32,
    pub num_draws: usize,
    /// Most frequent sum (smallest wins ties)
    pub mode: i64,
    /// Mean of all trial sums
    pub mean: f64,
    pub table: FrequencyTable,
    pub no_headers: bool,
    pub chart: ChartOptions,
}

impl SimReport {
    /// Renders the full text output: summary header (unless suppressed)
    /// followed by the chart, one line per retained sum, ascending.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();

        if !self.no_headers {
            lines.push(format!(
                "----- {} iterations drawing {} time(s) from {} -----",
                self.iterations, self.num_draws, self.hat_desc
            ));
            lines.push(format!("Most common: {}", self.mode));
            lines.push(format!("Avg: {}", self.mean));
        }

        lines.extend(self.chart_lines());
        lines.join("\n")
    }

    pub fn chart_lines(&self) -> Vec<String> {
        chart_lines(&self.table, &self.chart, self.iterations)
    }
}

/// Formats the frequency table as bar-chart lines in ascending sum order.
///
/// Bar lengths are scaled so the most frequent sum gets a bar of
/// `options.size` display characters; the fill string's own display length
/// divides the repeat count so multi-character fills keep that width.
/// `max_count` is taken over the whole table, so omitting zero rows never
/// rescales the bars, and percentages stay relative to all iterations.
pub fn chart_lines(table: &FrequencyTable, options: &ChartOptions, iterations: u32) -> Vec<String> {
    let max_count = table.max_count();
    let unit_len = options.fill.chars().count().max(1);

    let rows: Vec<(i64, u64)> = table
        .iter()
        .filter(|&(_, count)| count > 0 || !options.omit_zero_occurrences)
        .collect();

    let label_width = rows
        .iter()
        .map(|(sum, _)| sum.to_string().len())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(rows.len());

    for (sum, count) in rows {
        let scaled =
            options.size as f64 * count as f64 / (max_count as f64 * unit_len as f64);
        let bar = options.fill.repeat(scaled.round() as usize);

        let mut line = if options.label_right {
            format!("{} {}", bar, sum)
        } else {
            format!("{:>width$} {}", sum, bar, width = label_width)
        };

        if !options.no_percentages {
            line.push_str(&format!(
                " ({:.2}%)",
                100.0 * count as f64 / iterations as f64
            ));
        }
        if options.show_exact_occurrences {
            line.push_str(&format!(" ({} times)", count));
        }

        lines.push(line);
    }

    lines
}
