//! Shared default values for the command-line driver.

pub const RUNS: usize = 30;
pub const OUTPUT_DIR: &str = "results";

pub const SUMMARY_FILE: &str = "summary.csv";
pub const STATISTICS_FILE: &str = "statistics.csv";
pub const CONFIG_FILE: &str = "config.json";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "BACTALIGN_LOG";
pub const LOG_LEVEL: &str = "warn";

pub fn alignment_file(run: usize) -> String {
    format!("alignment_run_{run}.fasta")
}
