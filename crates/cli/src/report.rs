//! Per-run summary rows and aggregate statistics, written as CSV.

use anyhow::{Context, Result};
use bactalign_engine::driver::RunResult;
use serde::Serialize;
use std::path::Path;

/// One row of `summary.csv`.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    pub run: usize,
    pub best_index: usize,
    pub fitness: f64,
    pub substitution_score: f64,
    pub interaction_score: f64,
    pub evaluations: u64,
    pub elapsed_seconds: f64,
}

impl From<&RunResult> for RunRecord {
    fn from(result: &RunResult) -> Self {
        Self {
            run: result.run,
            best_index: result.best_index,
            fitness: result.fitness,
            substitution_score: result.substitution_score,
            interaction_score: result.interaction_score,
            evaluations: result.evaluations,
            elapsed_seconds: result.elapsed.as_secs_f64(),
        }
    }
}

/// Aggregated statistics for one metric across runs.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricStats {
    pub metric: &'static str,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation, empty with fewer than two runs
    pub std: Option<f64>,
    pub min: f64,
    pub max: f64,
}

impl MetricStats {
    pub fn from_values(metric: &'static str, values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                metric,
                count: 0,
                mean: 0.0,
                std: None,
                min: 0.0,
                max: 0.0,
            };
        }

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let std = (count > 1).then(|| {
            let variance =
                values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
            variance.sqrt()
        });

        Self {
            metric,
            count,
            mean,
            std,
            min,
            max,
        }
    }
}

/// Statistics for every numeric summary column.
pub fn statistics(records: &[RunRecord]) -> Vec<MetricStats> {
    let column = |f: fn(&RunRecord) -> f64| records.iter().map(f).collect::<Vec<_>>();
    vec![
        MetricStats::from_values("best_index", &column(|r| r.best_index as f64)),
        MetricStats::from_values("fitness", &column(|r| r.fitness)),
        MetricStats::from_values("substitution_score", &column(|r| r.substitution_score)),
        MetricStats::from_values("interaction_score", &column(|r| r.interaction_score)),
        MetricStats::from_values("evaluations", &column(|r| r.evaluations as f64)),
        MetricStats::from_values("elapsed_seconds", &column(|r| r.elapsed_seconds)),
    ]
}

/// Serialize `rows` to a CSV file with a header line.
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    writer.flush()?;
    Ok(())
}
