use std::path::Path;

use serde::Serialize;

use crate::commands::stats::RunStats;
use crate::output::errors::OutputError;

/// On-disk shape of a run report: the tool version followed by the run
/// statistics, flattened.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub version: &'static str,
    #[serde(flatten)]
    pub stats: &'a RunStats,
    pub loaded: usize,
    pub saved: usize,
    pub duration_ms: u128,
}

impl<'a> RunReport<'a> {
    pub fn new(stats: &'a RunStats) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            stats,
            loaded: stats.loaded(),
            saved: stats.saved(),
            duration_ms: stats.total_duration.as_millis(),
        }
    }
}

/// Write the report for a finished compatibility run.
pub fn write_run_report(path: &Path, stats: &RunStats) -> Result<(), OutputError> {
    let report = RunReport::new(stats);
    let contents = serde_json::to_string_pretty(&report)
        .map_err(|e| OutputError::FileError(format!("failed to serialize run report: {}", e)))?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            OutputError::FileError(format!(
                "failed to create report directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    std::fs::write(path, contents).map_err(|e| {
        OutputError::FileError(format!(
            "failed to write run report {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}
