mod csv;
mod json;

pub use csv::write_csv;
pub use json::write_json;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ReportFormat {
    Csv,
    Json,
}

/// Serialize a report table to the requested format.
pub fn write_table<T: serde::Serialize>(
    format: &ReportFormat,
    path: &str,
    label: &str,
    rows: &[T],
) -> crate::errors::AppResult<()> {
    match format {
        ReportFormat::Csv => write_csv(path, rows)?,
        ReportFormat::Json => write_json(path, rows)?,
    }
    notify_export_success(label, Path::new(path));
    Ok(())
}
