use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fs::File;

/// Write a report table as a pretty-printed JSON array.
pub fn write_json<T: Serialize>(path: &str, rows: &[T]) -> AppResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, rows).map_err(|e| AppError::Export(e.to_string()))?;
    Ok(())
}
