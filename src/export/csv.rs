use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Write a uniformly-shaped report table to a CSV file, header included.
pub fn write_csv<T: Serialize>(path: &str, rows: &[T]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush().map_err(|e| AppError::Export(e.to_string()))?;
    Ok(())
}
