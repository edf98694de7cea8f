//! Time utilities: parsing HH:MM[:SS] and timestamps, duration math,
//! formatting for the store (ISO-8601 TEXT columns).

use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date_lenient;
use chrono::{NaiveDateTime, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Timestamp parser for import cells and CLI arguments. Accepts the common
/// ISO-like shapes; a bare date is taken as midnight.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    for fmt in [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
        "%d/%m/%Y %H:%M:%S",
        "%d/%m/%Y %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    parse_date_lenient(s).and_then(|d| d.and_hms_opt(0, 0, 0))
}

pub fn parse_optional_timestamp(input: Option<&String>) -> AppResult<Option<NaiveDateTime>> {
    if let Some(s) = input {
        let dt = parse_timestamp(s).ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))?;
        Ok(Some(dt))
    } else {
        Ok(None)
    }
}

/// Store representation of a timestamp ("YYYY-MM-DD HH:MM:SS").
pub fn format_timestamp(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}
