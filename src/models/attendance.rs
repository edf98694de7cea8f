use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One row per (employee, date); enforced by a UNIQUE constraint in the
/// store, not just by application convention.
#[derive(Debug, Clone, Serialize)]
pub struct Attendance {
    pub attendance_id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,                  // ⇔ attendance.date (TEXT "YYYY-MM-DD")
    pub check_in: Option<NaiveDateTime>,  // set at most once per day
    pub check_out: Option<NaiveDateTime>, // last write wins
    pub status: Option<String>,           // free label ("On Time", "Late", ...)
}

impl Attendance {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn check_in_str(&self) -> String {
        self.check_in
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn check_out_str(&self) -> String {
        self.check_out
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn status_str(&self) -> &str {
        self.status.as_deref().unwrap_or("-")
    }
}
