//! Bulk CSV import for attendance and tasks.
//!
//! Rows are processed independently: a bad row is recorded in the report and
//! never aborts the batch. The whole batch runs in one transaction that is
//! committed at the end, so every good row is durable even when later rows
//! fail. Import is authoritative: an attendance row overwrites check-in,
//! check-out and status wholesale, unlike the service-level check-in which
//! preserves an existing check-in.

use crate::db::{log, queries};
use crate::errors::AppResult;
use crate::models::task_status::TaskStatus;
use crate::utils::date::parse_date_lenient;
use crate::utils::time::parse_timestamp;
use chrono::NaiveDateTime;
use rusqlite::Connection;
use serde::Deserialize;
use std::fmt;
use std::io::Read;
use thiserror::Error;

/// Why a single row was rejected. Kept specific so a failed upload is
/// debuggable from the report alone.
#[derive(Debug, Error)]
pub enum RowError {
    #[error("no employee with email '{0}'")]
    UnknownEmail(String),

    #[error("invalid date '{0}'")]
    BadDate(String),

    #[error("invalid timestamp '{0}'")]
    BadTimestamp(String),

    #[error("invalid productivity score '{0}'")]
    BadScore(String),

    #[error("invalid task status '{0}'")]
    BadStatus(String),

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("malformed row: {0}")]
    Malformed(String),

    #[error("store rejected row: {0}")]
    Store(String),
}

#[derive(Debug)]
pub struct RowFailure {
    /// 1-based line number in the uploaded file (header is line 1).
    pub line: u64,
    pub error: RowError,
}

impl fmt::Display for RowFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.error)
    }
}

/// Outcome of one upload: how many rows landed, and exactly why the rest
/// did not.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub processed: usize,
    pub failures: Vec<RowFailure>,
}

impl ImportReport {
    pub fn errors(&self) -> usize {
        self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct AttendanceRow {
    email: Option<String>,
    date: Option<String>,
    check_in: Option<String>,
    check_out: Option<String>,
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TaskRow {
    email: Option<String>,
    task_name: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
    status: Option<String>,
    productivity_score: Option<String>,
}

fn required<'a>(field: &'a Option<String>, name: &'static str) -> Result<&'a str, RowError> {
    match field.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(RowError::MissingField(name)),
    }
}

fn optional_timestamp(
    field: &Option<String>,
) -> Result<Option<NaiveDateTime>, RowError> {
    match field.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_timestamp(s)
            .map(Some)
            .ok_or_else(|| RowError::BadTimestamp(s.to_string())),
    }
}

fn apply_attendance_row(conn: &Connection, row: &AttendanceRow) -> Result<(), RowError> {
    let email = required(&row.email, "email")?;
    let emp = queries::get_employee_by_email(conn, email)
        .map_err(|e| RowError::Store(e.to_string()))?
        .ok_or_else(|| RowError::UnknownEmail(email.to_string()))?;

    let date_raw = required(&row.date, "date")?;
    let date =
        parse_date_lenient(date_raw).ok_or_else(|| RowError::BadDate(date_raw.to_string()))?;

    let check_in = optional_timestamp(&row.check_in)?;
    let check_out = optional_timestamp(&row.check_out)?;
    let status = row
        .status
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    // Wholesale overwrite: the file is the source of truth for this day.
    let mut att = queries::get_or_create_attendance(conn, emp.employee_id, date)
        .map_err(|e| RowError::Store(e.to_string()))?;
    att.check_in = check_in;
    att.check_out = check_out;
    att.status = status;
    queries::update_attendance(conn, &att).map_err(|e| RowError::Store(e.to_string()))?;

    Ok(())
}

fn apply_task_row(conn: &Connection, row: &TaskRow) -> Result<(), RowError> {
    let email = required(&row.email, "email")?;
    let emp = queries::get_employee_by_email(conn, email)
        .map_err(|e| RowError::Store(e.to_string()))?
        .ok_or_else(|| RowError::UnknownEmail(email.to_string()))?;

    let task_name = required(&row.task_name, "task_name")?;
    let start_time = optional_timestamp(&row.start_time)?;
    let end_time = optional_timestamp(&row.end_time)?;

    let status = match row.status.as_deref().map(str::trim) {
        None | Some("") => TaskStatus::Pending,
        Some(s) => TaskStatus::from_label(s).ok_or_else(|| RowError::BadStatus(s.to_string()))?,
    };

    let score = match row.productivity_score.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(
            s.parse::<f64>()
                .map_err(|_| RowError::BadScore(s.to_string()))?,
        ),
    };

    queries::insert_task(
        conn,
        emp.employee_id,
        task_name,
        start_time,
        end_time,
        status,
        score,
    )
    .map_err(|e| RowError::Store(e.to_string()))?;

    Ok(())
}

/// Bulk upsert attendance from CSV with columns:
/// `email,date,check_in,check_out,status`.
pub fn import_attendance_csv<R: Read>(
    conn: &mut Connection,
    reader: R,
) -> AppResult<ImportReport> {
    let tx = conn.transaction()?;
    let mut report = ImportReport::default();

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    for (i, record) in rdr.deserialize::<AttendanceRow>().enumerate() {
        let line = i as u64 + 2; // header is line 1
        let outcome = match record {
            Ok(row) => apply_attendance_row(&tx, &row),
            Err(e) => Err(RowError::Malformed(e.to_string())),
        };
        match outcome {
            Ok(()) => report.processed += 1,
            Err(error) => report.failures.push(RowFailure { line, error }),
        }
    }

    log::record(
        &tx,
        "import_attendance",
        "",
        &format!("processed={} errors={}", report.processed, report.errors()),
    )?;
    tx.commit()?;
    Ok(report)
}

/// Bulk insert tasks from CSV with columns:
/// `email,task_name,start_time,end_time,status,productivity_score`.
pub fn import_tasks_csv<R: Read>(conn: &mut Connection, reader: R) -> AppResult<ImportReport> {
    let tx = conn.transaction()?;
    let mut report = ImportReport::default();

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    for (i, record) in rdr.deserialize::<TaskRow>().enumerate() {
        let line = i as u64 + 2;
        let outcome = match record {
            Ok(row) => apply_task_row(&tx, &row),
            Err(e) => Err(RowError::Malformed(e.to_string())),
        };
        match outcome {
            Ok(()) => report.processed += 1,
            Err(error) => report.failures.push(RowFailure { line, error }),
        }
    }

    log::record(
        &tx,
        "import_tasks",
        "",
        &format!("processed={} errors={}", report.processed, report.errors()),
    )?;
    tx.commit()?;
    Ok(report)
}
