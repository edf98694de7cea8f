//! Attendance service: idempotent check-in / check-out recording and
//! per-range retrieval over the store.

use crate::core::status::{classify, duration_hours, Schedule};
use crate::db::{log, queries};
use crate::errors::{AppError, AppResult};
use crate::models::attendance::Attendance;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;
use serde::Serialize;

/// One point of the worked-hours timeseries.
#[derive(Debug, Clone, Serialize)]
pub struct HoursPoint {
    pub date: NaiveDate,
    pub employee_id: i64,
    pub hours: f64,
}

fn ensure_employee(conn: &Connection, employee_id: i64) -> AppResult<()> {
    if queries::get_employee(conn, employee_id)?.is_none() {
        return Err(AppError::NotFound {
            entity: "employee",
            key: employee_id.to_string(),
        });
    }
    Ok(())
}

/// Record a check-in. The day's row is fetched or created; the check-in
/// time is set only if the day has none yet (re-checking in later the same
/// day is a no-op for the field), and the status is recomputed from the
/// effective check-in time.
pub fn check_in(
    conn: &Connection,
    schedule: &Schedule,
    employee_id: i64,
    when: NaiveDateTime,
) -> AppResult<Attendance> {
    ensure_employee(conn, employee_id)?;

    let mut att = queries::get_or_create_attendance(conn, employee_id, when.date())?;
    if att.check_in.is_none() {
        att.check_in = Some(when);
    }
    att.status = Some(
        classify(att.check_in.map(|t| t.time()), schedule)
            .to_db_str()
            .to_string(),
    );
    queries::update_attendance(conn, &att)?;

    log::record(
        conn,
        "check_in",
        &employee_id.to_string(),
        &when.format("%Y-%m-%d %H:%M:%S").to_string(),
    )?;
    Ok(att)
}

/// Record a check-out. The check-out time always takes the latest value.
/// If the status is still unset it is derived from the check-in time when
/// present, else from the check-out time itself — an approximation kept for
/// compatibility (applying a lateness rule to a check-out is questionable;
/// pending a product decision).
pub fn check_out(
    conn: &Connection,
    schedule: &Schedule,
    employee_id: i64,
    when: NaiveDateTime,
) -> AppResult<Attendance> {
    ensure_employee(conn, employee_id)?;

    let mut att = queries::get_or_create_attendance(conn, employee_id, when.date())?;
    att.check_out = Some(when);
    if att.status.is_none() {
        let basis = att.check_in.unwrap_or(when).time();
        att.status = Some(classify(Some(basis), schedule).to_db_str().to_string());
    }
    queries::update_attendance(conn, &att)?;

    log::record(
        conn,
        "check_out",
        &employee_id.to_string(),
        &when.format("%Y-%m-%d %H:%M:%S").to_string(),
    )?;
    Ok(att)
}

/// Inclusive date-range listing, newest day first. Every filter is
/// independently optional.
pub fn list_attendance(
    conn: &Connection,
    employee_id: Option<i64>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> AppResult<Vec<Attendance>> {
    queries::list_attendance(conn, employee_id, start, end)
}

/// Worked hours per attendance row, ascending by date. An empty result set
/// means no matching rows, distinct from rows that worked zero hours.
pub fn hours_timeseries(
    conn: &Connection,
    employee_id: Option<i64>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> AppResult<Vec<HoursPoint>> {
    let mut points: Vec<HoursPoint> = queries::list_attendance(conn, employee_id, start, end)?
        .into_iter()
        .map(|r| HoursPoint {
            date: r.date,
            employee_id: r.employee_id,
            hours: duration_hours(r.check_in, r.check_out),
        })
        .collect();

    points.sort_by_key(|p| (p.date, p.employee_id));
    Ok(points)
}
