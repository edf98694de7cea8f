//! Analytics engine: aggregation queries over attendance and task data.
//! Every query takes an optional inclusive [start, end] range and returns an
//! empty table, never an error, when nothing matches. Row structs serialize
//! uniformly so the export layer and chart consumers see plain tables.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use rusqlite::{Connection, Row, ToSql};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DeptProductivity {
    pub department: String,
    pub avg_productivity: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformerScore {
    pub employee: String,
    pub avg_score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttendanceCell {
    pub employee_id: i64,
    pub date: NaiveDate,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyProductivity {
    pub day: NaiveDate,
    pub avg_productivity: f64,
}

fn parse_day(row: &Row, col: usize) -> rusqlite::Result<NaiveDate> {
    let s: String = row.get(col)?;
    NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            col,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(s)),
        )
    })
}

fn day_start(d: NaiveDate) -> String {
    format!("{} 00:00:00", d.format("%Y-%m-%d"))
}

fn day_end(d: NaiveDate) -> String {
    format!("{} 23:59:59", d.format("%Y-%m-%d"))
}

/// Average productivity score per department, ascending by department name.
/// Departments with no scored tasks in range simply do not appear.
pub fn department_productivity(
    conn: &Connection,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> AppResult<Vec<DeptProductivity>> {
    let mut sql = String::from(
        "SELECT d.dept_name, AVG(t.productivity_score)
         FROM tasks t
         JOIN employees e   ON e.employee_id = t.employee_id
         JOIN departments d ON d.dept_id = e.department_id
         WHERE t.productivity_score IS NOT NULL",
    );
    let mut binds: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(d) = start {
        sql.push_str(" AND t.start_time >= ?");
        binds.push(Box::new(day_start(d)));
    }
    if let Some(d) = end {
        sql.push_str(" AND t.end_time <= ?");
        binds.push(Box::new(day_end(d)));
    }
    sql.push_str(" GROUP BY d.dept_name ORDER BY d.dept_name ASC");

    let mut stmt = conn.prepare(&sql)?;
    let refs: Vec<&dyn ToSql> = binds.iter().map(|b| b.as_ref()).collect();
    let rows = stmt.query_map(&refs[..], |row| {
        Ok(DeptProductivity {
            department: row.get(0)?,
            avg_productivity: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Best average scores first, truncated to `limit`.
/// Ties are broken by employee name ascending so the order is stable.
pub fn top_performers(
    conn: &Connection,
    limit: usize,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> AppResult<Vec<PerformerScore>> {
    let mut sql = String::from(
        "SELECT e.name, AVG(t.productivity_score) AS avg_score
         FROM tasks t
         JOIN employees e ON e.employee_id = t.employee_id
         WHERE t.productivity_score IS NOT NULL",
    );
    let mut binds: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(d) = start {
        sql.push_str(" AND t.start_time >= ?");
        binds.push(Box::new(day_start(d)));
    }
    if let Some(d) = end {
        sql.push_str(" AND t.end_time <= ?");
        binds.push(Box::new(day_end(d)));
    }
    sql.push_str(" GROUP BY e.employee_id, e.name ORDER BY avg_score DESC, e.name ASC LIMIT ?");
    binds.push(Box::new(limit as i64));

    let mut stmt = conn.prepare(&sql)?;
    let refs: Vec<&dyn ToSql> = binds.iter().map(|b| b.as_ref()).collect();
    let rows = stmt.query_map(&refs[..], |row| {
        Ok(PerformerScore {
            employee: row.get(0)?,
            avg_score: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Raw per-record projection used as chart input; no aggregation.
pub fn attendance_summary(
    conn: &Connection,
    start: NaiveDate,
    end: NaiveDate,
    department_id: Option<i64>,
) -> AppResult<Vec<AttendanceCell>> {
    let mut sql = String::from(
        "SELECT a.employee_id, a.date, a.status
         FROM attendance a
         JOIN employees e ON e.employee_id = a.employee_id
         WHERE a.date >= ? AND a.date <= ?",
    );
    let mut binds: Vec<Box<dyn ToSql>> = vec![
        Box::new(start.format("%Y-%m-%d").to_string()),
        Box::new(end.format("%Y-%m-%d").to_string()),
    ];

    if let Some(dept) = department_id {
        sql.push_str(" AND e.department_id = ?");
        binds.push(Box::new(dept));
    }
    sql.push_str(" ORDER BY a.date ASC, a.employee_id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let refs: Vec<&dyn ToSql> = binds.iter().map(|b| b.as_ref()).collect();
    let rows = stmt.query_map(&refs[..], |row| {
        Ok(AttendanceCell {
            employee_id: row.get(0)?,
            date: parse_day(row, 1)?,
            status: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Average score bucketed by the calendar day the task ended, ascending.
/// Tasks with no score or no end timestamp are excluded.
pub fn daily_average_productivity(
    conn: &Connection,
    employee_id: Option<i64>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> AppResult<Vec<DailyProductivity>> {
    let mut sql = String::from(
        "SELECT date(t.end_time) AS day, AVG(t.productivity_score)
         FROM tasks t
         WHERE t.productivity_score IS NOT NULL AND t.end_time IS NOT NULL",
    );
    let mut binds: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(id) = employee_id {
        sql.push_str(" AND t.employee_id = ?");
        binds.push(Box::new(id));
    }
    if let Some(d) = start {
        sql.push_str(" AND t.end_time >= ?");
        binds.push(Box::new(day_start(d)));
    }
    if let Some(d) = end {
        sql.push_str(" AND t.end_time <= ?");
        binds.push(Box::new(day_end(d)));
    }
    sql.push_str(" GROUP BY day ORDER BY day ASC");

    let mut stmt = conn.prepare(&sql)?;
    let refs: Vec<&dyn ToSql> = binds.iter().map(|b| b.as_ref()).collect();
    let rows = stmt.query_map(&refs[..], |row| {
        Ok(DailyProductivity {
            day: parse_day(row, 0)?,
            avg_productivity: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
