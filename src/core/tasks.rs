//! Task lifecycle: assignment, partial updates, filtered retrieval.

use crate::core::actor::Actor;
use crate::db::{log, queries};
use crate::errors::{AppError, AppResult};
use crate::models::task::{Task, TaskPatch};
use crate::models::task_status::TaskStatus;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;

/// Assign a task to an employee (admin action or import).
#[allow(clippy::too_many_arguments)]
pub fn create_task(
    conn: &Connection,
    actor: &Actor,
    employee_id: i64,
    task_name: &str,
    start_time: Option<NaiveDateTime>,
    end_time: Option<NaiveDateTime>,
    status: TaskStatus,
    productivity_score: Option<f64>,
) -> AppResult<Task> {
    actor.require_admin()?;

    if queries::get_employee(conn, employee_id)?.is_none() {
        return Err(AppError::NotFound {
            entity: "employee",
            key: employee_id.to_string(),
        });
    }

    let task = queries::insert_task(
        conn,
        employee_id,
        task_name,
        start_time,
        end_time,
        status,
        productivity_score,
    )?;

    log::record(conn, "task_created", &task.task_id.to_string(), task_name)?;
    Ok(task)
}

/// Apply only the supplied fields; `None` means "leave as is".
/// Returns `None` when the task id is unknown so callers can branch on
/// "nothing happened".
pub fn update_task(
    conn: &Connection,
    task_id: i64,
    patch: &TaskPatch,
) -> AppResult<Option<Task>> {
    let updated = queries::update_task(conn, task_id, patch)?;
    if updated.is_some() {
        log::record(conn, "task_updated", &task_id.to_string(), "")?;
    }
    Ok(updated)
}

/// Idempotent-safe delete: false when the id was already gone.
pub fn delete_task(conn: &Connection, actor: &Actor, task_id: i64) -> AppResult<bool> {
    actor.require_admin()?;

    let removed = queries::delete_task(conn, task_id)?;
    if removed {
        log::record(conn, "task_deleted", &task_id.to_string(), "")?;
    }
    Ok(removed)
}

/// Filtered listing, newest start first, never-started tasks last.
pub fn list_tasks(
    conn: &Connection,
    employee_id: Option<i64>,
    status: Option<TaskStatus>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> AppResult<Vec<Task>> {
    queries::list_tasks(conn, employee_id, status, start, end)
}
