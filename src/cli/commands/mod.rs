pub mod attendance;
pub mod checkin;
pub mod config;
pub mod db;
pub mod dept;
pub mod employee;
pub mod import;
pub mod init;
pub mod log;
pub mod report;
pub mod task;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use rusqlite::Connection;

/// Open the configured database and make sure the schema is current.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

/// Resolve an employee by email or fail with NotFound.
pub(crate) fn require_employee(conn: &Connection, email: &str) -> AppResult<Employee> {
    crate::db::queries::get_employee_by_email(conn, email)?.ok_or(AppError::NotFound {
        entity: "employee",
        key: email.to_string(),
    })
}

/// Optional email filter → optional employee id (unknown email is an error,
/// not an empty result).
pub(crate) fn resolve_employee_filter(
    conn: &Connection,
    email: Option<&String>,
) -> AppResult<Option<i64>> {
    match email {
        None => Ok(None),
        Some(e) => Ok(Some(require_employee(conn, e)?.employee_id)),
    }
}
