//! Employee and department management. Mutations are admin-gated through
//! the explicit actor; lookups go straight to the store.

use crate::core::actor::Actor;
use crate::db::{log, queries};
use crate::errors::{AppError, AppResult};
use crate::models::department::Department;
use crate::models::employee::{Employee, EmployeePatch};
use crate::models::role::Role;
use crate::utils::security::hash_password;
use chrono::NaiveDate;
use rusqlite::Connection;

#[allow(clippy::too_many_arguments)]
pub fn create_employee(
    conn: &Connection,
    actor: &Actor,
    name: &str,
    email: &str,
    role: Role,
    department_id: Option<i64>,
    join_date: Option<NaiveDate>,
    password: Option<&str>,
) -> AppResult<Employee> {
    actor.require_admin()?;

    if let Some(dept) = department_id {
        if queries::get_department(conn, dept)?.is_none() {
            return Err(AppError::NotFound {
                entity: "department",
                key: dept.to_string(),
            });
        }
    }

    let password_hash = password.map(hash_password).transpose()?;
    let emp = queries::insert_employee(
        conn,
        name,
        email,
        role,
        department_id,
        join_date,
        password_hash.as_deref(),
    )?;

    log::record(conn, "employee_created", email, name)?;
    Ok(emp)
}

/// Partial update; a supplied raw password is hashed before it reaches the
/// store.
pub fn update_employee(
    conn: &Connection,
    actor: &Actor,
    employee_id: i64,
    mut patch: EmployeePatch,
    password: Option<&str>,
) -> AppResult<Option<Employee>> {
    actor.require_admin()?;

    if let Some(Some(dept)) = patch.department_id {
        if queries::get_department(conn, dept)?.is_none() {
            return Err(AppError::NotFound {
                entity: "department",
                key: dept.to_string(),
            });
        }
    }

    if let Some(raw) = password {
        patch.password_hash = Some(hash_password(raw)?);
    }

    let updated = queries::update_employee(conn, employee_id, &patch)?;
    if updated.is_some() {
        log::record(conn, "employee_updated", &employee_id.to_string(), "")?;
    }
    Ok(updated)
}

/// Deleting an employee also removes all of their attendance and task rows
/// (the employee exclusively owns them).
pub fn delete_employee(conn: &Connection, actor: &Actor, employee_id: i64) -> AppResult<bool> {
    actor.require_admin()?;

    let removed = queries::delete_employee(conn, employee_id)?;
    if removed {
        log::record(conn, "employee_deleted", &employee_id.to_string(), "")?;
    }
    Ok(removed)
}

pub fn create_department(
    conn: &Connection,
    actor: &Actor,
    dept_name: &str,
    manager_name: Option<&str>,
) -> AppResult<Department> {
    actor.require_admin()?;

    let dept = queries::insert_department(conn, dept_name, manager_name)?;
    log::record(conn, "department_created", dept_name, "")?;
    Ok(dept)
}

/// Deletion is restricted: a department that still has employees assigned
/// cannot be removed, so references never dangle silently.
pub fn delete_department(conn: &Connection, actor: &Actor, dept_id: i64) -> AppResult<bool> {
    actor.require_admin()?;

    let Some(dept) = queries::get_department(conn, dept_id)? else {
        return Ok(false);
    };

    if queries::count_department_employees(conn, dept_id)? > 0 {
        return Err(AppError::DepartmentNotEmpty(dept.dept_name));
    }

    let removed = queries::delete_department(conn, dept_id)?;
    if removed {
        log::record(conn, "department_deleted", &dept.dept_name, "")?;
    }
    Ok(removed)
}

/// Resolve the acting identity for a CLI invocation: a stored employee when
/// `--actor EMAIL` was given, the local admin operator otherwise.
pub fn resolve_actor(conn: &Connection, email: Option<&str>) -> AppResult<Actor> {
    match email {
        None => Ok(Actor::local_admin()),
        Some(e) => {
            let emp = queries::get_employee_by_email(conn, e)?.ok_or(AppError::NotFound {
                entity: "employee",
                key: e.to_string(),
            })?;
            Ok(Actor::from_employee(&emp))
        }
    }
}
