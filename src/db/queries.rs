//! Record store adapter: plain CRUD over the four entity collections.
//! No business rules live here; services in `core` own the policy.

use crate::errors::{AppError, AppResult};
use crate::models::attendance::Attendance;
use crate::models::department::Department;
use crate::models::employee::{Employee, EmployeePatch};
use crate::models::role::Role;
use crate::models::task::{Task, TaskPatch};
use crate::models::task_status::TaskStatus;
use crate::utils::time::format_timestamp;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension, Result, Row, ToSql};

fn conv_err(e: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
}

fn parse_db_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| conv_err(AppError::InvalidDate(s.to_string())))
}

fn parse_db_timestamp(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map_err(|_| conv_err(AppError::InvalidTimestamp(s.to_string())))
}

fn opt_timestamp(row: &Row, col: &str) -> Result<Option<NaiveDateTime>> {
    let raw: Option<String> = row.get(col)?;
    raw.as_deref().map(parse_db_timestamp).transpose()
}

// ---------------------- Departments ----------------------

pub fn map_department_row(row: &Row) -> Result<Department> {
    Ok(Department {
        dept_id: row.get("dept_id")?,
        dept_name: row.get("dept_name")?,
        manager_name: row.get("manager_name")?,
    })
}

pub fn list_departments(conn: &Connection) -> AppResult<Vec<Department>> {
    let mut stmt =
        conn.prepare("SELECT * FROM departments ORDER BY dept_name ASC")?;
    let rows = stmt.query_map([], map_department_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_department(conn: &Connection, dept_id: i64) -> AppResult<Option<Department>> {
    let mut stmt = conn.prepare("SELECT * FROM departments WHERE dept_id = ?1")?;
    Ok(stmt.query_row([dept_id], map_department_row).optional()?)
}

pub fn insert_department(
    conn: &Connection,
    dept_name: &str,
    manager_name: Option<&str>,
) -> AppResult<Department> {
    conn.execute(
        "INSERT INTO departments (dept_name, manager_name) VALUES (?1, ?2)",
        params![dept_name, manager_name],
    )?;
    let id = conn.last_insert_rowid();
    get_department(conn, id)?
        .ok_or_else(|| AppError::Other("department vanished after insert".into()))
}

pub fn count_department_employees(conn: &Connection, dept_id: i64) -> AppResult<i64> {
    let n: i64 = conn.query_row(
        "SELECT COUNT(*) FROM employees WHERE department_id = ?1",
        [dept_id],
        |row| row.get(0),
    )?;
    Ok(n)
}

pub fn delete_department(conn: &Connection, dept_id: i64) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM departments WHERE dept_id = ?1", [dept_id])?;
    Ok(n > 0)
}

// ---------------------- Employees ----------------------

pub fn map_employee_row(row: &Row) -> Result<Employee> {
    let role_str: String = row.get("role")?;
    let role = Role::from_db_str(&role_str)
        .ok_or_else(|| conv_err(AppError::InvalidRole(role_str.clone())))?;

    let join_raw: Option<String> = row.get("join_date")?;
    let join_date = join_raw.as_deref().map(parse_db_date).transpose()?;

    Ok(Employee {
        employee_id: row.get("employee_id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        role,
        department_id: row.get("department_id")?,
        join_date,
        password_hash: row.get("password_hash")?,
    })
}

pub fn list_employees(conn: &Connection, department_id: Option<i64>) -> AppResult<Vec<Employee>> {
    let mut sql = String::from("SELECT * FROM employees");
    let mut binds: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(dept) = department_id {
        sql.push_str(" WHERE department_id = ?");
        binds.push(Box::new(dept));
    }
    sql.push_str(" ORDER BY name ASC");

    let mut stmt = conn.prepare(&sql)?;
    let refs: Vec<&dyn ToSql> = binds.iter().map(|b| b.as_ref()).collect();
    let rows = stmt.query_map(&refs[..], map_employee_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_employee(conn: &Connection, employee_id: i64) -> AppResult<Option<Employee>> {
    let mut stmt = conn.prepare("SELECT * FROM employees WHERE employee_id = ?1")?;
    Ok(stmt.query_row([employee_id], map_employee_row).optional()?)
}

pub fn get_employee_by_email(conn: &Connection, email: &str) -> AppResult<Option<Employee>> {
    let mut stmt = conn.prepare("SELECT * FROM employees WHERE email = ?1")?;
    Ok(stmt.query_row([email], map_employee_row).optional()?)
}

pub fn insert_employee(
    conn: &Connection,
    name: &str,
    email: &str,
    role: Role,
    department_id: Option<i64>,
    join_date: Option<NaiveDate>,
    password_hash: Option<&str>,
) -> AppResult<Employee> {
    conn.execute(
        "INSERT INTO employees (name, email, role, department_id, join_date, password_hash)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            name,
            email,
            role.to_db_str(),
            department_id,
            join_date.map(|d| d.format("%Y-%m-%d").to_string()),
            password_hash,
        ],
    )?;
    let id = conn.last_insert_rowid();
    get_employee(conn, id)?.ok_or_else(|| AppError::Other("employee vanished after insert".into()))
}

/// Field-by-field partial update; `None` fields stay untouched.
pub fn update_employee(
    conn: &Connection,
    employee_id: i64,
    patch: &EmployeePatch,
) -> AppResult<Option<Employee>> {
    let Some(current) = get_employee(conn, employee_id)? else {
        return Ok(None);
    };

    let name = patch.name.as_deref().unwrap_or(&current.name);
    let email = patch.email.as_deref().unwrap_or(&current.email);
    let role = patch.role.unwrap_or(current.role);
    let department_id = patch.department_id.unwrap_or(current.department_id);
    let join_date = patch.join_date.or(current.join_date);
    let password_hash = patch
        .password_hash
        .as_deref()
        .or(current.password_hash.as_deref());

    conn.execute(
        "UPDATE employees
         SET name = ?1, email = ?2, role = ?3,
             department_id = ?4, join_date = ?5, password_hash = ?6
         WHERE employee_id = ?7",
        params![
            name,
            email,
            role.to_db_str(),
            department_id,
            join_date.map(|d| d.format("%Y-%m-%d").to_string()),
            password_hash,
            employee_id,
        ],
    )?;

    get_employee(conn, employee_id)
}

pub fn delete_employee(conn: &Connection, employee_id: i64) -> AppResult<bool> {
    // attendance and tasks go with it (ON DELETE CASCADE)
    let n = conn.execute("DELETE FROM employees WHERE employee_id = ?1", [employee_id])?;
    Ok(n > 0)
}

// ---------------------- Attendance ----------------------

pub fn map_attendance_row(row: &Row) -> Result<Attendance> {
    let date_str: String = row.get("date")?;

    Ok(Attendance {
        attendance_id: row.get("attendance_id")?,
        employee_id: row.get("employee_id")?,
        date: parse_db_date(&date_str)?,
        check_in: opt_timestamp(row, "check_in")?,
        check_out: opt_timestamp(row, "check_out")?,
        status: row.get("status")?,
    })
}

pub fn get_attendance(
    conn: &Connection,
    employee_id: i64,
    date: NaiveDate,
) -> AppResult<Option<Attendance>> {
    let mut stmt =
        conn.prepare("SELECT * FROM attendance WHERE employee_id = ?1 AND date = ?2")?;
    Ok(stmt
        .query_row(
            params![employee_id, date.format("%Y-%m-%d").to_string()],
            map_attendance_row,
        )
        .optional()?)
}

/// Fetch the row for (employee, date) or insert one if absent.
///
/// The insert leans on the store's UNIQUE(employee_id, date) constraint:
/// a concurrent writer that got there first turns our insert into a no-op
/// and the re-select returns their row.
pub fn get_or_create_attendance(
    conn: &Connection,
    employee_id: i64,
    date: NaiveDate,
) -> AppResult<Attendance> {
    conn.execute(
        "INSERT INTO attendance (employee_id, date) VALUES (?1, ?2)
         ON CONFLICT(employee_id, date) DO NOTHING",
        params![employee_id, date.format("%Y-%m-%d").to_string()],
    )?;

    get_attendance(conn, employee_id, date)?.ok_or(AppError::NotFound {
        entity: "attendance",
        key: format!("employee {} on {}", employee_id, date),
    })
}

/// Persist the mutable fields of an attendance row (all except identity).
pub fn update_attendance(conn: &Connection, att: &Attendance) -> AppResult<()> {
    conn.execute(
        "UPDATE attendance
         SET check_in = ?1, check_out = ?2, status = ?3
         WHERE attendance_id = ?4",
        params![
            att.check_in.map(format_timestamp),
            att.check_out.map(format_timestamp),
            att.status,
            att.attendance_id,
        ],
    )?;
    Ok(())
}

pub fn list_attendance(
    conn: &Connection,
    employee_id: Option<i64>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> AppResult<Vec<Attendance>> {
    let mut sql = String::from("SELECT * FROM attendance");
    let mut clauses: Vec<&str> = Vec::new();
    let mut binds: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(id) = employee_id {
        clauses.push("employee_id = ?");
        binds.push(Box::new(id));
    }
    if let Some(d) = start {
        clauses.push("date >= ?");
        binds.push(Box::new(d.format("%Y-%m-%d").to_string()));
    }
    if let Some(d) = end {
        clauses.push("date <= ?");
        binds.push(Box::new(d.format("%Y-%m-%d").to_string()));
    }

    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY date DESC");

    let mut stmt = conn.prepare(&sql)?;
    let refs: Vec<&dyn ToSql> = binds.iter().map(|b| b.as_ref()).collect();
    let rows = stmt.query_map(&refs[..], map_attendance_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------- Tasks ----------------------

pub fn map_task_row(row: &Row) -> Result<Task> {
    let status_str: String = row.get("status")?;
    let status = TaskStatus::from_db_str(&status_str)
        .ok_or_else(|| conv_err(AppError::InvalidStatus(status_str.clone())))?;

    Ok(Task {
        task_id: row.get("task_id")?,
        employee_id: row.get("employee_id")?,
        task_name: row.get("task_name")?,
        start_time: opt_timestamp(row, "start_time")?,
        end_time: opt_timestamp(row, "end_time")?,
        status,
        productivity_score: row.get("productivity_score")?,
    })
}

pub fn get_task(conn: &Connection, task_id: i64) -> AppResult<Option<Task>> {
    let mut stmt = conn.prepare("SELECT * FROM tasks WHERE task_id = ?1")?;
    Ok(stmt.query_row([task_id], map_task_row).optional()?)
}

pub fn insert_task(
    conn: &Connection,
    employee_id: i64,
    task_name: &str,
    start_time: Option<NaiveDateTime>,
    end_time: Option<NaiveDateTime>,
    status: TaskStatus,
    productivity_score: Option<f64>,
) -> AppResult<Task> {
    conn.execute(
        "INSERT INTO tasks (employee_id, task_name, start_time, end_time, status, productivity_score)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            employee_id,
            task_name,
            start_time.map(format_timestamp),
            end_time.map(format_timestamp),
            status.to_db_str(),
            productivity_score,
        ],
    )?;
    let id = conn.last_insert_rowid();
    get_task(conn, id)?.ok_or_else(|| AppError::Other("task vanished after insert".into()))
}

/// Field-by-field partial update; `None` fields stay untouched.
pub fn update_task(
    conn: &Connection,
    task_id: i64,
    patch: &TaskPatch,
) -> AppResult<Option<Task>> {
    let Some(current) = get_task(conn, task_id)? else {
        return Ok(None);
    };

    let task_name = patch.task_name.as_deref().unwrap_or(&current.task_name);
    let start_time = patch.start_time.or(current.start_time);
    let end_time = patch.end_time.or(current.end_time);
    let status = patch.status.unwrap_or(current.status);
    let productivity_score = patch.productivity_score.or(current.productivity_score);

    conn.execute(
        "UPDATE tasks
         SET task_name = ?1, start_time = ?2, end_time = ?3,
             status = ?4, productivity_score = ?5
         WHERE task_id = ?6",
        params![
            task_name,
            start_time.map(format_timestamp),
            end_time.map(format_timestamp),
            status.to_db_str(),
            productivity_score,
            task_id,
        ],
    )?;

    get_task(conn, task_id)
}

pub fn delete_task(conn: &Connection, task_id: i64) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM tasks WHERE task_id = ?1", [task_id])?;
    Ok(n > 0)
}

pub fn list_tasks(
    conn: &Connection,
    employee_id: Option<i64>,
    status: Option<TaskStatus>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> AppResult<Vec<Task>> {
    let mut sql = String::from("SELECT * FROM tasks");
    let mut clauses: Vec<&str> = Vec::new();
    let mut binds: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(id) = employee_id {
        clauses.push("employee_id = ?");
        binds.push(Box::new(id));
    }
    if let Some(st) = status {
        clauses.push("status = ?");
        binds.push(Box::new(st.to_db_str()));
    }
    if let Some(d) = start {
        clauses.push("start_time >= ?");
        binds.push(Box::new(format!("{} 00:00:00", d.format("%Y-%m-%d"))));
    }
    if let Some(d) = end {
        clauses.push("end_time <= ?");
        binds.push(Box::new(format!("{} 23:59:59", d.format("%Y-%m-%d"))));
    }

    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    // Newest first; tasks that never started sort last.
    sql.push_str(" ORDER BY (start_time IS NULL) ASC, start_time DESC");

    let mut stmt = conn.prepare(&sql)?;
    let refs: Vec<&dyn ToSql> = binds.iter().map(|b| b.as_ref()).collect();
    let rows = stmt.query_map(&refs[..], map_task_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
