use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the four entity tables with the modern schema.
///
/// Attendance carries a UNIQUE(employee_id, date) constraint so that two
/// simultaneous check-ins for the same employee and day can never produce
/// duplicate rows; the service layer treats a conflict as "row already
/// exists" and proceeds as an update.
fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS departments (
            dept_id      INTEGER PRIMARY KEY AUTOINCREMENT,
            dept_name    TEXT NOT NULL UNIQUE,
            manager_name TEXT
        );

        CREATE TABLE IF NOT EXISTS employees (
            employee_id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL,
            email         TEXT NOT NULL UNIQUE,
            role          TEXT NOT NULL DEFAULT 'employee' CHECK(role IN ('employee','admin')),
            department_id INTEGER REFERENCES departments(dept_id) ON DELETE SET NULL,
            join_date     TEXT,
            password_hash TEXT
        );

        CREATE TABLE IF NOT EXISTS attendance (
            attendance_id INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id   INTEGER NOT NULL REFERENCES employees(employee_id) ON DELETE CASCADE,
            date          TEXT NOT NULL,
            check_in      TEXT,
            check_out     TEXT,
            status        TEXT,
            UNIQUE(employee_id, date)
        );

        CREATE TABLE IF NOT EXISTS tasks (
            task_id            INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id        INTEGER NOT NULL REFERENCES employees(employee_id) ON DELETE CASCADE,
            task_name          TEXT NOT NULL,
            start_time         TEXT,
            end_time           TEXT,
            status             TEXT NOT NULL DEFAULT 'Pending',
            productivity_score REAL
        );

        CREATE INDEX IF NOT EXISTS idx_employees_department ON employees(department_id);
        CREATE INDEX IF NOT EXISTS idx_attendance_date      ON attendance(date);
        CREATE INDEX IF NOT EXISTS idx_tasks_emp_status     ON tasks(employee_id, status);
        CREATE INDEX IF NOT EXISTS idx_tasks_end_time       ON tasks(end_time);
        "#,
    )?;
    Ok(())
}

/// Record a migration in the log table, once.
fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    let fresh = !table_exists(conn, "attendance")?;

    create_schema(conn)?;

    if fresh {
        mark_applied(conn, "20250301_0001_base_schema", "Created base schema")?;
    }

    Ok(())
}
