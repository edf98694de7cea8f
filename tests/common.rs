#![allow(dead_code)]
use assert_cmd::{cargo_bin_cmd, Command};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sft() -> Command {
    cargo_bin_cmd!("stafftrack")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_stafftrack.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Open a connection on the test DB with the schema in place.
pub fn open_db(db_path: &str) -> rusqlite::Connection {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.pragma_update(None, "foreign_keys", true)
        .expect("enable foreign keys");
    stafftrack::db::initialize::init_db(&conn).expect("init db");
    conn
}

/// Insert an employee directly via the library API, returning its id.
pub fn seed_employee(conn: &rusqlite::Connection, name: &str, email: &str) -> i64 {
    stafftrack::db::queries::insert_employee(
        conn,
        name,
        email,
        stafftrack::models::role::Role::Employee,
        None,
        None,
        None,
    )
    .expect("insert employee")
    .employee_id
}

/// Insert a department directly via the library API, returning its id.
pub fn seed_department(conn: &rusqlite::Connection, name: &str) -> i64 {
    stafftrack::db::queries::insert_department(conn, name, None)
        .expect("insert department")
        .dept_id
}

/// Default 09:00 + 15 minute schedule used across tests.
pub fn schedule() -> stafftrack::core::status::Schedule {
    stafftrack::core::status::Schedule::new(
        chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        15,
    )
    .expect("schedule")
}

pub fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn ts(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> chrono::NaiveDateTime {
    date(y, m, d).and_hms_opt(h, mi, s).unwrap()
}
