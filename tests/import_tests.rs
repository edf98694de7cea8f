mod common;

use common::{date, open_db, seed_employee, setup_test_db, ts};
use stafftrack::core::import::{import_attendance_csv, import_tasks_csv, RowError};
use stafftrack::db::queries;
use stafftrack::models::task_status::TaskStatus;

#[test]
fn bad_rows_are_reported_good_rows_land() {
    let db = setup_test_db("imp_mixed");
    let mut conn = open_db(&db);
    seed_employee(&conn, "Ada", "ada@example.com");

    let csv = "email,date,check_in,check_out,status\n\
               ada@example.com,2026-03-02,2026-03-02 09:00:00,2026-03-02 17:00:00,On Time\n\
               ghost@example.com,2026-03-02,2026-03-02 09:00:00,,\n";

    let report = import_attendance_csv(&mut conn, csv.as_bytes()).unwrap();
    assert_eq!(report.processed, 1);
    assert_eq!(report.errors(), 1);
    assert!(!report.is_clean());
    assert_eq!(report.failures[0].line, 3);
    assert!(matches!(report.failures[0].error, RowError::UnknownEmail(_)));

    // the good row is durable despite the failure
    let emp = queries::get_employee_by_email(&conn, "ada@example.com")
        .unwrap()
        .unwrap();
    let att = queries::get_attendance(&conn, emp.employee_id, date(2026, 3, 2))
        .unwrap()
        .unwrap();
    assert_eq!(att.check_in, Some(ts(2026, 3, 2, 9, 0, 0)));
    assert_eq!(att.status.as_deref(), Some("On Time"));
}

#[test]
fn attendance_import_is_authoritative_for_the_day() {
    let db = setup_test_db("imp_overwrite");
    let mut conn = open_db(&db);
    let emp = seed_employee(&conn, "Ada", "ada@example.com");

    let first = "email,date,check_in,check_out,status\n\
                 ada@example.com,2026-03-02,2026-03-02 08:00:00,,Late\n";
    import_attendance_csv(&mut conn, first.as_bytes()).unwrap();

    // re-import replaces check-in, check-out and status wholesale
    let second = "email,date,check_in,check_out,status\n\
                  ada@example.com,2026-03-02,2026-03-02 09:00:00,2026-03-02 17:00:00,On Time\n";
    let report = import_attendance_csv(&mut conn, second.as_bytes()).unwrap();
    assert_eq!(report.processed, 1);

    let att = queries::get_attendance(&conn, emp, date(2026, 3, 2))
        .unwrap()
        .unwrap();
    assert_eq!(att.check_in, Some(ts(2026, 3, 2, 9, 0, 0)));
    assert_eq!(att.check_out, Some(ts(2026, 3, 2, 17, 0, 0)));
    assert_eq!(att.status.as_deref(), Some("On Time"));

    // still one row for the (employee, day)
    let rows = queries::list_attendance(&conn, Some(emp), None, None).unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn malformed_cells_get_specific_errors() {
    let db = setup_test_db("imp_cells");
    let mut conn = open_db(&db);
    seed_employee(&conn, "Ada", "ada@example.com");

    let csv = "email,date,check_in,check_out,status\n\
               ada@example.com,not-a-date,,,\n\
               ada@example.com,2026-03-02,noon,,\n\
               ,2026-03-02,,,\n";

    let report = import_attendance_csv(&mut conn, csv.as_bytes()).unwrap();
    assert_eq!(report.processed, 0);
    assert_eq!(report.errors(), 3);
    assert!(matches!(report.failures[0].error, RowError::BadDate(_)));
    assert!(matches!(report.failures[1].error, RowError::BadTimestamp(_)));
    assert!(matches!(
        report.failures[2].error,
        RowError::MissingField("email")
    ));
}

#[test]
fn slashed_dates_are_accepted() {
    let db = setup_test_db("imp_lenient_dates");
    let mut conn = open_db(&db);
    let emp = seed_employee(&conn, "Ada", "ada@example.com");

    let csv = "email,date,check_in,check_out,status\n\
               ada@example.com,02/03/2026,,,\n";
    let report = import_attendance_csv(&mut conn, csv.as_bytes()).unwrap();
    assert_eq!(report.processed, 1);

    assert!(queries::get_attendance(&conn, emp, date(2026, 3, 2))
        .unwrap()
        .is_some());
}

#[test]
fn task_import_defaults_and_rejections() {
    let db = setup_test_db("imp_tasks");
    let mut conn = open_db(&db);
    let emp = seed_employee(&conn, "Ada", "ada@example.com");

    let csv = "email,task_name,start_time,end_time,status,productivity_score\n\
               ada@example.com,Report,2026-03-02 09:00,2026-03-02 17:00,in-progress,88.5\n\
               ada@example.com,Cleanup,,,,\n\
               ada@example.com,Bad status,,,sorta done,\n\
               ada@example.com,Bad score,,,completed,high\n";

    let report = import_tasks_csv(&mut conn, csv.as_bytes()).unwrap();
    assert_eq!(report.processed, 2);
    assert_eq!(report.errors(), 2);
    assert!(matches!(report.failures[0].error, RowError::BadStatus(_)));
    assert!(matches!(report.failures[1].error, RowError::BadScore(_)));

    let tasks = queries::list_tasks(&conn, Some(emp), None, None, None).unwrap();
    assert_eq!(tasks.len(), 2);

    let report_task = tasks.iter().find(|t| t.task_name == "Report").unwrap();
    assert_eq!(report_task.status, TaskStatus::InProgress);
    assert_eq!(report_task.productivity_score, Some(88.5));
    assert_eq!(report_task.start_time, Some(ts(2026, 3, 2, 9, 0, 0)));

    // empty status cell falls back to Pending, empty score stays NULL
    let cleanup = tasks.iter().find(|t| t.task_name == "Cleanup").unwrap();
    assert_eq!(cleanup.status, TaskStatus::Pending);
    assert!(cleanup.productivity_score.is_none());
}

#[test]
fn structurally_broken_rows_do_not_abort_the_batch() {
    let db = setup_test_db("imp_broken");
    let mut conn = open_db(&db);
    seed_employee(&conn, "Ada", "ada@example.com");

    let csv = "email,date,check_in,check_out,status\n\
               ada@example.com,2026-03-02,,,extra,cells,here\n\
               ada@example.com,2026-03-03,,,\n";

    let report = import_attendance_csv(&mut conn, csv.as_bytes()).unwrap();
    assert_eq!(report.processed, 1);
    assert_eq!(report.errors(), 1);
    assert!(matches!(report.failures[0].error, RowError::Malformed(_)));
}
