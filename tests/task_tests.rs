mod common;

use common::{date, open_db, seed_employee, setup_test_db, ts};
use stafftrack::core::actor::Actor;
use stafftrack::core::tasks::{create_task, delete_task, list_tasks, update_task};
use stafftrack::db::queries;
use stafftrack::models::employee::Employee;
use stafftrack::models::role::Role;
use stafftrack::models::task::TaskPatch;
use stafftrack::models::task_status::TaskStatus;

fn admin() -> Actor {
    Actor::local_admin()
}

#[test]
fn create_and_fetch_roundtrip() {
    let db = setup_test_db("task_create");
    let conn = open_db(&db);
    let emp = seed_employee(&conn, "Ada", "ada@example.com");

    let task = create_task(
        &conn,
        &admin(),
        emp,
        "Quarterly report",
        Some(ts(2026, 3, 2, 9, 0, 0)),
        None,
        TaskStatus::InProgress,
        Some(77.5),
    )
    .unwrap();

    let fetched = queries::get_task(&conn, task.task_id).unwrap().unwrap();
    assert_eq!(fetched.task_name, "Quarterly report");
    assert_eq!(fetched.status, TaskStatus::InProgress);
    assert_eq!(fetched.productivity_score, Some(77.5));
    assert!(fetched.end_time.is_none());
}

#[test]
fn create_for_unknown_employee_fails() {
    let db = setup_test_db("task_unknown_emp");
    let conn = open_db(&db);
    let err = create_task(&conn, &admin(), 42, "x", None, None, TaskStatus::Pending, None);
    assert!(err.is_err());
}

#[test]
fn non_admin_actor_cannot_create_tasks() {
    let db = setup_test_db("task_forbidden");
    let conn = open_db(&db);
    let emp_id = seed_employee(&conn, "Ada", "ada@example.com");
    let emp: Employee = queries::get_employee(&conn, emp_id).unwrap().unwrap();
    assert_eq!(emp.role, Role::Employee);

    let actor = Actor::from_employee(&emp);
    let err = create_task(&conn, &actor, emp_id, "x", None, None, TaskStatus::Pending, None);
    assert!(err.is_err());
}

#[test]
fn partial_update_touches_only_supplied_fields() {
    let db = setup_test_db("task_partial_update");
    let conn = open_db(&db);
    let emp = seed_employee(&conn, "Ada", "ada@example.com");

    let task = create_task(
        &conn,
        &admin(),
        emp,
        "Draft",
        Some(ts(2026, 3, 2, 9, 0, 0)),
        None,
        TaskStatus::Pending,
        None,
    )
    .unwrap();

    let patch = TaskPatch {
        status: Some(TaskStatus::Completed),
        end_time: Some(ts(2026, 3, 2, 16, 0, 0)),
        productivity_score: Some(90.0),
        ..TaskPatch::default()
    };
    let updated = update_task(&conn, task.task_id, &patch).unwrap().unwrap();

    assert_eq!(updated.task_name, "Draft");
    assert_eq!(updated.start_time, Some(ts(2026, 3, 2, 9, 0, 0)));
    assert_eq!(updated.status, TaskStatus::Completed);
    assert_eq!(updated.productivity_score, Some(90.0));
}

#[test]
fn update_of_missing_task_returns_none() {
    let db = setup_test_db("task_update_missing");
    let conn = open_db(&db);
    let patch = TaskPatch {
        task_name: Some("nope".to_string()),
        ..TaskPatch::default()
    };
    assert!(update_task(&conn, 123, &patch).unwrap().is_none());
}

#[test]
fn delete_is_idempotent_safe() {
    let db = setup_test_db("task_delete");
    let conn = open_db(&db);
    let emp = seed_employee(&conn, "Ada", "ada@example.com");
    let task = create_task(&conn, &admin(), emp, "x", None, None, TaskStatus::Pending, None)
        .unwrap();

    assert!(delete_task(&conn, &admin(), task.task_id).unwrap());
    assert!(!delete_task(&conn, &admin(), task.task_id).unwrap());
}

#[test]
fn listing_orders_newest_start_first_with_unstarted_last() {
    let db = setup_test_db("task_order");
    let conn = open_db(&db);
    let emp = seed_employee(&conn, "Ada", "ada@example.com");
    let a = admin();

    create_task(&conn, &a, emp, "old", Some(ts(2026, 3, 1, 9, 0, 0)), None, TaskStatus::Pending, None).unwrap();
    create_task(&conn, &a, emp, "new", Some(ts(2026, 3, 5, 9, 0, 0)), None, TaskStatus::Pending, None).unwrap();
    create_task(&conn, &a, emp, "unscheduled", None, None, TaskStatus::Pending, None).unwrap();

    let rows = list_tasks(&conn, Some(emp), None, None, None).unwrap();
    let names: Vec<&str> = rows.iter().map(|t| t.task_name.as_str()).collect();
    assert_eq!(names, vec!["new", "old", "unscheduled"]);
}

#[test]
fn status_and_range_filters_combine() {
    let db = setup_test_db("task_filters");
    let conn = open_db(&db);
    let emp = seed_employee(&conn, "Ada", "ada@example.com");
    let a = admin();

    create_task(
        &conn,
        &a,
        emp,
        "done in range",
        Some(ts(2026, 3, 2, 9, 0, 0)),
        Some(ts(2026, 3, 2, 17, 0, 0)),
        TaskStatus::Completed,
        Some(80.0),
    )
    .unwrap();
    create_task(
        &conn,
        &a,
        emp,
        "pending in range",
        Some(ts(2026, 3, 3, 9, 0, 0)),
        Some(ts(2026, 3, 3, 17, 0, 0)),
        TaskStatus::Pending,
        None,
    )
    .unwrap();
    create_task(
        &conn,
        &a,
        emp,
        "done out of range",
        Some(ts(2026, 4, 1, 9, 0, 0)),
        Some(ts(2026, 4, 1, 17, 0, 0)),
        TaskStatus::Completed,
        None,
    )
    .unwrap();

    let rows = list_tasks(
        &conn,
        Some(emp),
        Some(TaskStatus::Completed),
        Some(date(2026, 3, 1)),
        Some(date(2026, 3, 31)),
    )
    .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].task_name, "done in range");
}
