mod common;

use chrono::NaiveTime;
use common::{schedule, ts};
use stafftrack::core::status::{classify, duration_hours, status_weight, Schedule};
use stafftrack::models::attendance_status::AttendanceStatus;

fn t(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

#[test]
fn on_the_cutoff_is_on_time() {
    let sched = schedule();
    assert_eq!(classify(Some(t(9, 15, 0)), &sched), AttendanceStatus::OnTime);
}

#[test]
fn one_second_past_the_cutoff_is_late() {
    let sched = schedule();
    assert_eq!(classify(Some(t(9, 15, 1)), &sched), AttendanceStatus::Late);
}

#[test]
fn early_arrival_is_on_time() {
    let sched = schedule();
    assert_eq!(classify(Some(t(7, 0, 0)), &sched), AttendanceStatus::OnTime);
}

#[test]
fn missing_check_in_is_unknown() {
    let sched = schedule();
    assert_eq!(classify(None, &sched), AttendanceStatus::Unknown);
}

#[test]
fn zero_threshold_makes_start_the_cutoff() {
    let sched = Schedule::new(t(9, 0, 0), 0).unwrap();
    assert_eq!(classify(Some(t(9, 0, 0)), &sched), AttendanceStatus::OnTime);
    assert_eq!(classify(Some(t(9, 0, 1)), &sched), AttendanceStatus::Late);
}

#[test]
fn negative_threshold_is_rejected() {
    assert!(Schedule::new(t(9, 0, 0), -1).is_err());
}

#[test]
fn worked_hours_standard_day() {
    let hours = duration_hours(
        Some(ts(2026, 3, 2, 9, 0, 0)),
        Some(ts(2026, 3, 2, 17, 30, 0)),
    );
    assert!((hours - 8.5).abs() < f64::EPSILON);
}

#[test]
fn worked_hours_missing_endpoint_is_zero() {
    assert_eq!(duration_hours(Some(ts(2026, 3, 2, 9, 0, 0)), None), 0.0);
    assert_eq!(duration_hours(None, Some(ts(2026, 3, 2, 17, 0, 0))), 0.0);
    assert_eq!(duration_hours(None, None), 0.0);
}

#[test]
fn worked_hours_never_negative() {
    let hours = duration_hours(
        Some(ts(2026, 3, 2, 17, 0, 0)),
        Some(ts(2026, 3, 2, 9, 0, 0)),
    );
    assert_eq!(hours, 0.0);
}

#[test]
fn status_labels_round_trip() {
    for status in [
        AttendanceStatus::OnTime,
        AttendanceStatus::Late,
        AttendanceStatus::Unknown,
    ] {
        assert_eq!(AttendanceStatus::from_db_str(status.to_db_str()), Some(status));
    }
    assert_eq!(AttendanceStatus::from_db_str("Absent"), None);
}

#[test]
fn status_weight_is_total_over_any_label() {
    assert_eq!(status_weight(Some("On Time")), 1.0);
    assert_eq!(status_weight(Some("on-time")), 1.0);
    assert_eq!(status_weight(Some("Late")), 0.5);
    assert_eq!(status_weight(Some("LATE")), 0.5);
    assert_eq!(status_weight(Some("Absent")), 0.1);
    assert_eq!(status_weight(Some("")), 0.1);
    assert_eq!(status_weight(Some("garbage")), 0.1);
    assert_eq!(status_weight(None), 0.1);
}
