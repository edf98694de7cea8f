//! Status rules: pure functions turning timestamps and the configured
//! schedule into attendance classifications and reportable durations.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::attendance_status::AttendanceStatus;
use crate::utils::time::parse_time;
use chrono::{Duration, NaiveDateTime, NaiveTime};

/// Workday schedule, built once from configuration and injected into the
/// services. Construction is the single validation point: a malformed
/// workday_start or a negative threshold is a hard error, never a guess.
#[derive(Debug, Clone, Copy)]
pub struct Schedule {
    workday_start: NaiveTime,
    late_threshold: Duration,
}

impl Schedule {
    pub fn new(workday_start: NaiveTime, late_threshold_minutes: i64) -> AppResult<Self> {
        if late_threshold_minutes < 0 {
            return Err(AppError::Config(format!(
                "late_threshold_minutes must be non-negative, got {}",
                late_threshold_minutes
            )));
        }
        Ok(Self {
            workday_start,
            late_threshold: Duration::minutes(late_threshold_minutes),
        })
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let start = parse_time(&cfg.workday_start).ok_or_else(|| {
            AppError::Config(format!(
                "workday_start must be HH:MM, got '{}'",
                cfg.workday_start
            ))
        })?;
        Self::new(start, cfg.late_threshold_minutes)
    }

    /// Latest time-of-day that still counts as on time (inclusive).
    pub fn cutoff(&self) -> NaiveTime {
        self.workday_start.overflowing_add_signed(self.late_threshold).0
    }
}

/// Classify a check-in time against the schedule. Time-of-day only, so the
/// comparison is date-independent; landing exactly on the cutoff is OnTime.
pub fn classify(check_in: Option<NaiveTime>, schedule: &Schedule) -> AttendanceStatus {
    match check_in {
        None => AttendanceStatus::Unknown,
        Some(t) if t <= schedule.cutoff() => AttendanceStatus::OnTime,
        Some(_) => AttendanceStatus::Late,
    }
}

/// Worked hours between check-in and check-out, for reporting.
/// Missing endpoint → 0.0; never negative; rounded to 2 decimals.
pub fn duration_hours(
    check_in: Option<NaiveDateTime>,
    check_out: Option<NaiveDateTime>,
) -> f64 {
    let (Some(ci), Some(co)) = (check_in, check_out) else {
        return 0.0;
    };
    let hours = (co - ci).num_seconds() as f64 / 3600.0;
    (hours.max(0.0) * 100.0).round() / 100.0
}

/// Map a status label to a numeric scale for visualization.
/// Total over every possible string: anything unrecognized (Absent, empty,
/// garbage from an import) gets the "unknown" weight.
pub fn status_weight(status: Option<&str>) -> f64 {
    let Some(s) = status else {
        return 0.1;
    };
    let s = s.to_lowercase();
    if s.contains("on") && s.contains("time") {
        1.0
    } else if s.contains("late") {
        0.5
    } else {
        0.1
    }
}
