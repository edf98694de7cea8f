use super::task_status::TaskStatus;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub task_id: i64,
    pub employee_id: i64,
    pub task_name: String,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub status: TaskStatus,
    /// Intended range 0-100; not enforced by the model.
    pub productivity_score: Option<f64>,
}

/// Partial update: only the supplied fields are applied, everything else is
/// left untouched. Listing the legal mutable fields explicitly keeps the
/// update surface compile-time checked.
#[derive(Debug, Default, Clone)]
pub struct TaskPatch {
    pub task_name: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub status: Option<TaskStatus>,
    pub productivity_score: Option<f64>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.task_name.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.status.is_none()
            && self.productivity_score.is_none()
    }
}

impl Task {
    pub fn start_str(&self) -> String {
        self.start_time
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn end_str(&self) -> String {
        self.end_time
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn score_str(&self) -> String {
        self.productivity_score
            .map(|s| format!("{:.1}", s))
            .unwrap_or_else(|| "-".to_string())
    }
}
