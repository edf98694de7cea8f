use serde::Serialize;

/// Attendance classification computed from the check-in time against the
/// configured cutoff (workday start + late threshold).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum AttendanceStatus {
    OnTime,
    Late,
    Unknown,
}

impl AttendanceStatus {
    /// Label stored in the attendance.status column.
    pub fn to_db_str(&self) -> &'static str {
        match self {
            AttendanceStatus::OnTime => "On Time",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::Unknown => "Unknown",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "On Time" => Some(AttendanceStatus::OnTime),
            "Late" => Some(AttendanceStatus::Late),
            "Unknown" => Some(AttendanceStatus::Unknown),
            _ => None,
        }
    }
}
