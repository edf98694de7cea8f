use super::role::Role;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub employee_id: i64,
    pub name: String,
    pub email: String, // unique, matched exactly on import
    pub role: Role,
    pub department_id: Option<i64>,
    pub join_date: Option<NaiveDate>,
    /// Argon2 hash; the raw password is never stored.
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
}

/// Partial update for employees; only supplied fields are applied. The raw
/// password is hashed by the service before it reaches the store.
#[derive(Debug, Default, Clone)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub department_id: Option<Option<i64>>,
    pub join_date: Option<NaiveDate>,
    pub password_hash: Option<String>,
}

impl Employee {
    pub fn join_date_str(&self) -> String {
        self.join_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}
