//! Explicit caller identity. Services never read ambient session state;
//! whoever invokes them says who they are and the role gate checks it.

use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::role::Role;

#[derive(Debug, Clone)]
pub struct Actor {
    pub employee_id: Option<i64>,
    pub role: Role,
    pub label: String,
}

impl Actor {
    /// The local CLI operator: acts as admin, owns no employee profile.
    pub fn local_admin() -> Self {
        Self {
            employee_id: None,
            role: Role::Admin,
            label: "local".to_string(),
        }
    }

    pub fn from_employee(emp: &Employee) -> Self {
        Self {
            employee_id: Some(emp.employee_id),
            role: emp.role,
            label: emp.email.clone(),
        }
    }

    pub fn require_admin(&self) -> AppResult<()> {
        if self.role.is_admin() {
            Ok(())
        } else {
            Err(AppError::Forbidden(self.label.clone()))
        }
    }
}
