use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Department {
    pub dept_id: i64,
    pub dept_name: String,   // ⇔ departments.dept_name (TEXT UNIQUE)
    pub manager_name: Option<String>,
}
