pub mod attendance;
pub mod attendance_status;
pub mod department;
pub mod employee;
pub mod role;
pub mod task;
pub mod task_status;
