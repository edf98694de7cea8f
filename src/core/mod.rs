pub mod actor;
pub mod analytics;
pub mod attendance;
pub mod import;
pub mod personnel;
pub mod status;
pub mod tasks;
