pub mod date;
pub mod security;
pub mod time;
