use crate::cli::commands::{open_pool, require_employee};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance;
use crate::core::status::Schedule;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::{parse_optional_date, today};
use crate::utils::time::parse_optional_time;
use chrono::NaiveDateTime;

fn resolve_when(date: Option<&String>, at: Option<&String>) -> AppResult<NaiveDateTime> {
    let d = parse_optional_date(date)?.unwrap_or_else(today);
    let t = match parse_optional_time(at)? {
        Some(t) => t,
        None => chrono::Local::now().time(),
    };
    Ok(d.and_time(t))
}

/// Handles both `check-in` and `check-out`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (email, date, at, is_in) = match cmd {
        Commands::CheckIn { email, date, at } => (email, date, at, true),
        Commands::CheckOut { email, date, at } => (email, date, at, false),
        _ => return Err(AppError::Other("invalid dispatch for check-in".into())),
    };

    let pool = open_pool(cfg)?;
    let schedule = Schedule::from_config(cfg)?;
    let emp = require_employee(&pool.conn, email)?;
    let when = resolve_when(date.as_ref(), at.as_ref())?;

    let att = if is_in {
        attendance::check_in(&pool.conn, &schedule, emp.employee_id, when)?
    } else {
        attendance::check_out(&pool.conn, &schedule, emp.employee_id, when)?
    };

    success(format!(
        "{} recorded for {} on {} (status: {}).",
        if is_in { "Check-in" } else { "Check-out" },
        emp.email,
        att.date_str(),
        att.status_str()
    ));
    Ok(())
}
