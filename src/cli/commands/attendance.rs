use crate::cli::commands::{open_pool, resolve_employee_filter};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::date::parse_optional_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Attendance {
        employee,
        from,
        to,
        hours,
    } = cmd
    else {
        return Err(AppError::Other("invalid dispatch for attendance".into()));
    };

    let pool = open_pool(cfg)?;
    let emp_id = resolve_employee_filter(&pool.conn, employee.as_ref())?;
    let start = parse_optional_date(from.as_ref())?;
    let end = parse_optional_date(to.as_ref())?;

    if *hours {
        let points = attendance::hours_timeseries(&pool.conn, emp_id, start, end)?;
        if points.is_empty() {
            warning("No attendance records found.");
            return Ok(());
        }
        println!("{:<12} {:>6}  {:>6}", "Date", "Emp", "Hours");
        for p in points {
            println!(
                "{:<12} {:>6}  {:>6.2}",
                p.date.format("%Y-%m-%d"),
                p.employee_id,
                p.hours
            );
        }
        return Ok(());
    }

    let rows = attendance::list_attendance(&pool.conn, emp_id, start, end)?;
    if rows.is_empty() {
        warning("No attendance records found.");
        return Ok(());
    }
    println!(
        "{:<12} {:>6}  {:<20} {:<20} {}",
        "Date", "Emp", "Check-in", "Check-out", "Status"
    );
    for r in rows {
        println!(
            "{:<12} {:>6}  {:<20} {:<20} {}",
            r.date_str(),
            r.employee_id,
            r.check_in_str(),
            r.check_out_str(),
            r.status_str()
        );
    }
    Ok(())
}
