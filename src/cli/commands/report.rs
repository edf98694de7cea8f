use crate::cli::commands::{open_pool, resolve_employee_filter};
use crate::cli::parser::ReportKind;
use crate::config::Config;
use crate::core::analytics;
use crate::errors::{AppError, AppResult};
use crate::export::write_table;
use crate::ui::messages::warning;
use crate::utils::date::{parse_date, parse_optional_date};
use chrono::NaiveDate;

fn required_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn handle(kind: &ReportKind, cfg: &Config) -> AppResult<()> {
    let pool = open_pool(cfg)?;

    match kind {
        ReportKind::DepartmentProductivity {
            from,
            to,
            format,
            out,
        } => {
            let rows = analytics::department_productivity(
                &pool.conn,
                parse_optional_date(from.as_ref())?,
                parse_optional_date(to.as_ref())?,
            )?;
            if let Some(path) = out {
                return write_table(format, path, "Department productivity", &rows);
            }
            if rows.is_empty() {
                warning("No scored tasks in range.");
                return Ok(());
            }
            println!("{:<24} {}", "Department", "Avg score");
            for r in rows {
                println!("{:<24} {:.2}", r.department, r.avg_productivity);
            }
        }

        ReportKind::TopPerformers {
            limit,
            from,
            to,
            format,
            out,
        } => {
            let rows = analytics::top_performers(
                &pool.conn,
                *limit,
                parse_optional_date(from.as_ref())?,
                parse_optional_date(to.as_ref())?,
            )?;
            if let Some(path) = out {
                return write_table(format, path, "Top performers", &rows);
            }
            if rows.is_empty() {
                warning("No scored tasks in range.");
                return Ok(());
            }
            println!("{:<24} {}", "Employee", "Avg score");
            for r in rows {
                println!("{:<24} {:.2}", r.employee, r.avg_score);
            }
        }

        ReportKind::AttendanceSummary {
            from,
            to,
            dept,
            format,
            out,
        } => {
            let rows = analytics::attendance_summary(
                &pool.conn,
                required_date(from)?,
                required_date(to)?,
                *dept,
            )?;
            if let Some(path) = out {
                return write_table(format, path, "Attendance summary", &rows);
            }
            if rows.is_empty() {
                warning("No attendance records in range.");
                return Ok(());
            }
            println!("{:<12} {:>6}  {}", "Date", "Emp", "Status");
            for r in rows {
                println!(
                    "{:<12} {:>6}  {}",
                    r.date.format("%Y-%m-%d"),
                    r.employee_id,
                    r.status.as_deref().unwrap_or("Unknown")
                );
            }
        }

        ReportKind::DailyProductivity {
            employee,
            from,
            to,
            format,
            out,
        } => {
            let emp_id = resolve_employee_filter(&pool.conn, employee.as_ref())?;
            let rows = analytics::daily_average_productivity(
                &pool.conn,
                emp_id,
                parse_optional_date(from.as_ref())?,
                parse_optional_date(to.as_ref())?,
            )?;
            if let Some(path) = out {
                return write_table(format, path, "Daily productivity", &rows);
            }
            if rows.is_empty() {
                warning("No scored tasks in range.");
                return Ok(());
            }
            println!("{:<12} {}", "Day", "Avg score");
            for r in rows {
                println!("{:<12} {:.2}", r.day.format("%Y-%m-%d"), r.avg_productivity);
            }
        }
    }

    Ok(())
}
