use crate::cli::commands::{open_pool, require_employee, resolve_employee_filter};
use crate::cli::parser::{Cli, TaskAction};
use crate::config::Config;
use crate::core::{personnel, tasks};
use crate::errors::{AppError, AppResult};
use crate::models::task::TaskPatch;
use crate::models::task_status::TaskStatus;
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_optional_date;
use crate::utils::time::parse_optional_timestamp;

fn parse_status(s: &str) -> AppResult<TaskStatus> {
    TaskStatus::from_label(s).ok_or_else(|| AppError::InvalidStatus(s.to_string()))
}

pub fn handle(action: &TaskAction, cli: &Cli, cfg: &Config) -> AppResult<()> {
    let pool = open_pool(cfg)?;

    match action {
        TaskAction::Add {
            email,
            name,
            start,
            end,
            status,
            score,
        } => {
            let actor = personnel::resolve_actor(&pool.conn, cli.actor.as_deref())?;
            let emp = require_employee(&pool.conn, email)?;
            let status = match status.as_deref() {
                Some(s) => parse_status(s)?,
                None => TaskStatus::Pending,
            };
            let task = tasks::create_task(
                &pool.conn,
                &actor,
                emp.employee_id,
                name,
                parse_optional_timestamp(start.as_ref())?,
                parse_optional_timestamp(end.as_ref())?,
                status,
                *score,
            )?;
            success(format!(
                "Task '{}' assigned to {} (id {}).",
                task.task_name, emp.email, task.task_id
            ));
        }

        TaskAction::Update {
            id,
            name,
            start,
            end,
            status,
            score,
        } => {
            let patch = TaskPatch {
                task_name: name.clone(),
                start_time: parse_optional_timestamp(start.as_ref())?,
                end_time: parse_optional_timestamp(end.as_ref())?,
                status: status.as_deref().map(parse_status).transpose()?,
                productivity_score: *score,
            };
            if patch.is_empty() {
                warning("Nothing to update: no fields supplied.");
                return Ok(());
            }
            match tasks::update_task(&pool.conn, *id, &patch)? {
                Some(task) => success(format!("Task {} updated.", task.task_id)),
                None => warning(format!("No task found with id {}.", id)),
            }
        }

        TaskAction::List {
            employee,
            status,
            from,
            to,
        } => {
            let emp_id = resolve_employee_filter(&pool.conn, employee.as_ref())?;
            let status = status.as_deref().map(parse_status).transpose()?;
            let rows = tasks::list_tasks(
                &pool.conn,
                emp_id,
                status,
                parse_optional_date(from.as_ref())?,
                parse_optional_date(to.as_ref())?,
            )?;
            if rows.is_empty() {
                warning("No tasks found.");
                return Ok(());
            }
            println!(
                "{:>4}  {:>6}  {:<28} {:<17} {:<17} {:<12} {}",
                "ID", "Emp", "Task", "Start", "End", "Status", "Score"
            );
            for t in rows {
                println!(
                    "{:>4}  {:>6}  {:<28} {:<17} {:<17} {:<12} {}",
                    t.task_id,
                    t.employee_id,
                    t.task_name,
                    t.start_str(),
                    t.end_str(),
                    t.status.to_db_str(),
                    t.score_str()
                );
            }
        }

        TaskAction::Del { id } => {
            let actor = personnel::resolve_actor(&pool.conn, cli.actor.as_deref())?;
            if tasks::delete_task(&pool.conn, &actor, *id)? {
                success(format!("Deleted task {}.", id));
            } else {
                warning(format!("No task found with id {}.", id));
            }
        }
    }

    Ok(())
}
