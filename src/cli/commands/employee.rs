use crate::cli::commands::open_pool;
use crate::cli::parser::{Cli, EmployeeAction};
use crate::config::Config;
use crate::core::personnel;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::employee::EmployeePatch;
use crate::models::role::Role;
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_optional_date;

fn parse_role(s: &str) -> AppResult<Role> {
    Role::from_db_str(&s.to_lowercase()).ok_or_else(|| AppError::InvalidRole(s.to_string()))
}

pub fn handle(action: &EmployeeAction, cli: &Cli, cfg: &Config) -> AppResult<()> {
    let pool = open_pool(cfg)?;
    let actor = personnel::resolve_actor(&pool.conn, cli.actor.as_deref())?;

    match action {
        EmployeeAction::Add {
            name,
            email,
            role,
            dept,
            join_date,
            password,
        } => {
            let emp = personnel::create_employee(
                &pool.conn,
                &actor,
                name,
                email,
                parse_role(role)?,
                *dept,
                parse_optional_date(join_date.as_ref())?,
                password.as_deref(),
            )?;
            success(format!(
                "Employee '{}' <{}> created (id {}).",
                emp.name, emp.email, emp.employee_id
            ));
        }

        EmployeeAction::List { dept } => {
            let emps = queries::list_employees(&pool.conn, *dept)?;
            if emps.is_empty() {
                warning("No employees found.");
                return Ok(());
            }
            println!(
                "{:>4}  {:<24} {:<28} {:<8} {:>4}  {}",
                "ID", "Name", "Email", "Role", "Dept", "Joined"
            );
            for e in emps {
                println!(
                    "{:>4}  {:<24} {:<28} {:<8} {:>4}  {}",
                    e.employee_id,
                    e.name,
                    e.email,
                    e.role.to_db_str(),
                    e.department_id
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    e.join_date_str()
                );
            }
        }

        EmployeeAction::Update {
            id,
            name,
            email,
            role,
            dept,
            clear_dept,
            join_date,
            password,
        } => {
            let department_id = if *clear_dept {
                Some(None)
            } else {
                dept.map(Some)
            };
            let patch = EmployeePatch {
                name: name.clone(),
                email: email.clone(),
                role: role.as_deref().map(parse_role).transpose()?,
                department_id,
                join_date: parse_optional_date(join_date.as_ref())?,
                password_hash: None, // set by the service from the raw password
            };

            match personnel::update_employee(&pool.conn, &actor, *id, patch, password.as_deref())?
            {
                Some(emp) => success(format!("Employee {} updated.", emp.employee_id)),
                None => warning(format!("No employee found with id {}.", id)),
            }
        }

        EmployeeAction::Del { id } => {
            if personnel::delete_employee(&pool.conn, &actor, *id)? {
                success(format!(
                    "Deleted employee {} (attendance and tasks included).",
                    id
                ));
            } else {
                warning(format!("No employee found with id {}.", id));
            }
        }
    }

    Ok(())
}
