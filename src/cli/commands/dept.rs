use crate::cli::commands::open_pool;
use crate::cli::parser::{Cli, DeptAction};
use crate::config::Config;
use crate::core::personnel;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(action: &DeptAction, cli: &Cli, cfg: &Config) -> AppResult<()> {
    let pool = open_pool(cfg)?;
    let actor = personnel::resolve_actor(&pool.conn, cli.actor.as_deref())?;

    match action {
        DeptAction::Add { name, manager } => {
            let dept =
                personnel::create_department(&pool.conn, &actor, name, manager.as_deref())?;
            success(format!(
                "Department '{}' created (id {}).",
                dept.dept_name, dept.dept_id
            ));
        }

        DeptAction::List => {
            let depts = queries::list_departments(&pool.conn)?;
            if depts.is_empty() {
                warning("No departments found.");
                return Ok(());
            }
            println!("{:>4}  {:<24} {}", "ID", "Name", "Manager");
            for d in depts {
                println!(
                    "{:>4}  {:<24} {}",
                    d.dept_id,
                    d.dept_name,
                    d.manager_name.as_deref().unwrap_or("-")
                );
            }
        }

        DeptAction::Del { id } => {
            if personnel::delete_department(&pool.conn, &actor, *id)? {
                success(format!("Deleted department {}.", id));
            } else {
                warning(format!("No department found with id {}.", id));
            }
        }
    }

    Ok(())
}
