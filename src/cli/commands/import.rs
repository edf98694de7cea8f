use crate::cli::commands::open_pool;
use crate::cli::parser::{Cli, Commands, ImportTarget};
use crate::config::Config;
use crate::core::import::{import_attendance_csv, import_tasks_csv};
use crate::core::personnel;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs::File;

pub fn handle(cmd: &Commands, cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Import { target, file } = cmd else {
        return Err(AppError::Other("invalid dispatch for import".into()));
    };

    let mut pool = open_pool(cfg)?;
    let actor = personnel::resolve_actor(&pool.conn, cli.actor.as_deref())?;
    actor.require_admin()?;

    let reader = File::open(file)?;
    let report = match target {
        ImportTarget::Attendance => import_attendance_csv(&mut pool.conn, reader)?,
        ImportTarget::Tasks => import_tasks_csv(&mut pool.conn, reader)?,
    };

    success(format!(
        "Import finished: {} rows processed, {} errors.",
        report.processed,
        report.errors()
    ));
    for failure in &report.failures {
        warning(format!("  {}", failure));
    }
    Ok(())
}
