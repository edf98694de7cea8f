use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Log { print } = cmd else {
        return Err(AppError::Other("invalid dispatch for log".into()));
    };

    if !*print {
        info("Nothing to do: use --print to show the audit log.");
        return Ok(());
    }

    let mut pool = open_pool(cfg)?;
    let rows = load_log(&mut pool)?;

    if rows.is_empty() {
        info("Audit log is empty.");
        return Ok(());
    }

    for (date, operation, target, message) in rows {
        println!("{}  {:<20} {:<24} {}", date, operation, target, message);
    }
    Ok(())
}
