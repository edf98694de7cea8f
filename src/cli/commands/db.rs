use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::stats;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        check,
        vacuum,
        info,
    } = cmd
    else {
        return Err(AppError::Other("invalid dispatch for db".into()));
    };

    let mut pool = open_pool(cfg)?;

    if *info {
        stats::print_db_info(&mut pool, &cfg.database)?;
    }

    if *check {
        if stats::integrity_check(&mut pool)? {
            success("Database integrity: ok");
        } else {
            warning("Database integrity check reported problems.");
        }
    }

    if *vacuum {
        stats::vacuum(&mut pool)?;
        success("Database optimized (VACUUM).");
    }

    Ok(())
}
