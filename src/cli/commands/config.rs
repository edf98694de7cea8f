use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::Schedule;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        check,
    } = cmd
    else {
        return Err(AppError::Other("invalid dispatch for config".into()));
    };

    if *print_config {
        let yaml = serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigSave)?;
        println!("{}", yaml);
    }

    if *check {
        cfg.check()?;
        // The schedule is the part that must never be silently wrong.
        let schedule = Schedule::from_config(cfg)?;
        info(format!(
            "Schedule OK: workday starts {}, on-time cutoff {}",
            cfg.workday_start,
            schedule.cutoff().format("%H:%M:%S")
        ));
        success("Configuration is valid.");
    }

    Ok(())
}
