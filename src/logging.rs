use std::fs::{self, OpenOptions};

use color_eyre::eyre::{Result, WrapErr};
use env_logger::{Builder, Env, Target};

use crate::config::LogConfig;

/// Route `log` records to a file; the terminal belongs to the UI.
///
/// `RUST_LOG` takes precedence over the configured level. Without a usable
/// log path logging stays disabled.
pub fn init(config: &LogConfig) -> Result<()> {
    let Some(path) = config.path() else {
        return Ok(());
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or(config.level.as_str()))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_secs()
        .try_init()
        .wrap_err("logger already initialised")?;

    log::info!("logging to {}", path.display());
    Ok(())
}
