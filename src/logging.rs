use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_ENV: &str = "BUDGETDASH_LOG";
const LOG_FILE: &str = "budgetdash.log";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// The TUI owns the terminal, so events go to a file in the data directory.
pub(crate) fn init_for_tui() -> Result<()> {
    let (file, path) = open_log_file(&data_dir()?)?;

    fmt()
        .with_env_filter(env_filter("budgetdash=info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;
    info!(path = %path.display(), "logging to file");
    Ok(())
}

pub(crate) fn init_for_cli() -> Result<()> {
    fmt()
        .with_env_filter(env_filter("budgetdash=warn"))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))
}

/// Opens (or creates) the log file in `dir` for appending.
fn open_log_file(dir: &Path) -> Result<(File, PathBuf)> {
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;
    Ok((file, path))
}

fn data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "budgetdash", "budgetdash")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.to_path_buf())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
