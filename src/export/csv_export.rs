use anyhow::{Context, Result};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::budget::ExportRow;

const EXPORT_HEADER: [&str; 3] = ["Category", "Amount", "Percentage"];

/// Write the header and one record per row. Decimals are written without
/// trailing zeros.
fn write_csv<W: io::Write>(writer: W, rows: &[ExportRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(EXPORT_HEADER)
        .context("Failed to write CSV header")?;
    for row in rows {
        let amount = row.amount.normalize().to_string();
        let percentage = row.percentage.normalize().to_string();
        wtr.write_record([row.category.as_str(), amount.as_str(), percentage.as_str()])
            .with_context(|| format!("Failed to write CSV row for {}", row.category))?;
    }
    wtr.flush().context("Failed to flush CSV output")?;
    Ok(())
}

pub(crate) fn to_csv_string(rows: &[ExportRow]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, rows)?;
    String::from_utf8(buf).context("CSV output is not valid UTF-8")
}

/// Write the rows to `path`, returning the number of rows written.
pub(crate) fn export_to_path(path: &Path, rows: &[ExportRow]) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    write_csv(file, rows)?;
    Ok(rows.len())
}

/// Where an export goes. An explicit path wins (`~/` is expanded, and a
/// directory gets `file_name` appended); otherwise the user's download
/// directory, then home, then the working directory.
pub(crate) fn resolve_export_path(requested: Option<&str>, file_name: &str) -> PathBuf {
    match requested.map(str::trim).filter(|p| !p.is_empty()) {
        Some(p) => {
            let path = expand_home(p);
            if path.is_dir() {
                path.join(file_name)
            } else {
                path
            }
        }
        None => default_export_dir().join(file_name),
    }
}

fn default_export_dir() -> PathBuf {
    directories::UserDirs::new()
        .map(|d| {
            d.download_dir()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| d.home_dir().to_path_buf())
        })
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        PathBuf::from(home).join(rest)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
#[path = "csv_export_tests.rs"]
mod tests;
