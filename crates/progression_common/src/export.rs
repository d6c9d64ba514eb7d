//! Table exporters.
//!
//! Both exporters render the complete document in memory and then replace the
//! destination in one step (temp file + rename), so a failed run never leaves a
//! half-written table behind. The destination directory must already exist.

use crate::error::{ProgressionError, Result};
use crate::fishing::FishingRow;
use crate::xp_table::XpTable;
use serde::Serialize;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Header of the fishing CSV
pub const FISHING_CSV_HEADER: &str = "Level,Min Catch Time,Max Catch Time,XP";

const JSON_INDENT: &[u8] = b"    ";

/// Render the XP table as a level-keyed JSON object with 4-space indentation.
pub fn render_xp_json(table: &XpTable) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    table.serialize(&mut ser)?;

    String::from_utf8(buf)
        .map_err(|e| ProgressionError::TableFormat(format!("JSON output is not UTF-8: {}", e)))
}

/// Render fishing rows as comma-separated text, header first, no index column.
pub fn render_fishing_csv(rows: &[FishingRow]) -> String {
    let mut out = String::with_capacity(FISHING_CSV_HEADER.len() + rows.len() * 16);
    out.push_str(FISHING_CSV_HEADER);
    out.push('\n');

    for row in rows {
        out.push_str(&format!(
            "{},{},{},{}\n",
            row.level, row.min_catch_time, row.max_catch_time, row.xp
        ));
    }

    out
}

/// Export the XP table to `path` as JSON.
pub fn write_xp_json(table: &XpTable, path: &Path) -> Result<()> {
    let json = render_xp_json(table)?;
    write_atomic(path, json.as_bytes())?;
    info!("Wrote {} XP levels to {}", table.len(), path.display());
    Ok(())
}

/// Export the fishing table to `path` as CSV.
pub fn write_fishing_csv(rows: &[FishingRow], path: &Path) -> Result<()> {
    let csv = render_fishing_csv(rows);
    write_atomic(path, csv.as_bytes())?;
    info!("Wrote {} fishing rows to {}", rows.len(), path.display());
    Ok(())
}

/// Replace `path` with `contents` via a sibling temp file and rename.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let temp_path = temp_path_for(path);
    let write_err = |source| ProgressionError::Write {
        path: path.to_path_buf(),
        source,
    };

    {
        let mut file = File::create(&temp_path).map_err(write_err)?;
        if let Err(e) = file.write_all(contents).and_then(|_| file.sync_all()) {
            let _ = fs::remove_file(&temp_path);
            return Err(write_err(e));
        }
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(write_err(e));
    }

    debug!("Atomically replaced {}", path.display());
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("table"));
    name.push(".tmp");
    path.with_file_name(name)
}
