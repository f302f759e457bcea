//! Play log
//!
//! Plain-text log of played maps, one per line:
//!
//! ```text
//! #12 (2024-05-01 19:30 Z) Harbor TD
//! ```
//!
//! Only the map id matters when reading: it is the first run of digits on
//! the line, so hand-written lines such as `12 harbor` are accepted too.

use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::config::defaults::LOG_TIMESTAMP_FORMAT;
use crate::core::catalog::{Map, MapCatalog};
use crate::error::PlayLogError;
use crate::infra::filesystem::create_dir_all;

fn map_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+").expect("Invalid map id pattern"))
}

fn io_error(path: &Path, e: &std::io::Error) -> PlayLogError {
    PlayLogError::Io {
        path: path.to_path_buf(),
        error: e.to_string(),
    }
}

/// Format one log line (without the trailing newline)
#[must_use]
pub fn format_entry(map: &Map, at: DateTime<Utc>) -> String {
    format!(
        "#{} ({}) {} {}",
        map.id,
        at.format(LOG_TIMESTAMP_FORMAT),
        map.nickname,
        map.mode
    )
}

/// Append a play stamped with the current time
pub fn append(path: &Path, map: &Map) -> Result<(), PlayLogError> {
    append_at(path, map, Utc::now())
}

/// Append a play stamped with `at`
///
/// Creates the file if needed and starts a fresh line if the file doesn't
/// end with one.
pub fn append_at(path: &Path, map: &Map, at: DateTime<Utc>) -> Result<(), PlayLogError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent).map_err(|e| PlayLogError::Io {
            path: parent.to_path_buf(),
            error: e.to_string(),
        })?;
    }

    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| io_error(path, &e))?;

    let len = file.seek(SeekFrom::End(0)).map_err(|e| io_error(path, &e))?;
    if len > 0 {
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))
            .and_then(|_| file.read_exact(&mut last))
            .map_err(|e| io_error(path, &e))?;

        if last[0] != b'\n' {
            file.write_all(b"\n").map_err(|e| io_error(path, &e))?;
        }
    }

    writeln!(file, "{}", format_entry(map, at)).map_err(|e| io_error(path, &e))?;
    tracing::debug!("Appended {} to {}", map.info(), path.display());

    Ok(())
}

/// Parse log contents into played maps, oldest first
pub fn parse<'a>(content: &str, catalog: &'a MapCatalog) -> Result<Vec<&'a Map>, PlayLogError> {
    let mut history = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let digits = map_id_pattern()
            .find(line)
            .ok_or_else(|| PlayLogError::MissingMapId {
                line: line_num,
                text: line.to_string(),
            })?;

        let id = digits
            .as_str()
            .parse::<u16>()
            .map_err(|_| PlayLogError::InvalidMapId {
                line: line_num,
                text: line.to_string(),
            })?;

        let map = catalog
            .map(id)
            .ok_or(PlayLogError::UnknownMap { line: line_num, id })?;
        history.push(map);
    }

    Ok(history)
}

/// Load the log at `path`; a missing file is an empty history
pub fn load<'a>(path: &Path, catalog: &'a MapCatalog) -> Result<Vec<&'a Map>, PlayLogError> {
    if !path.exists() {
        tracing::info!("No play log at {}, starting fresh", path.display());
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path).map_err(|e| io_error(path, &e))?;
    let history = parse(&content, catalog)?;
    tracing::info!("Loaded play log with {} entries", history.len());
    Ok(history)
}
