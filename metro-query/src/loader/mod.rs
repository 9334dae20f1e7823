//! Line data files.
//!
//! One UTF-8 text file per line, named after the line: a section of
//! `station minutes` rows (cumulative offset from the route start), a
//! blank line, then a section of `station km` rows (distance to the next
//! station). Station names may contain spaces, so rows split at the last
//! space; a distance row whose last field is not a number is a bare
//! station name standing for 0 km. Anything after a second blank line is
//! ignored.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::LineRecords;

/// Error from loading a data directory.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The directory itself could not be read.
    #[error("failed to read data directory {dir:?}: {source}")]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No file in the directory yielded a usable line.
    #[error("no usable line data in {dir:?}")]
    NoData { dir: PathBuf },
}

/// Loads every `*.txt` file in `dir`, in file name order.
///
/// Unreadable or malformed files are skipped with a warning; loading only
/// fails when the directory cannot be read or nothing usable remains.
pub fn load_dir(dir: &Path) -> Result<Vec<LineRecords>, LoadError> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::ReadDir {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();

    let mut records = Vec::with_capacity(paths.len());
    for path in &paths {
        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            warn!(path = %path.display(), "skipping file with an unusable name");
            continue;
        };
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping unreadable file");
                continue;
            }
        };
        match parse_line_records(name, &content) {
            Ok(line) => records.push(line),
            Err(reason) => warn!(path = %path.display(), reason, "skipping malformed file"),
        }
    }

    if records.is_empty() {
        return Err(LoadError::NoData {
            dir: dir.to_path_buf(),
        });
    }

    debug!(lines = records.len(), dir = %dir.display(), "loaded line data");
    Ok(records)
}

/// Parses one file's contents into the records for line `name`.
fn parse_line_records(name: &str, content: &str) -> Result<LineRecords, &'static str> {
    let mut rows = content.lines().map(str::trim_end);

    let mut times = Vec::new();
    for row in rows.by_ref() {
        if row.is_empty() {
            break;
        }
        let Some((station, minutes)) = row.rsplit_once(' ') else {
            return Err("time row without a minutes field");
        };
        let Ok(minutes) = minutes.parse::<u32>() else {
            return Err("time row with an unparseable minutes field");
        };
        times.push((station.trim_end().to_string(), minutes));
    }
    if times.is_empty() {
        return Err("no time rows");
    }

    let mut distances = Vec::new();
    for row in rows.by_ref() {
        if row.is_empty() {
            break;
        }
        let parsed = row.rsplit_once(' ').and_then(|(station, km)| {
            km.parse::<f64>()
                .ok()
                .map(|km| (station.trim_end().to_string(), km))
        });
        match parsed {
            Some(pair) => distances.push(pair),
            None => distances.push((row.to_string(), 0.0)),
        }
    }

    Ok(LineRecords {
        name: name.to_string(),
        times,
        distances,
    })
}
