//! Theme directory scanning.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ThemeError;

use super::description_from_first_line;

/// A theme file found on disk, before its colors are parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeEntry {
    pub path: PathBuf,
    pub description: String,
}

impl ThemeEntry {
    /// Picker label: the description, or the file stem when the first line
    /// carries nothing after its marker.
    pub fn label(&self) -> &str {
        if self.description.is_empty() {
            self.stem()
        } else {
            &self.description
        }
    }

    pub fn stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
    }
}

/// List every file under `dir` (recursively, sorted by path) as a theme.
///
/// Fails when the directory is missing or yields no readable theme.
pub fn discover_themes(dir: &Path) -> Result<Vec<ThemeEntry>, ThemeError> {
    if !dir.is_dir() {
        return Err(ThemeError::DirectoryMissing(dir.to_path_buf()));
    }

    let mut themes = Vec::new();
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(dir = %dir.display(), error = %err, "skipping unreadable theme path");
                None
            }
        })
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        match read_first_line(path) {
            Ok(line) => themes.push(ThemeEntry {
                path: path.to_path_buf(),
                description: description_from_first_line(&line),
            }),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping unreadable theme file");
            }
        }
    }

    if themes.is_empty() {
        return Err(ThemeError::NoThemes(dir.to_path_buf()));
    }
    tracing::debug!(count = themes.len(), dir = %dir.display(), "discovered themes");
    Ok(themes)
}

fn read_first_line(path: &Path) -> std::io::Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line)
}
