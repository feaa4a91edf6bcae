//! JSON injector declarations from the updaters directory.
//!
//! Each `*.json` file is either a line-replace declaration
//! (`{"path": ..., "updaters": [{"line", "line_number", "replaceWith"}]}`)
//! or a pointer to another declaration (`{"refer": "other.json"}`), resolved
//! relative to the referring file.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::inject::{Injector, LineRule, Strategy, ValueSource, PLACEHOLDER};

use super::paths::expand_path;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Declaration {
    Refer {
        refer: String,
    },
    Updaters {
        path: String,
        #[serde(default)]
        updaters: Vec<UpdaterSpec>,
    },
}

#[derive(Debug, Deserialize)]
struct UpdaterSpec {
    line: String,
    line_number: usize,
    #[serde(rename = "replaceWith")]
    replace_with: String,
}

/// Load every declaration in `dir`, sorted by file name.
///
/// A missing directory yields no injectors.
pub(super) fn load_declared_injectors(
    dir: &Path,
    base_dir: &Path,
) -> Result<Vec<Injector>, ConfigError> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "no injector declarations directory");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();

    files
        .iter()
        .map(|file| load_declaration(file, base_dir))
        .collect()
}

fn load_declaration(file: &Path, base_dir: &Path) -> Result<Injector, ConfigError> {
    let name = file
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());

    let mut visited = HashSet::new();
    let mut current = file.to_path_buf();
    loop {
        let key = std::fs::canonicalize(&current).unwrap_or_else(|_| current.clone());
        if !visited.insert(key) {
            return Err(ConfigError::Invalid(format!(
                "declaration `{}`: refer cycle through `{}`",
                file.display(),
                current.display()
            )));
        }
        match read_declaration(&current)? {
            Declaration::Refer { refer } => {
                let parent = current.parent().unwrap_or(Path::new("."));
                current = parent.join(refer.trim());
                tracing::debug!(from = %file.display(), to = %current.display(), "following refer");
            }
            Declaration::Updaters { path, updaters } => {
                let rules = updaters
                    .iter()
                    .map(|updater| updater_rule(updater, &current))
                    .collect::<Result<Vec<_>, _>>()?;
                tracing::debug!(
                    declaration = %file.display(),
                    rules = rules.len(),
                    "loaded injector declaration"
                );
                return Ok(Injector::new(
                    name,
                    expand_path(&path, base_dir),
                    Strategy::Lines(rules),
                ));
            }
        }
    }
}

fn read_declaration(path: &Path) -> Result<Declaration, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::Invalid(format!("failed to read declaration `{}`: {e}", path.display()))
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn updater_rule(updater: &UpdaterSpec, file: &Path) -> Result<LineRule, ConfigError> {
    if updater.line_number == 0 {
        return Err(ConfigError::Invalid(format!(
            "declaration `{}`: line_number is 1-indexed",
            file.display()
        )));
    }
    if !updater.line.contains(PLACEHOLDER) {
        return Err(ConfigError::Invalid(format!(
            "declaration `{}`: line template `{}` has no `{PLACEHOLDER}` placeholder",
            file.display(),
            updater.line
        )));
    }
    Ok(LineRule::at(
        &updater.line,
        updater.line_number,
        ValueSource::parse(&updater.replace_with),
    ))
}
