//! Path expansion for configured paths.
//!
//! `~/...` expands to the home directory, `./...` resolves against the base
//! directory, anything else is used as written.

use std::path::{Path, PathBuf};

/// Expand `raw` using the current user's home directory.
pub fn expand_path(raw: &str, base_dir: &Path) -> PathBuf {
    expand_path_with_home(raw, base_dir, dirs::home_dir().as_deref())
}

/// Expand only a leading `~/`; used for `base_dir` itself.
pub fn expand_home(raw: &str) -> PathBuf {
    expand_home_with(raw.trim(), dirs::home_dir().as_deref())
}

pub(crate) fn expand_path_with_home(raw: &str, base_dir: &Path, home: Option<&Path>) -> PathBuf {
    let trimmed = raw.trim();
    if trimmed == "." {
        return base_dir.to_path_buf();
    }
    if let Some(rest) = trimmed.strip_prefix("./") {
        return base_dir.join(rest);
    }
    expand_home_with(trimmed, home)
}

fn expand_home_with(trimmed: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(trimmed);
    };
    if trimmed == "~" {
        return home.to_path_buf();
    }
    match trimmed.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(trimmed),
    }
}
