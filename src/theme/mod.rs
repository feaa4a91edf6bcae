//! Theme definitions and the on-disk theme store.
//!
//! A theme file is a section/key document whose first line doubles as its
//! human-readable description, e.g.:
//!
//! ```text
//! ;Catppuccin Mocha
//! [colors]
//! base = #1e1e2e
//! accent = #f5c2e7
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{InjectError, ThemeError};
use crate::ini::{IniDocument, KeyCase};

pub mod store;

pub use store::{discover_themes, ThemeEntry};

/// Section holding the color roles.
pub const COLORS_SECTION: &str = "colors";

/// One loaded theme. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    path: PathBuf,
    description: String,
    colors: BTreeMap<String, String>,
}

impl Theme {
    /// Read and parse a theme file.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let text = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &text)
    }

    /// Parse theme text already read from `path`.
    pub fn parse(path: &Path, text: &str) -> Result<Self, ThemeError> {
        let doc = IniDocument::parse(text, KeyCase::Lower).map_err(|source| ThemeError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let section = doc
            .section(COLORS_SECTION)
            .ok_or_else(|| ThemeError::MissingColors(path.to_path_buf()))?;
        let colors = section
            .entries()
            .map(|(role, value)| (role.to_string(), value.to_string()))
            .collect();
        let description = description_from_first_line(text.lines().next().unwrap_or_default());
        tracing::debug!(path = %path.display(), "loaded theme");
        Ok(Self {
            path: path.to_path_buf(),
            description,
            colors,
        })
    }

    /// Build a theme directly from a color table.
    pub fn from_colors(
        path: impl Into<PathBuf>,
        description: impl Into<String>,
        colors: BTreeMap<String, String>,
    ) -> Self {
        Self {
            path: path.into(),
            description: description.into(),
            colors,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn colors(&self) -> &BTreeMap<String, String> {
        &self.colors
    }

    pub fn color(&self, role: &str) -> Option<&str> {
        self.colors.get(role).map(String::as_str)
    }

    /// Resolve a role an injector cannot do without.
    pub fn require(&self, role: &str) -> Result<&str, InjectError> {
        self.color(role)
            .ok_or_else(|| InjectError::MissingColor(role.to_string()))
    }
}

/// Strip the leading marker character (`;`, `#`, ...) from a theme's first
/// line and trim what remains.
pub fn description_from_first_line(line: &str) -> String {
    let mut chars = line.trim().chars();
    chars.next();
    chars.as_str().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::theme_text;

    #[test]
    fn description_drops_marker_and_whitespace() {
        assert_eq!(description_from_first_line(";Nord"), "Nord");
        assert_eq!(description_from_first_line("  # Rose Pine Moon \n"), "Rose Pine Moon");
        assert_eq!(description_from_first_line(""), "");
    }

    #[test]
    fn parse_reads_description_and_lowercased_roles() {
        let text = ";Gruvbox\n[colors]\nBase = #282828\naccent = #D79921\n";
        let theme = Theme::parse(Path::new("gruvbox.ini"), text).expect("parse");
        assert_eq!(theme.description(), "Gruvbox");
        assert_eq!(theme.color("base"), Some("#282828"));
        assert_eq!(theme.color("accent"), Some("#D79921"));
    }

    #[test]
    fn parse_requires_colors_section() {
        let err = Theme::parse(Path::new("x.ini"), ";x\n[bar]\na=b\n").expect_err("must fail");
        assert!(matches!(err, ThemeError::MissingColors(_)));
    }

    #[test]
    fn require_reports_missing_role() {
        let theme = Theme::parse(Path::new("t"), &theme_text("T", &[("base", "#000000")]))
            .expect("parse");
        assert_eq!(theme.require("base").expect("base"), "#000000");
        let err = theme.require("crust").expect_err("missing");
        assert!(matches!(err, InjectError::MissingColor(role) if role == "crust"));
    }
}
