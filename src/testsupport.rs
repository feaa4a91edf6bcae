//! Shared test fixtures for theme, injector, and config test modules.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::theme::Theme;

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!(
            "huesync-{prefix}-{millis}-{}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Render a theme file: `;<description>` then a `[colors]` section.
pub fn theme_text(description: &str, colors: &[(&str, &str)]) -> String {
    let mut out = format!(";{description}\n[colors]\n");
    for (role, value) in colors {
        out.push_str(&format!("{role} = {value}\n"));
    }
    out
}

/// Every role the bundled presets and palette reference.
pub const SAMPLE_COLORS: &[(&str, &str)] = &[
    ("crust", "#0a0a0a"),
    ("base", "#1e1e2e"),
    ("surface", "#2a2a2a"),
    ("overlay", "#3b3b3b"),
    ("subtle", "#4c4c4c"),
    ("muted", "#5d5d5d"),
    ("text", "#eeeeee"),
    ("purple", "#aa00ff"),
    ("blue", "#0000ff"),
    ("green", "#00ff00"),
    ("yellow", "#ffff00"),
    ("orange", "#ff8800"),
    ("accent", "#ff0000"),
    ("red", "#cc0000"),
];

pub fn sample_theme() -> Theme {
    let colors: BTreeMap<String, String> = SAMPLE_COLORS
        .iter()
        .map(|(role, value)| (role.to_string(), value.to_string()))
        .collect();
    Theme::from_colors("/themes/sample.ini", "Sample", colors)
}

/// `line 1\nline 2\n...line N` with no trailing newline.
pub fn numbered_lines(count: usize) -> String {
    (1..=count)
        .map(|n| format!("line {n}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
    }

    #[test]
    fn theme_text_parses_back() {
        let text = theme_text("Demo", &[("base", "#000000")]);
        let theme = Theme::parse(Path::new("demo.ini"), &text).expect("parse");
        assert_eq!(theme.description(), "Demo");
        assert_eq!(theme.color("base"), Some("#000000"));
    }

    #[test]
    fn numbered_lines_has_no_trailing_newline() {
        assert_eq!(numbered_lines(3), "line 1\nline 2\nline 3");
    }
}
