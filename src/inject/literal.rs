//! Backup-based literal color substitution.
//!
//! Targets such as editor color themes embed a known palette as literal hex
//! strings. The first run copies the target to `<target>.themebak`; every run
//! after that rewrites from the backup so substitutions never compound.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use regex::{NoExpand, Regex, RegexBuilder};

use crate::error::InjectError;
use crate::theme::Theme;

use super::TargetFile;

/// Suffix appended to the target file name for the pristine copy.
pub const BACKUP_SUFFIX: &str = ".themebak";

/// One reference color: the role it stands for and the literal to look for.
#[derive(Debug, Clone)]
pub struct PaletteEntry {
    pub role: String,
    pub literal: String,
    pattern: Regex,
}

/// Ordered role → literal table the substitution searches for.
#[derive(Debug, Clone)]
pub struct ReferencePalette {
    name: String,
    entries: Vec<PaletteEntry>,
}

impl ReferencePalette {
    pub fn new<'a, I>(name: &str, entries: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut built = Vec::new();
        for (role, literal) in entries {
            let pattern = RegexBuilder::new(&regex::escape(literal.trim()))
                .case_insensitive(true)
                .build()?;
            built.push(PaletteEntry {
                role: role.trim().to_lowercase(),
                literal: literal.trim().to_string(),
                pattern,
            });
        }
        Ok(Self {
            name: name.to_string(),
            entries: built,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }
}

/// `<target>.themebak`
pub fn backup_path(target: &Path) -> PathBuf {
    let mut name = OsString::from(target.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Load the pristine content for `target`, creating the backup on first use.
pub(super) fn load_pristine(target: &Path, dry_run: bool) -> Result<TargetFile, InjectError> {
    let backup = backup_path(target);
    if !backup.exists() {
        if dry_run {
            return TargetFile::load(target);
        }
        std::fs::copy(target, &backup).map_err(|e| InjectError::io(target, e))?;
        tracing::info!(backup = %backup.display(), "created pristine backup");
    }
    let text = std::fs::read_to_string(&backup).map_err(|e| InjectError::io(&backup, e))?;
    Ok(TargetFile::from_text(target, &text))
}

pub(super) fn inject(
    file: &TargetFile,
    palette: &ReferencePalette,
    theme: &Theme,
) -> Result<Vec<String>, InjectError> {
    let mut text = file.text();
    for entry in &palette.entries {
        let replacement = theme.require(&entry.role)?.to_uppercase();
        text = entry
            .pattern
            .replace_all(&text, NoExpand(&replacement))
            .into_owned();
    }
    Ok(text.split_inclusive('\n').map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inject::{Injector, Outcome, Strategy};
    use crate::testsupport::{sample_theme, TestTempDir};
    use std::collections::BTreeMap;

    fn palette() -> ReferencePalette {
        ReferencePalette::new("ref", [("base", "#1E1E2E"), ("accent", "#89b4fa")])
            .expect("palette")
    }

    fn other_theme() -> Theme {
        let mut colors = BTreeMap::new();
        colors.insert("base".to_string(), "#000000".to_string());
        colors.insert("accent".to_string(), "#abcdef".to_string());
        Theme::from_colors("other.ini", "Other", colors)
    }

    #[test]
    fn backup_path_appends_suffix() {
        assert_eq!(
            backup_path(Path::new("/x/mocha.json")),
            PathBuf::from("/x/mocha.json.themebak")
        );
    }

    #[test]
    fn literals_match_case_insensitively_and_write_upper() {
        let file = TargetFile::from_text("t.json", "{\"bg\": \"#1e1e2e\", \"fg\": \"#89B4FA\"}\n");
        let out = inject(&file, &palette(), &sample_theme()).expect("inject");
        assert_eq!(out.concat(), "{\"bg\": \"#1E1E2E\", \"fg\": \"#FF0000\"}\n");
    }

    #[test]
    fn missing_role_is_fatal() {
        let palette = ReferencePalette::new("ref", [("lavender", "#b4befe")]).expect("palette");
        let file = TargetFile::from_text("t", "#b4befe\n");
        let err = inject(&file, &palette, &sample_theme()).expect_err("fail");
        assert!(matches!(err, InjectError::MissingColor(role) if role == "lavender"));
    }

    #[test]
    fn repeated_runs_reset_from_backup() {
        let tmp = TestTempDir::new("literal-idempotent");
        let original = "{\"bg\": \"#1e1e2e\", \"accent\": \"#89b4fa\"}\n";
        let target = tmp.write_text("mocha.json", original);
        let injector = Injector::new("vscode", &target, Strategy::Literal(palette()));

        injector.apply(&other_theme(), false).expect("first");
        let once = std::fs::read_to_string(&target).expect("read");
        assert_eq!(
            std::fs::read_to_string(backup_path(&target)).expect("backup"),
            original
        );

        assert_eq!(
            injector.apply(&other_theme(), false).expect("second"),
            Outcome::Unchanged
        );
        assert_eq!(std::fs::read_to_string(&target).expect("read"), once);

        // Switching themes still starts from the pristine copy.
        injector.apply(&sample_theme(), false).expect("third");
        assert_eq!(
            std::fs::read_to_string(&target).expect("read"),
            "{\"bg\": \"#1E1E2E\", \"accent\": \"#FF0000\"}\n"
        );
    }

    #[test]
    fn dry_run_does_not_create_backup() {
        let tmp = TestTempDir::new("literal-dry");
        let target = tmp.write_text("mocha.json", "#1e1e2e\n");
        let injector = Injector::new("vscode", &target, Strategy::Literal(palette()));
        let outcome = injector.apply(&other_theme(), true).expect("dry run");
        assert_eq!(outcome, Outcome::WouldWrite);
        assert!(!backup_path(&target).exists());
    }
}
