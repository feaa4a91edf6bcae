//! Theme injectors.
//!
//! An [`Injector`] binds one target file to a rewrite [`Strategy`]. Every
//! strategy goes through the same contract: load the target (or its pristine
//! backup), compute the rewritten lines from the active [`Theme`], and write
//! the result back over the target.

use std::path::{Path, PathBuf};

use crate::error::InjectError;
use crate::theme::Theme;

mod lines;
mod literal;
pub mod presets;
mod sections;

pub use lines::{replace_line, LineAddress, LineRule, PLACEHOLDER};
pub use literal::{backup_path, PaletteEntry, ReferencePalette, BACKUP_SUFFIX};
pub use sections::SectionRule;

/// Value token that resolves to the selected theme file's path.
pub const THEME_PATH_TOKEN: &str = "@theme-path";

/// Where a rule's replacement text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// A color role looked up in the active theme.
    Role(String),
    /// The active theme's file path.
    ThemePath,
    /// Fixed text, used verbatim.
    Literal(String),
}

impl ValueSource {
    /// Parse the string form used in config and declaration files:
    /// `@theme-path`, a `#`-prefixed literal, or a role name.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed == THEME_PATH_TOKEN {
            Self::ThemePath
        } else if trimmed.starts_with('#') {
            Self::Literal(trimmed.to_string())
        } else {
            Self::Role(trimmed.to_lowercase())
        }
    }

    pub fn role(role: &str) -> Self {
        Self::Role(role.to_string())
    }

    pub fn resolve(&self, theme: &Theme, case: ColorCase) -> Result<String, InjectError> {
        match self {
            Self::Role(role) => Ok(case.apply(theme.require(role)?)),
            Self::ThemePath => Ok(theme.path().display().to_string()),
            Self::Literal(text) => Ok(text.clone()),
        }
    }
}

/// Case forced onto role-derived colors before they are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorCase {
    #[default]
    Keep,
    Upper,
    Lower,
}

impl ColorCase {
    pub fn apply(self, value: &str) -> String {
        match self {
            Self::Keep => value.to_string(),
            Self::Upper => value.to_uppercase(),
            Self::Lower => value.to_lowercase(),
        }
    }
}

/// Rewrite strategy selected when the injector is built.
#[derive(Debug, Clone)]
pub enum Strategy {
    /// Overwrite addressed lines with filled-in templates.
    Lines(Vec<LineRule>),
    /// Set keys inside named sections of a section/key document.
    Sections(Vec<SectionRule>),
    /// Swap known literal colors, always starting from the pristine backup.
    Literal(ReferencePalette),
}

impl Strategy {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Lines(_) => "lines",
            Self::Sections(_) => "sections",
            Self::Literal(_) => "literal",
        }
    }
}

/// What applying one injector did to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// New content was written.
    Written,
    /// Computed content matched the target; nothing was written.
    Unchanged,
    /// Dry run: the target would have been rewritten.
    WouldWrite,
}

#[derive(Debug, Clone)]
pub struct Injector {
    name: String,
    target: PathBuf,
    case: ColorCase,
    strategy: Strategy,
}

impl Injector {
    pub fn new(name: impl Into<String>, target: impl Into<PathBuf>, strategy: Strategy) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            case: ColorCase::Keep,
            strategy,
        }
    }

    /// Single-rule line replacement.
    pub fn replace_line(
        name: impl Into<String>,
        target: impl Into<PathBuf>,
        template: &str,
        line: usize,
        value: ValueSource,
    ) -> Self {
        Self::new(
            name,
            target,
            Strategy::Lines(vec![LineRule::at(template, line, value)]),
        )
    }

    pub fn with_case(mut self, case: ColorCase) -> Self {
        self.case = case;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Read the content this injector rewrites from.
    ///
    /// Literal injectors read the `.themebak` sibling, creating it from the
    /// target on first use (except during a dry run).
    pub fn load(&self, dry_run: bool) -> Result<TargetFile, InjectError> {
        match &self.strategy {
            Strategy::Literal(_) => literal::load_pristine(&self.target, dry_run),
            Strategy::Lines(_) | Strategy::Sections(_) => TargetFile::load(&self.target),
        }
    }

    /// Compute rewritten lines for `file` without touching the disk.
    pub fn inject(&self, file: &TargetFile, theme: &Theme) -> Result<Vec<String>, InjectError> {
        match &self.strategy {
            Strategy::Lines(rules) => lines::inject(file.lines(), rules, theme, self.case),
            Strategy::Sections(rules) => sections::inject(file, rules, theme, self.case),
            Strategy::Literal(palette) => literal::inject(file, palette, theme),
        }
    }

    /// Load, inject, and save.
    pub fn apply(&self, theme: &Theme, dry_run: bool) -> Result<Outcome, InjectError> {
        let file = self.load(dry_run)?;
        let rewritten = file.with_lines(self.inject(&file, theme)?);

        let current = match &self.strategy {
            Strategy::Literal(_) => TargetFile::load(&self.target).ok(),
            Strategy::Lines(_) | Strategy::Sections(_) => Some(file),
        };
        if current.as_ref() == Some(&rewritten) {
            tracing::debug!(injector = %self.name, "target already up to date");
            return Ok(Outcome::Unchanged);
        }
        if dry_run {
            return Ok(Outcome::WouldWrite);
        }
        rewritten.save()?;
        tracing::info!(injector = %self.name, target = %self.target.display(), "target rewritten");
        Ok(Outcome::Written)
    }
}

/// A target file held as terminated lines (`readlines` style).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFile {
    path: PathBuf,
    lines: Vec<String>,
}

impl TargetFile {
    pub fn load(path: &Path) -> Result<Self, InjectError> {
        let text = std::fs::read_to_string(path).map_err(|e| InjectError::io(path, e))?;
        Ok(Self::from_text(path, &text))
    }

    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            path: path.into(),
            lines: text.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    fn with_lines(&self, lines: Vec<String>) -> Self {
        Self {
            path: self.path.clone(),
            lines,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text(&self) -> String {
        self.lines.concat()
    }

    /// Overwrite the file with the current lines.
    pub fn save(&self) -> Result<(), InjectError> {
        std::fs::write(&self.path, self.text()).map_err(|e| InjectError::io(&self.path, e))
    }
}
