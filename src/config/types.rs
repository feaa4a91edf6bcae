//! Config data types: the runtime [`Config`] and its on-disk TOML shape.

use indexmap::IndexMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::inject::ColorCase;

use super::defaults::{
    default_injectors, default_reload_commands, DEFAULT_BASE_DIR, DEFAULT_THEME_DIR,
    DEFAULT_UPDATERS_DIR,
};

/// Fully resolved runtime configuration.
///
/// Paths are kept in their raw configured form (`~/`, `./` prefixes intact)
/// and expanded on use, so a CLI override of `base_dir` still affects every
/// relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub paths: PathsConfig,
    pub picker: PickerConfig,
    pub apply: ApplyConfig,
    pub display: DisplayConfig,
    /// User palettes; the bundled Catppuccin Mocha palette is always available.
    pub palettes: IndexMap<String, IndexMap<String, String>>,
    pub injectors: Vec<InjectorSpec>,
    pub reload: Vec<ReloadCommand>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            picker: PickerConfig::default(),
            apply: ApplyConfig::default(),
            display: DisplayConfig::default(),
            palettes: IndexMap::new(),
            injectors: default_injectors(),
            reload: default_reload_commands(),
        }
    }
}

/// Directory layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Anchor for every `./`-relative path.
    pub base_dir: String,
    /// Directory scanned for theme files.
    pub theme_dir: String,
    /// Directory of JSON injector declarations.
    pub updaters_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            base_dir: DEFAULT_BASE_DIR.to_string(),
            theme_dir: DEFAULT_THEME_DIR.to_string(),
            updaters_dir: DEFAULT_UPDATERS_DIR.to_string(),
        }
    }
}

/// How the theme is chosen when no selector is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickerMode {
    /// Arrow-key list in raw terminal mode.
    #[default]
    Interactive,
    /// Numbered list and a typed 1-based index.
    Numeric,
}

impl PickerMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "interactive" => Some(Self::Interactive),
            "numeric" => Some(Self::Numeric),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub mode: PickerMode,
}

/// What to do when one injector fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop at the first failure.
    #[default]
    Abort,
    /// Record the failure and keep going.
    Continue,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApplyConfig {
    pub on_error: ErrorPolicy,
    /// Run the reload commands after a successful apply.
    pub reload: bool,
}

impl Default for ApplyConfig {
    fn default() -> Self {
        Self {
            on_error: ErrorPolicy::Abort,
            reload: true,
        }
    }
}

/// Display / rendering preferences.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// One line rule as written in TOML. Exactly one of `line` / `anchor` is set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LineRuleSpec {
    pub template: String,
    #[serde(default)]
    pub line: Option<usize>,
    #[serde(default)]
    pub anchor: Option<String>,
    /// Role name, `@theme-path`, or a `#`-prefixed literal.
    pub value: String,
}

/// `[[injectors]]` entry, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum InjectorSpec {
    Lines {
        #[serde(default)]
        name: Option<String>,
        path: String,
        #[serde(default)]
        case: ColorCase,
        rules: Vec<LineRuleSpec>,
    },
    Sections {
        #[serde(default)]
        name: Option<String>,
        path: String,
        #[serde(default)]
        case: ColorCase,
        sections: IndexMap<String, IndexMap<String, String>>,
    },
    Literal {
        #[serde(default)]
        name: Option<String>,
        path: String,
        #[serde(default = "default_palette_name")]
        palette: String,
    },
    Rofi {
        #[serde(default)]
        name: Option<String>,
        path: String,
    },
    Kitty {
        #[serde(default)]
        name: Option<String>,
        path: String,
    },
    KdeGlobals {
        #[serde(default)]
        name: Option<String>,
        path: String,
    },
    KwinOutline {
        #[serde(default)]
        name: Option<String>,
        path: String,
    },
}

fn default_palette_name() -> String {
    crate::inject::presets::CATPPUCCIN_MOCHA.to_string()
}

impl InjectorSpec {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Lines { .. } => "lines",
            Self::Sections { .. } => "sections",
            Self::Literal { .. } => "literal",
            Self::Rofi { .. } => "rofi",
            Self::Kitty { .. } => "kitty",
            Self::KdeGlobals { .. } => "kde-globals",
            Self::KwinOutline { .. } => "kwin-outline",
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Lines { name, .. }
            | Self::Sections { name, .. }
            | Self::Literal { name, .. }
            | Self::Rofi { name, .. }
            | Self::Kitty { name, .. }
            | Self::KdeGlobals { name, .. }
            | Self::KwinOutline { name, .. } => name.as_deref(),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Lines { path, .. }
            | Self::Sections { path, .. }
            | Self::Literal { path, .. }
            | Self::Rofi { path, .. }
            | Self::Kitty { path, .. }
            | Self::KdeGlobals { path, .. }
            | Self::KwinOutline { path, .. } => path,
        }
    }
}

/// External command run after a successful apply.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReloadCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Spawn and move on instead of waiting for exit.
    #[serde(default)]
    pub detach: bool,
}

impl ReloadCommand {
    pub fn new(program: &str, args: &[&str], detach: bool) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            detach,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileConfig {
    pub(super) paths: PathsConfig,
    pub(super) picker: PickerConfig,
    pub(super) apply: ApplyConfig,
    pub(super) display: DisplayConfig,
    pub(super) palettes: IndexMap<String, IndexMap<String, String>>,
    /// `None` keeps the built-in list; `Some(vec![])` disables injectors.
    pub(super) injectors: Option<Vec<InjectorSpec>>,
    pub(super) reload: Option<Vec<ReloadCommand>>,
}

impl FileConfig {
    pub(super) fn into_config(self) -> Config {
        Config {
            paths: self.paths,
            picker: self.picker,
            apply: self.apply,
            display: self.display,
            palettes: self.palettes,
            injectors: self.injectors.unwrap_or_else(default_injectors),
            reload: self.reload.unwrap_or_else(default_reload_commands),
        }
    }
}

/// Where the active config text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config <path>`.
    Explicit(PathBuf),
    /// `./huesync.toml`.
    Local(PathBuf),
    /// `$XDG_CONFIG_HOME/huesync/huesync.toml`.
    Global(PathBuf),
    /// No file found.
    BuiltInDefaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Explicit(path) | Self::Local(path) | Self::Global(path) => Some(path),
            Self::BuiltInDefaults => None,
        }
    }
}

/// Configuration payload plus where it was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

/// Result of explicit global config initialization (`huesync init`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalConfigInitResult {
    Created {
        path: PathBuf,
    },
    AlreadyInitialized {
        path: PathBuf,
    },
    Overwritten {
        path: PathBuf,
        backup_path: PathBuf,
    },
}
