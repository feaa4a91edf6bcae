//! Unified error types for theme loading, injection, and configuration.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// ParseError
// ---------------------------------------------------------------------------

/// Syntax error in a key/section document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-indexed line where parsing stopped.
    pub line: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    /// A JSON injector declaration failed to parse.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Json { path, source } => write!(f, "json: {}: {source}", path.display()),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// ThemeError
// ---------------------------------------------------------------------------

/// Errors from the theme store and theme file parsing.
#[derive(Debug)]
pub enum ThemeError {
    /// The configured theme directory does not exist.
    DirectoryMissing(PathBuf),
    /// The theme directory holds no theme files.
    NoThemes(PathBuf),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: ParseError,
    },
    /// Theme file parsed but has no `[colors]` section.
    MissingColors(PathBuf),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectoryMissing(path) => {
                write!(f, "theme directory not found: {}", path.display())
            }
            Self::NoThemes(path) => write!(f, "no themes found in {}", path.display()),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Parse { path, source } => write!(f, "{}: {source}", path.display()),
            Self::MissingColors(path) => {
                write!(f, "{}: missing [colors] section", path.display())
            }
        }
    }
}

impl std::error::Error for ThemeError {}

// ---------------------------------------------------------------------------
// InjectError
// ---------------------------------------------------------------------------

/// Errors raised while loading, rewriting, or saving one target file.
#[derive(Debug)]
pub enum InjectError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: ParseError,
    },
    /// The active theme does not define a color role the injector needs.
    MissingColor(String),
}

impl InjectError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for InjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Parse { path, source } => write!(f, "{}: {source}", path.display()),
            Self::MissingColor(role) => write!(f, "theme has no color `{role}`"),
        }
    }
}

impl std::error::Error for InjectError {}

// ---------------------------------------------------------------------------
// PickError
// ---------------------------------------------------------------------------

/// Errors from theme selection.
#[derive(Debug)]
pub enum PickError {
    NotANumber(String),
    OutOfRange { index: usize, len: usize },
    UnknownTheme(String),
    Io(std::io::Error),
}

impl fmt::Display for PickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(input) => write!(f, "invalid selection `{input}`: expected a number"),
            Self::OutOfRange { index, len } => {
                write!(f, "theme index out of range: {index}. Choose 1-{len}.")
            }
            Self::UnknownTheme(name) => write!(f, "unknown theme `{name}`"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for PickError {}

impl From<std::io::Error> for PickError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// AppError
// ---------------------------------------------------------------------------

/// Top-level error type for one `huesync` invocation.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Theme(ThemeError),
    Pick(PickError),
    /// Writing command output failed.
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Theme(e) => write!(f, "theme: {e}"),
            Self::Pick(e) => write!(f, "selection: {e}"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ThemeError> for AppError {
    fn from(e: ThemeError) -> Self {
        Self::Theme(e)
    }
}

impl From<PickError> for AppError {
    fn from(e: PickError) -> Self {
        Self::Pick(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
