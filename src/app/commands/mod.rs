//! Command handlers, one module per concern.

pub(crate) mod apply;
pub(crate) mod init;
pub(crate) mod theme;

use huesync::config::Config;
use huesync::ui::Renderer;

/// How a command finished, mapped to the process exit status by `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunStatus {
    /// Work completed.
    Done,
    /// User backed out of the picker; nothing was applied.
    Cancelled,
    /// Errors were already reported; exit non-zero.
    Failed,
}

/// Resolved inputs shared by every command.
pub(crate) struct Context {
    pub(crate) config: Config,
    pub(crate) renderer: Renderer,
    pub(crate) dry_run: bool,
    pub(crate) reload: bool,
}
