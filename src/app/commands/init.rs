//! `huesync init`: write the default global config.

use huesync::config::{initialize_default_global_config, GlobalConfigInitResult};
use huesync::error::AppError;
use huesync::ui::RenderSink;

use super::RunStatus;

pub(crate) fn run(renderer: &dyn RenderSink, force: bool) -> Result<RunStatus, AppError> {
    let result = initialize_default_global_config(force)?;
    render_init_result(renderer, &result);
    Ok(RunStatus::Done)
}

fn render_init_result(renderer: &dyn RenderSink, result: &GlobalConfigInitResult) {
    match result {
        GlobalConfigInitResult::Created { path } => {
            renderer.section(&format!("wrote default config to {}", path.display()));
        }
        GlobalConfigInitResult::AlreadyInitialized { path } => {
            renderer.warn(&format!(
                "{} already exists; pass --force to overwrite it",
                path.display()
            ));
        }
        GlobalConfigInitResult::Overwritten { path, backup_path } => {
            renderer.section(&format!("rewrote {}", path.display()));
            renderer.detail(&format!("previous config saved to {}", backup_path.display()));
        }
    }
}
