//! The apply flow: select a theme, run the injectors, then reload.

use huesync::apply::{apply_theme, render_report, ApplyOptions, ApplyReport};
use huesync::error::AppError;
use huesync::reload::{run_reload, ReloadStatus, SystemRunner};
use huesync::theme::discover_themes;
use huesync::ui::{pick_theme, resolve_selector, RenderSink};

use super::theme::load_entry;
use super::{Context, RunStatus};

/// Apply the theme named by `selector`, or ask for one when it is `None`.
pub(crate) fn run(ctx: &Context, selector: Option<&str>) -> Result<RunStatus, AppError> {
    let entries = discover_themes(&ctx.config.theme_dir())?;
    let index = match selector {
        Some(selector) => resolve_selector(&entries, selector)?,
        None => match pick_theme(&entries, ctx.config.picker.mode, ctx.renderer.color())? {
            Some(index) => index,
            None => {
                tracing::info!("theme selection cancelled");
                return Ok(RunStatus::Cancelled);
            }
        },
    };
    let theme = load_entry(ctx, &entries[index])?;

    // Config errors in injector definitions stop the run before any write.
    let injectors = ctx.config.build_injectors()?;
    let options = ApplyOptions {
        dry_run: ctx.dry_run,
        on_error: ctx.config.apply.on_error,
    };
    let report = apply_theme(&theme, &injectors, &options);
    render_report(&ctx.renderer, &report);

    if should_reload(ctx, &report) {
        reload(ctx);
    }

    if report.is_success() {
        Ok(RunStatus::Done)
    } else {
        Ok(RunStatus::Failed)
    }
}

fn should_reload(ctx: &Context, report: &ApplyReport) -> bool {
    !report.aborted && !ctx.dry_run && ctx.reload && ctx.config.apply.reload
}

fn reload(ctx: &Context) {
    let base_dir = ctx.config.base_dir();
    ctx.renderer
        .activity(&format!("reloading from {}", base_dir.display()));
    for entry in run_reload(&ctx.config.reload, &base_dir, &SystemRunner) {
        match entry.status {
            ReloadStatus::Succeeded | ReloadStatus::Detached => {}
            ReloadStatus::Failed(Some(code)) => ctx
                .renderer
                .warn(&format!("`{}` exited with status {code}", entry.command)),
            ReloadStatus::Failed(None) => ctx
                .renderer
                .warn(&format!("`{}` was terminated by a signal", entry.command)),
            ReloadStatus::SpawnFailed(err) => ctx
                .renderer
                .warn(&format!("`{}` could not be started: {err}", entry.command)),
        }
    }
}
