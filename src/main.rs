//! CLI entry point for huesync.

mod app;
mod cli;

use app::commands::{self, Context, RunStatus};
use clap::Parser;
use huesync::config::{load_config_with_source, PickerMode};
use huesync::error::AppError;
use huesync::ui::{RenderSink, Renderer};
use tracing_subscriber::EnvFilter;

/// Log filter variable; overrides `-v` when set.
const LOG_ENV: &str = "HUESYNC_LOG";

fn main() {
    let args = cli::Args::parse();
    init_tracing(args.verbose);

    let status = match run(&args) {
        Ok(status) => status,
        Err((renderer, e)) => {
            renderer.error(&e.to_string());
            RunStatus::Failed
        }
    };
    if status == RunStatus::Failed {
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("huesync={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the selected command. Errors carry the renderer they should be
/// reported through, since color settings come from config.
fn run(args: &cli::Args) -> Result<RunStatus, (Renderer, AppError)> {
    // `init` must work before any config exists.
    if let Some(cli::Command::Init { force }) = &args.command {
        let renderer = Renderer::new(!args.no_color);
        return commands::init::run(&renderer, *force).map_err(|e| (renderer, e));
    }

    let loaded = match load_config_with_source(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => return Err((Renderer::new(!args.no_color), e.into())),
    };

    // Apply CLI overrides.
    let mut config = loaded.config;
    if let Some(dir) = &args.theme_dir {
        config.paths.theme_dir = dir.clone();
    }
    if args.numeric {
        config.picker.mode = PickerMode::Numeric;
    }
    if args.no_color {
        config.display.color = false;
    }

    let ctx = Context {
        renderer: Renderer::new(config.display.color),
        config,
        dry_run: args.dry_run,
        reload: !args.no_reload,
    };
    let result = match &args.command {
        None => commands::apply::run(&ctx, None),
        Some(cli::Command::Apply { selector }) => commands::apply::run(&ctx, Some(selector)),
        Some(cli::Command::List) => commands::theme::list(&ctx),
        Some(cli::Command::Show { selector }) => commands::theme::show(&ctx, selector),
        Some(cli::Command::Init { force }) => commands::init::run(&ctx.renderer, *force),
    };
    result.map_err(|e| (ctx.renderer, e))
}
