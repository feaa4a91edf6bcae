//! `list` and `show` command handlers.

use std::io::{self, Write};

use huesync::error::AppError;
use huesync::theme::{discover_themes, Theme, ThemeEntry};
use huesync::ui::{resolve_selector, swatch, RenderSink};

use super::{Context, RunStatus};

/// Print every theme with its 1-based index to stdout.
pub(crate) fn list(ctx: &Context) -> Result<RunStatus, AppError> {
    let entries = discover_themes(&ctx.config.theme_dir())?;
    let mut stdout = io::stdout().lock();
    write_list(&mut stdout, &entries)?;
    Ok(RunStatus::Done)
}

/// Print one theme's colors with swatches.
pub(crate) fn show(ctx: &Context, selector: &str) -> Result<RunStatus, AppError> {
    let theme = load_selected(ctx, selector)?;
    let mut stdout = io::stdout().lock();
    swatch::write_theme_preview(&mut stdout, &theme, ctx.renderer.color())?;
    Ok(RunStatus::Done)
}

/// Resolve a command-line selector against the theme directory and load it.
pub(crate) fn load_selected(ctx: &Context, selector: &str) -> Result<Theme, AppError> {
    let entries = discover_themes(&ctx.config.theme_dir())?;
    let index = resolve_selector(&entries, selector)?;
    load_entry(ctx, &entries[index])
}

pub(crate) fn load_entry(ctx: &Context, entry: &ThemeEntry) -> Result<Theme, AppError> {
    let theme = Theme::load(&entry.path)?;
    ctx.renderer.activity(&format!("theme: {}", entry.label()));
    Ok(theme)
}

fn write_list<W: Write>(out: &mut W, entries: &[ThemeEntry]) -> io::Result<()> {
    let width = entries.len().to_string().len();
    for (idx, entry) in entries.iter().enumerate() {
        writeln!(out, "{:>width$}. {}", idx + 1, entry.label())?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn list_right_aligns_indices() {
        let entries: Vec<ThemeEntry> = (1..=10)
            .map(|n| ThemeEntry {
                path: PathBuf::from(format!("/t/{n}.ini")),
                description: format!("Theme {n}"),
            })
            .collect();
        let mut out = Vec::new();
        write_list(&mut out, &entries).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with(" 1. Theme 1\n"));
        assert!(text.ends_with("10. Theme 10\n"));
    }
}
