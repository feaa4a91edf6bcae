//! Theme selection: the interactive list picker, the numeric prompt, and
//! command-line selectors.
//!
//! In interactive mode the picker takes over the terminal in raw mode
//! (arrow keys wrap, Enter confirms, Esc / Ctrl-C cancel). When stdin or
//! stderr is not a terminal it falls back to the numeric prompt.

use std::io::{self, BufRead, IsTerminal, Write};
use std::time::Duration;

use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;

use crate::config::PickerMode;
use crate::error::PickError;
use crate::theme::ThemeEntry;

use super::settings;

/// Ask the user for a theme. `Ok(None)` means the user cancelled.
pub fn pick_theme(
    entries: &[ThemeEntry],
    mode: PickerMode,
    color: bool,
) -> Result<Option<usize>, PickError> {
    if entries.is_empty() {
        return Ok(None);
    }
    let labels: Vec<String> = entries.iter().map(|e| e.label().to_string()).collect();

    let tty = io::stdin().is_terminal() && io::stderr().is_terminal();
    match mode {
        PickerMode::Interactive if tty => Ok(pick_from_list_interactive(color, &labels, 0)?),
        PickerMode::Interactive => {
            tracing::debug!("stdin/stderr is not a terminal; using numeric picker");
            pick_numeric(&labels, &mut io::stdin().lock(), &mut io::stderr())
        }
        PickerMode::Numeric => pick_numeric(&labels, &mut io::stdin().lock(), &mut io::stderr()),
    }
}

/// Print a numbered list to `out` and read a 1-based index from `input`.
///
/// EOF (Ctrl-D) cancels. Any line read, including an empty one, must be a
/// valid index.
pub fn pick_numeric<R, W>(
    labels: &[String],
    input: &mut R,
    out: &mut W,
) -> Result<Option<usize>, PickError>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        out,
        "{} {}",
        settings::GLYPH_SECTION_BULLET,
        settings::PICKER_TITLE
    )?;
    for (idx, label) in labels.iter().enumerate() {
        writeln!(out, "{}{}. {label}", settings::INDENT_1, idx + 1)?;
    }
    write!(out, "{}{}", settings::INDENT_1, settings::PICKER_NUMERIC_PROMPT)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    parse_index(line.trim(), labels.len()).map(Some)
}

/// Parse a typed 1-based index into a 0-based one.
pub fn parse_index(input: &str, len: usize) -> Result<usize, PickError> {
    let index = input
        .parse::<usize>()
        .map_err(|_| PickError::NotANumber(input.to_string()))?;
    check_index(index, len)
}

/// Resolve a command-line selector: a 1-based index, or a description or
/// file stem matched case-insensitively.
pub fn resolve_selector(entries: &[ThemeEntry], selector: &str) -> Result<usize, PickError> {
    let trimmed = selector.trim();
    if let Ok(index) = trimmed.parse::<usize>() {
        return check_index(index, entries.len());
    }
    entries
        .iter()
        .position(|entry| {
            entry.description.eq_ignore_ascii_case(trimmed)
                || entry.stem().eq_ignore_ascii_case(trimmed)
        })
        .ok_or_else(|| PickError::UnknownTheme(trimmed.to_string()))
}

fn check_index(index: usize, len: usize) -> Result<usize, PickError> {
    if index == 0 || index > len {
        return Err(PickError::OutOfRange { index, len });
    }
    Ok(index - 1)
}

fn pick_from_list_interactive(
    color: bool,
    options: &[String],
    initial_selection: usize,
) -> io::Result<Option<usize>> {
    let _guard = RawModeGuard::acquire()?;
    let mut stderr = io::stderr();
    let mut selected = initial_selection.min(options.len().saturating_sub(1));
    let mut previous_rows = 0usize;
    let mut dirty = true;

    loop {
        if dirty {
            previous_rows = render_picker(&mut stderr, color, options, selected, previous_rows)?;
            dirty = false;
        }

        if !event::poll(Duration::from_millis(settings::EVENT_POLL_MS))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            // Resizes and other events still need a redraw.
            dirty = true;
            continue;
        };
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            continue;
        }

        match key.code {
            KeyCode::Up => {
                selected = previous_index(selected, options.len());
                dirty = true;
            }
            KeyCode::Down => {
                selected = next_index(selected, options.len());
                dirty = true;
            }
            KeyCode::Enter => {
                clear_picker_surface(&mut stderr, previous_rows)?;
                return Ok(Some(selected));
            }
            KeyCode::Esc => {
                clear_picker_surface(&mut stderr, previous_rows)?;
                return Ok(None);
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                clear_picker_surface(&mut stderr, previous_rows)?;
                return Ok(None);
            }
            _ => {}
        }
    }
}

fn previous_index(selected: usize, len: usize) -> usize {
    if selected == 0 {
        len.saturating_sub(1)
    } else {
        selected - 1
    }
}

fn next_index(selected: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (selected + 1) % len
    }
}

/// Draw picker chrome/options and return the last drawn row index.
fn render_picker(
    stderr: &mut io::Stderr,
    color: bool,
    options: &[String],
    selected: usize,
    previous_rows: usize,
) -> io::Result<usize> {
    if previous_rows > 0 {
        stderr.queue(MoveUp(previous_rows as u16))?;
    }
    stderr.queue(MoveToColumn(0))?;
    stderr.queue(Clear(ClearType::FromCursorDown))?;

    let cols = terminal_columns();
    let mut total_rows = 0usize;

    let title_plain = format!("{} {}", settings::GLYPH_SECTION_BULLET, settings::PICKER_TITLE);
    total_rows += wrapped_rows(&title_plain, cols);
    if color {
        stderr.queue(PrintStyledContent(
            settings::GLYPH_SECTION_BULLET.with(settings::COLOR_SECTION_BULLET),
        ))?;
        stderr.queue(Print(" "))?;
        stderr.queue(PrintStyledContent(
            settings::PICKER_TITLE
                .with(settings::COLOR_SECTION_TITLE)
                .bold(),
        ))?;
    } else {
        stderr.queue(Print(&title_plain))?;
    }

    let help_plain = format!("{}{}", settings::INDENT_1, settings::PICKER_HELP);
    stderr.queue(Print("\r\n"))?;
    total_rows += wrapped_rows(&help_plain, cols);
    if color {
        stderr.queue(PrintStyledContent(
            help_plain.as_str().with(settings::COLOR_FIELD_KEY),
        ))?;
    } else {
        stderr.queue(Print(&help_plain))?;
    }

    for (idx, option) in options.iter().enumerate() {
        let active = idx == selected;
        stderr.queue(Print("\r\n"))?;
        if color {
            let marker = if active {
                settings::GLYPH_PICKER_SELECTED
            } else {
                settings::GLYPH_PICKER_UNSELECTED
            };
            total_rows += wrapped_rows(&format!("  {marker} {option}"), cols);
            let (marker_color, text_color) = if active {
                (
                    settings::COLOR_PICKER_SELECTED,
                    settings::COLOR_PICKER_TEXT_SELECTED,
                )
            } else {
                (
                    settings::COLOR_PICKER_UNSELECTED,
                    settings::COLOR_FIELD_VALUE,
                )
            };
            stderr.queue(Print(settings::INDENT_1))?;
            stderr.queue(PrintStyledContent(marker.with(marker_color)))?;
            stderr.queue(Print(" "))?;
            stderr.queue(PrintStyledContent(option.as_str().with(text_color)))?;
        } else {
            let marker = if active {
                settings::GLYPH_PICKER_SELECTED_PLAIN
            } else {
                settings::GLYPH_PICKER_UNSELECTED_PLAIN
            };
            let line_plain = format!("{}{marker} {option}", settings::INDENT_1);
            total_rows += wrapped_rows(&line_plain, cols);
            stderr.queue(Print(&line_plain))?;
        }
    }

    stderr.flush()?;
    Ok(total_rows.saturating_sub(1))
}

/// Clear rows previously painted by the picker.
fn clear_picker_surface(stderr: &mut io::Stderr, previous_cursor_row: usize) -> io::Result<()> {
    if previous_cursor_row > 0 {
        stderr.queue(MoveUp(previous_cursor_row as u16))?;
    }
    stderr.queue(MoveToColumn(0))?;
    stderr.queue(Clear(ClearType::FromCursorDown))?;
    stderr.flush()?;
    Ok(())
}

fn terminal_columns() -> usize {
    terminal::size()
        .ok()
        .map(|(cols, _)| cols as usize)
        .filter(|cols| *cols > 0)
        .unwrap_or(80)
}

/// Rows a single line of text occupies once the terminal wraps it.
fn wrapped_rows(text: &str, cols: usize) -> usize {
    let width = text.chars().count().max(1);
    if cols == 0 {
        return 1;
    }
    width.div_ceil(cols)
}

/// Raw-mode guard; restores cooked mode on drop, including on early return.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
