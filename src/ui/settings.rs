//! Centralized UI settings for the terminal interface.
//!
//! This is the single place to tweak glyphs, labels, colors, and indentation.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout / indentation
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "  ";
/// Width of a rendered color swatch, in cells.
pub const SWATCH_WIDTH: usize = 6;

// ---------------------------------------------------------------------------
// Labels / glyphs
// ---------------------------------------------------------------------------

pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";

pub const GLYPH_SECTION_BULLET: &str = "•";
pub const GLYPH_PICKER_SELECTED: &str = "▶";
pub const GLYPH_PICKER_UNSELECTED: &str = "·";
pub const GLYPH_PICKER_SELECTED_PLAIN: &str = ">";
pub const GLYPH_PICKER_UNSELECTED_PLAIN: &str = " ";

pub const PICKER_TITLE: &str = "Select a theme";
pub const PICKER_HELP: &str = "↑/↓ to move, Enter to apply, Esc to cancel";
pub const PICKER_NUMERIC_PROMPT: &str = "pick (Ctrl-D to cancel): ";

/// Event poll interval for the interactive picker.
pub const EVENT_POLL_MS: u64 = 80;

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_SECTION_BULLET: Color = Color::DarkGrey;
pub const COLOR_SECTION_TITLE: Color = Color::White;
pub const COLOR_ACTIVITY_TEXT: Color = Color::Grey;
pub const COLOR_FIELD_KEY: Color = Color::DarkGrey;
pub const COLOR_FIELD_VALUE: Color = Color::Grey;
pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;
pub const COLOR_PICKER_SELECTED: Color = Color::Cyan;
pub const COLOR_PICKER_UNSELECTED: Color = Color::DarkGrey;
pub const COLOR_PICKER_TEXT_SELECTED: Color = Color::White;
