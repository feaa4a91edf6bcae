//! `huesync show`: print a theme's roles with true-color swatches.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

use crate::theme::Theme;

use super::settings;

/// Parse `#RRGGBB` into a true-color value.
pub fn parse_hex(input: &str) -> Option<Color> {
    let hex = input.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb { r, g, b })
}

/// Write the theme header and one row per color role.
///
/// Without color, or for values that are not `#RRGGBB`, the swatch column is
/// left blank.
pub fn write_theme_preview<W: Write>(out: &mut W, theme: &Theme, color: bool) -> io::Result<()> {
    if color {
        writeln!(out, "{}", theme.description().bold())?;
    } else {
        writeln!(out, "{}", theme.description())?;
    }
    writeln!(out, "{}{}", settings::INDENT_1, theme.path().display())?;

    let width = theme
        .colors()
        .keys()
        .map(|role| role.chars().count())
        .max()
        .unwrap_or(0);
    let blank = " ".repeat(settings::SWATCH_WIDTH);
    for (role, value) in theme.colors() {
        write!(out, "{}{role:<width$} ", settings::INDENT_1)?;
        match parse_hex(value).filter(|_| color) {
            Some(swatch) => write!(out, "{}", blank.as_str().on(swatch))?,
            None => write!(out, "{blank}")?,
        }
        writeln!(out, " {value}")?;
    }
    Ok(())
}
