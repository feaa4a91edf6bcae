//! Built-in injectors for the targets huesync knows out of the box.
//!
//! Line numbers follow the stock layouts of the rofi Catppuccin theme and
//! kitty's generated `current-theme.conf`.

use std::path::PathBuf;

use super::{ColorCase, Injector, LineRule, ReferencePalette, SectionRule, Strategy, ValueSource};

/// Name of the bundled reference palette.
pub const CATPPUCCIN_MOCHA: &str = "catppuccin-mocha";

/// Catppuccin Mocha literals keyed by the role they stand for.
pub const CATPPUCCIN_MOCHA_COLORS: &[(&str, &str)] = &[
    ("crust", "#11111b"),
    ("base", "#1e1e2e"),
    ("surface", "#313244"),
    ("overlay", "#6c7086"),
    ("subtle", "#9399b2"),
    ("muted", "#bac2de"),
    ("text", "#cdd6f4"),
    ("purple", "#cba6f7"),
    ("blue", "#89b4fa"),
    ("green", "#a6e3a1"),
    ("yellow", "#f9e2af"),
    ("orange", "#fab387"),
    ("accent", "#ff0000"),
    ("red", "#f38ba8"),
];

pub fn catppuccin_mocha() -> Result<ReferencePalette, regex::Error> {
    ReferencePalette::new(CATPPUCCIN_MOCHA, CATPPUCCIN_MOCHA_COLORS.iter().copied())
}

fn rule(template: &str, line: usize, role: &str) -> LineRule {
    LineRule::at(template, line, ValueSource::role(role))
}

/// Rofi launcher theme variables.
pub fn rofi(name: &str, target: impl Into<PathBuf>) -> Injector {
    Injector::new(
        name,
        target,
        Strategy::Lines(vec![
            rule("\tbg-col: <x>;", 2, "base"),
            rule("\tbg-col-light: <x>;", 4, "subtle"),
            rule("\tborder-col: <x>;", 5, "surface"),
            rule("\tselected-col: <x>;", 6, "accent"),
            rule("\tblue: <x>;", 7, "accent"),
            rule("\tfg-col: <x>;", 8, "muted"),
            rule("\tfg-col2: <x>;", 9, "text"),
        ]),
    )
}

/// Kitty terminal colors; kitty gets upper-case hex.
pub fn kitty(name: &str, target: impl Into<PathBuf>) -> Injector {
    Injector::new(
        name,
        target,
        Strategy::Lines(vec![
            rule("foreground <x>", 12, "text"),
            rule("background <x>", 13, "base"),
            rule("selection_foreground <x>", 14, "accent"),
            rule("selection_background <x>", 15, "base"),
            rule("cursor <x>", 18, "accent"),
            rule("cursor_text_color <x>", 19, "base"),
            rule("url_color <x>", 22, "accent"),
            rule("color0  <x>", 51, "red"),
            rule("color8  <x>", 52, "red"),
            rule("color1  <x>", 55, "red"),
            rule("color9  <x>", 56, "red"),
            rule("color2  <x>", 63, "orange"),
            rule("color10  <x>", 64, "orange"),
            rule("color3  <x>", 59, "yellow"),
            rule("color11  <x>", 60, "yellow"),
            rule("color4  <x>", 67, "green"),
            rule("color12  <x>", 68, "green"),
            rule("color5  <x>", 71, "blue"),
            rule("color13  <x>", 72, "blue"),
            rule("color6  <x>", 75, "purple"),
            rule("color14  <x>", 76, "purple"),
            rule("color7  <x>", 79, "accent"),
            rule("color15  <x>", 80, "accent"),
        ]),
    )
    .with_case(ColorCase::Upper)
}

/// KDE Plasma `kdeglobals` color groups.
pub fn kde_globals(name: &str, target: impl Into<PathBuf>) -> Injector {
    let surface = |section: &str, background: &str| {
        SectionRule::new(section)
            .role("BackgroundNormal", background)
            .role("ForegroundNormal", "text")
    };
    Injector::new(
        name,
        target,
        Strategy::Sections(vec![
            surface("Colors:Window", "base"),
            surface("Colors:Header", "crust"),
            surface("Colors:View", "crust"),
            surface("Colors:Button", "base"),
            SectionRule::new("Colors:Selection")
                .role("BackgroundNormal", "accent")
                .role("ForegroundNormal", "base"),
            surface("Colors:Tooltip", "surface"),
            SectionRule::new("General")
                .role("AccentColor", "accent")
                .role("LastUsedCustomAccentColor", "accent"),
            SectionRule::new("WM")
                .role("activeBackground", "crust")
                .role("activeForeground", "text")
                .role("inactiveBackground", "base")
                .role("inactiveForeground", "text"),
        ]),
    )
}

/// KWin rounded-corners outline colors in `kwinrc`.
pub fn kwin_outline(name: &str, target: impl Into<PathBuf>) -> Injector {
    Injector::new(
        name,
        target,
        Strategy::Sections(vec![SectionRule::new("PrimaryOutline")
            .role("OutlineColor", "accent")
            .role("InactiveOutlineColor", "accent")]),
    )
}
