//! huesync: pick a color theme and inject it into desktop config files.
//!
//! A theme is an INI file whose first line is its description and whose
//! `[colors]` section maps role names to color values. Each configured
//! injector rewrites one target file (a polybar module, a rofi theme, a
//! kitty config, KDE globals, a VS Code theme) so it uses the selected
//! theme's colors.
//!
//! # Quick start
//!
//! ```no_run
//! use huesync::apply::{apply_theme, ApplyOptions};
//! use huesync::config::load_config;
//! use huesync::theme::{discover_themes, Theme};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config(None)?;
//! let themes = discover_themes(&config.theme_dir())?;
//! let theme = Theme::load(&themes[0].path)?;
//! let report = apply_theme(&theme, &config.build_injectors()?, &ApplyOptions::default());
//! assert!(report.is_success());
//! # Ok(())
//! # }
//! ```

pub mod apply;
pub mod config;
pub mod error;
pub mod ini;
pub mod inject;
pub mod reload;
#[cfg(test)]
pub mod testsupport;
pub mod theme;
pub mod ui;
