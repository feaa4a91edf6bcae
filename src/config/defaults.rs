//! Default configuration constants and the built-in injector list.
//!
//! The embedded template must describe exactly these defaults; a test in
//! `config::tests` keeps the two in sync.

use super::{InjectorSpec, LineRuleSpec, ReloadCommand};
use crate::inject::presets::CATPPUCCIN_MOCHA;
use crate::inject::{ColorCase, THEME_PATH_TOKEN};

/// Embedded default `huesync.toml` written by `huesync init`.
pub(super) const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../templates/huesync.toml");
/// Directory name under the config root.
pub(super) const APP_DIR_NAME: &str = "huesync";
/// Config file name, both local and global.
pub(super) const CONFIG_FILE_NAME: &str = "huesync.toml";

pub(super) const DEFAULT_BASE_DIR: &str = "~/.config/polybar";
pub(super) const DEFAULT_THEME_DIR: &str = "./themes";
pub(super) const DEFAULT_UPDATERS_DIR: &str = "~/.local/share/applications/theme_updaters";

fn theme_path_line(name: &str, path: &str, template: &str, line: usize) -> InjectorSpec {
    InjectorSpec::Lines {
        name: Some(name.to_string()),
        path: path.to_string(),
        case: ColorCase::Keep,
        rules: vec![LineRuleSpec {
            template: template.to_string(),
            line: Some(line),
            anchor: None,
            value: THEME_PATH_TOKEN.to_string(),
        }],
    }
}

/// Built-in injectors, in apply order.
pub(super) fn default_injectors() -> Vec<InjectorSpec> {
    vec![
        // Status bar: point the include lines at the selected theme file.
        theme_path_line("polybar-config", "./config.ini", "include-file=<x>", 1),
        theme_path_line("polywins", "./modules/polywins.sh", "ini_file=<x>", 4),
        theme_path_line(
            "now-playing",
            "./modules/polybar-now-playing",
            "theme = \"<x>\"",
            14,
        ),
        InjectorSpec::Rofi {
            name: Some("rofi".to_string()),
            path: "~/.local/share/rofi/themes/catppuccin-mocha.rasi".to_string(),
        },
        InjectorSpec::Kitty {
            name: Some("kitty".to_string()),
            path: "~/.config/kitty/current-theme.conf".to_string(),
        },
        InjectorSpec::Literal {
            name: Some("vscode".to_string()),
            path: "~/.vscode-oss/extensions/catppuccin.catppuccin-vsc-3.17.0-universal/themes/mocha.json"
                .to_string(),
            palette: CATPPUCCIN_MOCHA.to_string(),
        },
        InjectorSpec::KdeGlobals {
            name: Some("kdeglobals".to_string()),
            path: "~/.config/kdeglobals".to_string(),
        },
        InjectorSpec::KwinOutline {
            name: Some("kwin-outline".to_string()),
            path: "~/.config/kwinrc".to_string(),
        },
    ]
}

/// Built-in reload sequence: reconfigure KWin, then restart polybar.
pub(super) fn default_reload_commands() -> Vec<ReloadCommand> {
    vec![
        ReloadCommand::new("qdbus", &["org.kde.KWin", "/KWin", "reconfigure"], false),
        ReloadCommand::new("killall", &["polybar"], false),
        ReloadCommand::new("nohup", &["./launch.sh"], true),
    ]
}
