//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`HUESYNC_BASE_DIR`, `HUESYNC_THEME_DIR`,
//!    `HUESYNC_UPDATERS_DIR`, `HUESYNC_PICKER`, `NO_COLOR`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./huesync.toml in the current directory
//! 4. $XDG_CONFIG_HOME/huesync/huesync.toml (or ~/.config/huesync/huesync.toml)
//! 5. Built-in defaults (the same content as the `huesync init` template)

mod declared;
mod defaults;
mod env;
mod init;
mod loader;
mod paths;
mod resolve;
mod sources;
mod types;

pub use init::{config_root_dir, default_global_config_path, initialize_default_global_config};
pub use loader::{load_config, load_config_with_source};
pub use paths::{expand_home, expand_path};
pub use types::{
    ApplyConfig, Config, ConfigSource, DisplayConfig, ErrorPolicy, GlobalConfigInitResult,
    InjectorSpec, LineRuleSpec, LoadedConfig, PathsConfig, PickerConfig, PickerMode,
    ReloadCommand,
};

#[cfg(test)]
mod tests {
    use super::defaults::DEFAULT_CONFIG_TEMPLATE;
    use super::init::initialize_default_global_config_at_path;
    use super::loader::load_config_from_sources;
    use super::types::FileConfig;
    use super::*;
    use crate::error::ConfigError;
    use crate::inject::{ColorCase, LineAddress, Strategy, ValueSource};
    use crate::testsupport::TestTempDir;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    fn load_with(
        files: &[(&str, &str)],
        env: &[(&str, &str)],
        path_override: Option<&str>,
    ) -> Result<LoadedConfig, ConfigError> {
        let files: HashMap<PathBuf, String> = files
            .iter()
            .map(|(path, text)| (PathBuf::from(path), text.to_string()))
            .collect();
        let env: HashMap<String, String> = env
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        load_config_from_sources(
            path_override.map(Path::new),
            |path| {
                files.get(path).cloned().ok_or_else(|| {
                    std::io::Error::new(std::io::ErrorKind::NotFound, "missing fixture")
                })
            },
            |name| env.get(name).cloned(),
            || Some(PathBuf::from("/cfg")),
        )
    }

    fn config_from(text: &str) -> Config {
        let parsed: FileConfig = toml::from_str(text).expect("valid toml");
        parsed.into_config()
    }

    #[test]
    fn defaults_are_sensible() {
        let c = Config::default();
        assert_eq!(c.paths.base_dir, "~/.config/polybar");
        assert_eq!(c.paths.theme_dir, "./themes");
        assert_eq!(c.picker.mode, PickerMode::Interactive);
        assert_eq!(c.apply.on_error, ErrorPolicy::Abort);
        assert!(c.apply.reload);
        assert!(c.display.color);
        assert_eq!(c.injectors.len(), 8);
        assert_eq!(c.reload.len(), 3);
        assert!(c.reload[2].detach);
    }

    #[test]
    fn embedded_template_matches_builtin_defaults() {
        assert_eq!(config_from(DEFAULT_CONFIG_TEMPLATE), Config::default());
    }

    #[test]
    fn parse_partial_toml() {
        let c = config_from(
            r#"
            [paths]
            theme_dir = "/srv/themes"

            [apply]
            on_error = "continue"
            "#,
        );
        assert_eq!(c.paths.theme_dir, "/srv/themes");
        assert_eq!(c.paths.base_dir, "~/.config/polybar");
        assert_eq!(c.apply.on_error, ErrorPolicy::Continue);
        assert!(c.apply.reload);
        assert_eq!(c.injectors, Config::default().injectors);
    }

    #[test]
    fn empty_arrays_disable_injectors_and_reload() {
        let c = config_from("injectors = []\nreload = []\n");
        assert!(c.injectors.is_empty());
        assert!(c.reload.is_empty());
    }

    #[test]
    fn parses_every_injector_kind() {
        let c = config_from(
            r##"
            [[injectors]]
            kind = "lines"
            path = "./bar.ini"
            case = "upper"
            rules = [
                { template = "fg=<x>", line = 2, value = "Accent" },
                { template = "bg=<x>", anchor = "bg=", value = "#000000" },
            ]

            [[injectors]]
            kind = "sections"
            name = "dunst"
            path = "~/.config/dunst/dunstrc"
            [injectors.sections.urgency_low]
            background = "base"

            [[injectors]]
            kind = "literal"
            path = "/x/theme.json"

            [[injectors]]
            kind = "kde-globals"
            path = "~/.config/kdeglobals"
            "##,
        );
        assert_eq!(c.injectors.len(), 4);
        assert!(matches!(
            &c.injectors[0],
            InjectorSpec::Lines { case: ColorCase::Upper, rules, .. } if rules.len() == 2
        ));
        assert_eq!(c.injectors[1].name(), Some("dunst"));
        assert!(matches!(
            &c.injectors[2],
            InjectorSpec::Literal { palette, .. } if palette == "catppuccin-mocha"
        ));
        assert_eq!(c.injectors[3].kind(), "kde-globals");
    }

    #[test]
    fn unknown_injector_kind_is_rejected() {
        let err = toml::from_str::<FileConfig>("[[injectors]]\nkind = \"gtk\"\npath = \"x\"\n")
            .expect_err("unknown kind");
        assert!(err.to_string().contains("gtk"), "{err}");
    }

    #[test]
    fn explicit_path_beats_local_and_global() {
        let loaded = load_with(
            &[
                ("/tmp/custom.toml", "[picker]\nmode = \"numeric\"\n"),
                ("huesync.toml", "[display]\ncolor = false\n"),
            ],
            &[],
            Some("/tmp/custom.toml"),
        )
        .expect("load");
        assert_eq!(
            loaded.source,
            ConfigSource::Explicit(PathBuf::from("/tmp/custom.toml"))
        );
        assert_eq!(loaded.config.picker.mode, PickerMode::Numeric);
        assert!(loaded.config.display.color);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let err = load_with(&[("huesync.toml", "")], &[], Some("/nope.toml")).expect_err("fail");
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn local_file_beats_global() {
        let loaded = load_with(
            &[
                ("huesync.toml", "[paths]\ntheme_dir = \"local\"\n"),
                ("/cfg/huesync/huesync.toml", "[paths]\ntheme_dir = \"global\"\n"),
            ],
            &[],
            None,
        )
        .expect("load");
        assert_eq!(loaded.config.paths.theme_dir, "local");
        assert_eq!(loaded.source.path(), Some(Path::new("huesync.toml")));
    }

    #[test]
    fn global_file_used_when_no_local() {
        let loaded = load_with(
            &[("/cfg/huesync/huesync.toml", "[paths]\ntheme_dir = \"global\"\n")],
            &[],
            None,
        )
        .expect("load");
        assert_eq!(loaded.config.paths.theme_dir, "global");
        assert!(matches!(loaded.source, ConfigSource::Global(_)));
    }

    #[test]
    fn no_files_falls_back_to_builtin_defaults() {
        let loaded = load_with(&[], &[], None).expect("load");
        assert_eq!(loaded.source, ConfigSource::BuiltInDefaults);
        assert_eq!(loaded.config, Config::default());
    }

    #[test]
    fn env_overrides_win_over_files() {
        let loaded = load_with(
            &[("huesync.toml", "[paths]\ntheme_dir = \"file\"\n")],
            &[
                ("HUESYNC_THEME_DIR", "/env/themes"),
                ("HUESYNC_BASE_DIR", "/env/base"),
                ("HUESYNC_PICKER", "Numeric"),
                ("NO_COLOR", "1"),
            ],
            None,
        )
        .expect("load");
        let c = loaded.config;
        assert_eq!(c.paths.theme_dir, "/env/themes");
        assert_eq!(c.paths.base_dir, "/env/base");
        assert_eq!(c.picker.mode, PickerMode::Numeric);
        assert!(!c.display.color);
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let loaded = load_with(&[], &[("HUESYNC_THEME_DIR", "  ")], None).expect("load");
        assert_eq!(loaded.config.paths.theme_dir, "./themes");
    }

    #[test]
    fn invalid_picker_env_is_rejected() {
        let err = load_with(&[], &[("HUESYNC_PICKER", "fuzzy")], None).expect_err("fail");
        assert!(err.to_string().contains("HUESYNC_PICKER"), "{err}");
    }

    #[test]
    fn relative_dirs_resolve_against_base_dir() {
        let mut c = Config::default();
        c.paths.base_dir = "/srv/polybar".to_string();
        assert_eq!(c.theme_dir(), PathBuf::from("/srv/polybar/themes"));
        c.paths.theme_dir = "/abs/themes".to_string();
        assert_eq!(c.theme_dir(), PathBuf::from("/abs/themes"));
    }

    fn isolated(text: &str, tmp: &TestTempDir) -> Config {
        let mut c = config_from(text);
        c.paths.base_dir = tmp.path().display().to_string();
        c.paths.updaters_dir = "./no-declarations".to_string();
        c
    }

    #[test]
    fn builds_default_injectors() {
        let tmp = TestTempDir::new("config-defaults");
        let injectors = isolated("", &tmp).build_injectors().expect("build");
        let names: Vec<&str> = injectors.iter().map(|i| i.name()).collect();
        assert_eq!(
            names,
            [
                "polybar-config",
                "polywins",
                "now-playing",
                "rofi",
                "kitty",
                "vscode",
                "kdeglobals",
                "kwin-outline"
            ]
        );
        assert_eq!(injectors[0].target(), tmp.child("config.ini"));
        assert_eq!(injectors[5].strategy().kind(), "literal");
    }

    #[test]
    fn builds_configured_injectors_with_user_palette() {
        let tmp = TestTempDir::new("config-build");
        let c = isolated(
            r##"
            [palettes.gruvbox]
            base = "#282828"

            [[injectors]]
            kind = "lines"
            path = "./bar.ini"
            rules = [{ template = "bg=<x>", anchor = "bg=", value = "base" }]

            [[injectors]]
            kind = "literal"
            name = "editor"
            path = "/x/theme.json"
            palette = "gruvbox"
            "##,
            &tmp,
        );
        let injectors = c.build_injectors().expect("build");
        assert_eq!(injectors[0].name(), "bar.ini");
        match injectors[0].strategy() {
            Strategy::Lines(rules) => {
                assert_eq!(rules[0].address, LineAddress::Anchor("bg=".into()));
                assert_eq!(rules[0].value, ValueSource::Role("base".into()));
            }
            other => panic!("unexpected strategy {}", other.kind()),
        }
        match injectors[1].strategy() {
            Strategy::Literal(palette) => {
                assert_eq!(palette.name(), "gruvbox");
                assert_eq!(palette.entries()[0].literal, "#282828");
            }
            other => panic!("unexpected strategy {}", other.kind()),
        }
    }

    #[test]
    fn declared_injectors_follow_configured_ones() {
        let tmp = TestTempDir::new("config-declared");
        tmp.write_text(
            "decl/extra.json",
            r#"{"path": "./extra.conf", "updaters": [{"line": "c=<x>", "line_number": 1, "replaceWith": "base"}]}"#,
        );
        let mut c = isolated("injectors = []\n", &tmp);
        c.paths.updaters_dir = "./decl".to_string();
        let injectors = c.build_injectors().expect("build");
        assert_eq!(injectors.len(), 1);
        assert_eq!(injectors[0].name(), "extra");
        assert_eq!(injectors[0].target(), tmp.child("extra.conf"));
    }

    #[test]
    fn rejects_bad_line_rules() {
        let tmp = TestTempDir::new("config-bad-rules");
        for rules in [
            r#"[{ template = "no placeholder", line = 1, value = "base" }]"#,
            r#"[{ template = "a=<x>", line = 0, value = "base" }]"#,
            r#"[{ template = "a=<x>", line = 1, anchor = "a=", value = "base" }]"#,
            r#"[{ template = "a=<x>", value = "base" }]"#,
            "[]",
        ] {
            let c = isolated(
                &format!("[[injectors]]\nkind = \"lines\"\nname = \"bad\"\npath = \"x\"\nrules = {rules}\n"),
                &tmp,
            );
            let err = c.build_injectors().expect_err(rules);
            assert!(err.to_string().contains("injector `bad`"), "{err}");
        }
    }

    #[test]
    fn unknown_palette_is_rejected() {
        let tmp = TestTempDir::new("config-palette");
        let c = isolated(
            "[[injectors]]\nkind = \"literal\"\npath = \"x\"\npalette = \"nord\"\n",
            &tmp,
        );
        let err = c.build_injectors().expect_err("unknown palette");
        assert!(err.to_string().contains("nord"), "{err}");
    }

    #[test]
    fn user_palette_keeps_declared_order() {
        let c = config_from("[palettes.p]\nzeta = \"#111111\"\nalpha = \"#222222\"\n");
        let palette = c.palette("p").expect("palette");
        let roles: Vec<&str> = palette.entries().iter().map(|e| e.role.as_str()).collect();
        assert_eq!(roles, ["zeta", "alpha"]);

        // Earlier substitutions feed later ones, so order decides the output.
        let tmp = TestTempDir::new("config-palette-order");
        let target = tmp.write_text("editor.json", "#111111 #222222\n");
        let theme = crate::theme::Theme::from_colors(
            "t.ini",
            "T",
            [("zeta", "#222222"), ("alpha", "#333333")]
                .into_iter()
                .map(|(r, v)| (r.to_string(), v.to_string()))
                .collect(),
        );
        crate::inject::Injector::new("editor", &target, Strategy::Literal(palette))
            .apply(&theme, false)
            .expect("apply");
        assert_eq!(
            std::fs::read_to_string(&target).expect("read"),
            "#333333 #333333\n"
        );
    }

    #[test]
    fn sections_keep_declared_order() {
        let tmp = TestTempDir::new("config-section-order");
        let c = isolated(
            r#"
            [[injectors]]
            kind = "sections"
            path = "./dunstrc"
            [injectors.sections.urgency_low]
            frame = "accent"
            background = "base"
            [injectors.sections.global]
            foreground = "text"
            "#,
            &tmp,
        );
        let injectors = c.build_injectors().expect("build");
        match injectors[0].strategy() {
            Strategy::Sections(rules) => {
                let sections: Vec<&str> = rules.iter().map(|r| r.section.as_str()).collect();
                assert_eq!(sections, ["urgency_low", "global"]);
                let keys: Vec<&str> = rules[0].keys.iter().map(|(k, _)| k.as_str()).collect();
                assert_eq!(keys, ["frame", "background"]);
            }
            other => panic!("unexpected strategy {}", other.kind()),
        }
    }

    #[test]
    fn init_creates_then_reports_existing() {
        let tmp = TestTempDir::new("config-init");
        let path = tmp.child("huesync/huesync.toml");

        let created = initialize_default_global_config_at_path(&path, false).expect("create");
        assert_eq!(created, GlobalConfigInitResult::Created { path: path.clone() });
        assert_eq!(
            std::fs::read_to_string(&path).expect("read"),
            DEFAULT_CONFIG_TEMPLATE
        );

        let again = initialize_default_global_config_at_path(&path, false).expect("again");
        assert_eq!(again, GlobalConfigInitResult::AlreadyInitialized { path });
    }

    #[test]
    fn init_force_backs_up_existing_file() {
        let tmp = TestTempDir::new("config-init-force");
        let path = tmp.write_text("huesync.toml", "# mine\n");

        let result = initialize_default_global_config_at_path(&path, true).expect("force");
        let backup_path = match result {
            GlobalConfigInitResult::Overwritten { backup_path, .. } => backup_path,
            other => panic!("expected overwrite, got {other:?}"),
        };
        assert_eq!(std::fs::read_to_string(backup_path).expect("backup"), "# mine\n");
        assert_eq!(
            std::fs::read_to_string(&path).expect("read"),
            DEFAULT_CONFIG_TEMPLATE
        );
    }
}
