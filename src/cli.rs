//! CLI argument parsing via clap.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Pick a color theme and push it into your desktop's config files.
#[derive(Debug, Parser)]
#[command(name = "huesync", version)]
pub struct Args {
    /// Path to config file (default: ./huesync.toml or ~/.config/huesync/huesync.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Override the theme directory.
    #[arg(long = "theme-dir", global = true)]
    pub theme_dir: Option<String>,

    /// Use the numbered prompt instead of the arrow-key picker.
    #[arg(long = "numeric")]
    pub numeric: bool,

    /// Show what would change without writing anything.
    #[arg(long = "dry-run", global = true)]
    pub dry_run: bool,

    /// Skip the reload commands after applying.
    #[arg(long = "no-reload", global = true)]
    pub no_reload: bool,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Apply a theme by index, description, or file name.
    Apply {
        /// 1-based index, description, or file stem.
        selector: String,
    },
    /// List available themes.
    List,
    /// Print a theme's colors with swatches.
    Show {
        /// 1-based index, description, or file stem.
        selector: String,
    },
    /// Write the default config to ~/.config/huesync/huesync.toml.
    Init {
        /// Overwrite an existing config (the old file is backed up).
        #[arg(long = "force")]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::{Args, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn no_subcommand_means_interactive_pick() {
        let args = Args::parse_from(["huesync"]);
        assert!(args.command.is_none());
        assert!(!args.numeric);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn apply_takes_a_selector_and_global_flags() {
        let args = Args::parse_from(["huesync", "apply", "Nord", "--dry-run", "--no-reload"]);
        assert_eq!(
            args.command,
            Some(Command::Apply {
                selector: "Nord".to_string()
            })
        );
        assert!(args.dry_run);
        assert!(args.no_reload);
    }

    #[test]
    fn config_and_theme_dir_overrides_parse() {
        let args = Args::parse_from([
            "huesync",
            "-c",
            "/tmp/h.toml",
            "--theme-dir",
            "~/themes",
            "--numeric",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/h.toml")));
        assert_eq!(args.theme_dir.as_deref(), Some("~/themes"));
        assert!(args.numeric);
    }

    #[test]
    fn verbose_is_repeatable() {
        let args = Args::parse_from(["huesync", "-vv", "list"]);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.command, Some(Command::List));
    }

    #[test]
    fn init_force_flag() {
        let args = Args::parse_from(["huesync", "init", "--force"]);
        assert_eq!(args.command, Some(Command::Init { force: true }));
    }

    #[test]
    fn show_requires_selector() {
        assert!(Args::try_parse_from(["huesync", "show"]).is_err());
    }
}
