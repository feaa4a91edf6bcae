//! Environment overrides.
//!
//! `HUESYNC_*` variables win over every config file. Empty values are
//! treated as unset.

use crate::error::ConfigError;

use super::{Config, PickerMode};

pub(super) const ENV_BASE_DIR: &str = "HUESYNC_BASE_DIR";
pub(super) const ENV_THEME_DIR: &str = "HUESYNC_THEME_DIR";
pub(super) const ENV_UPDATERS_DIR: &str = "HUESYNC_UPDATERS_DIR";
pub(super) const ENV_PICKER: &str = "HUESYNC_PICKER";
/// Community convention for disabling colored output.
pub(super) const ENV_NO_COLOR: &str = "NO_COLOR";

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(dir) = non_empty(env_lookup, ENV_BASE_DIR) {
        config.paths.base_dir = dir;
    }
    if let Some(dir) = non_empty(env_lookup, ENV_THEME_DIR) {
        config.paths.theme_dir = dir;
    }
    if let Some(dir) = non_empty(env_lookup, ENV_UPDATERS_DIR) {
        config.paths.updaters_dir = dir;
    }
    if let Some(mode) = non_empty(env_lookup, ENV_PICKER) {
        config.picker.mode = PickerMode::parse(&mode).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "invalid {ENV_PICKER} value `{mode}`: expected `interactive` or `numeric`"
            ))
        })?;
    }
    if non_empty(env_lookup, ENV_NO_COLOR).is_some() {
        config.display.color = false;
    }
    Ok(())
}

fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
