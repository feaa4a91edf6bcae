//! Turn loaded config into runtime objects: expanded paths, reference
//! palettes, and the ordered injector list.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::inject::presets::{self, CATPPUCCIN_MOCHA};
use crate::inject::{
    Injector, LineRule, ReferencePalette, SectionRule, Strategy, ValueSource, PLACEHOLDER,
};

use super::declared::load_declared_injectors;
use super::paths::{expand_home, expand_path};
use super::{Config, InjectorSpec, LineRuleSpec};

impl Config {
    /// Anchor for every `./`-relative path.
    pub fn base_dir(&self) -> PathBuf {
        expand_home(&self.paths.base_dir)
    }

    pub fn theme_dir(&self) -> PathBuf {
        expand_path(&self.paths.theme_dir, &self.base_dir())
    }

    pub fn updaters_dir(&self) -> PathBuf {
        expand_path(&self.paths.updaters_dir, &self.base_dir())
    }

    /// Look up a reference palette. User palettes shadow the bundled one.
    pub fn palette(&self, name: &str) -> Result<ReferencePalette, ConfigError> {
        let built = if let Some(entries) = self.palettes.get(name) {
            ReferencePalette::new(
                name,
                entries.iter().map(|(role, literal)| (role.as_str(), literal.as_str())),
            )
        } else if name == CATPPUCCIN_MOCHA {
            presets::catppuccin_mocha()
        } else {
            return Err(ConfigError::Invalid(format!("unknown palette `{name}`")));
        };
        built.map_err(|e| ConfigError::Invalid(format!("palette `{name}`: {e}")))
    }

    /// Configured injectors followed by JSON-declared ones.
    pub fn build_injectors(&self) -> Result<Vec<Injector>, ConfigError> {
        let base_dir = self.base_dir();
        let mut injectors = self
            .injectors
            .iter()
            .map(|spec| self.build_injector(spec, &base_dir))
            .collect::<Result<Vec<_>, _>>()?;
        injectors.extend(load_declared_injectors(&self.updaters_dir(), &base_dir)?);
        tracing::debug!(count = injectors.len(), "resolved injectors");
        Ok(injectors)
    }

    fn build_injector(
        &self,
        spec: &InjectorSpec,
        base_dir: &std::path::Path,
    ) -> Result<Injector, ConfigError> {
        let target = expand_path(spec.path(), base_dir);
        let name = spec
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| default_name(spec));

        let injector = match spec {
            InjectorSpec::Lines { rules, case, .. } => {
                if rules.is_empty() {
                    return Err(invalid(&name, "`rules` must not be empty"));
                }
                let rules = rules
                    .iter()
                    .map(|rule| line_rule(rule, &name))
                    .collect::<Result<Vec<_>, _>>()?;
                Injector::new(name, target, Strategy::Lines(rules)).with_case(*case)
            }
            InjectorSpec::Sections { sections, case, .. } => {
                let rules = sections
                    .iter()
                    .map(|(section, keys)| SectionRule {
                        section: section.clone(),
                        keys: keys
                            .iter()
                            .map(|(key, value)| (key.clone(), ValueSource::parse(value)))
                            .collect(),
                    })
                    .collect();
                Injector::new(name, target, Strategy::Sections(rules)).with_case(*case)
            }
            InjectorSpec::Literal { palette, .. } => {
                let palette = self
                    .palette(palette)
                    .map_err(|e| invalid(&name, &e.to_string()))?;
                Injector::new(name, target, Strategy::Literal(palette))
            }
            InjectorSpec::Rofi { .. } => presets::rofi(&name, target),
            InjectorSpec::Kitty { .. } => presets::kitty(&name, target),
            InjectorSpec::KdeGlobals { .. } => presets::kde_globals(&name, target),
            InjectorSpec::KwinOutline { .. } => presets::kwin_outline(&name, target),
        };
        Ok(injector)
    }
}

/// File name of the target, falling back to the kind.
fn default_name(spec: &InjectorSpec) -> String {
    std::path::Path::new(spec.path())
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| spec.kind().to_string())
}

fn line_rule(spec: &LineRuleSpec, injector: &str) -> Result<LineRule, ConfigError> {
    if !spec.template.contains(PLACEHOLDER) {
        return Err(invalid(
            injector,
            &format!(
                "template `{}` has no `{PLACEHOLDER}` placeholder",
                spec.template
            ),
        ));
    }
    let value = ValueSource::parse(&spec.value);
    match (spec.line, spec.anchor.as_deref()) {
        (Some(0), None) => Err(invalid(injector, "line numbers are 1-indexed")),
        (Some(line), None) => Ok(LineRule::at(&spec.template, line, value)),
        (None, Some(anchor)) if !anchor.is_empty() => {
            Ok(LineRule::anchored(&spec.template, anchor, value))
        }
        _ => Err(invalid(
            injector,
            "each rule needs exactly one of `line` or `anchor`",
        )),
    }
}

fn invalid(injector: &str, message: &str) -> ConfigError {
    ConfigError::Invalid(format!("injector `{injector}`: {message}"))
}
