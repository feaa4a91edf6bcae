//! Section/key rewrites for INI-style targets.

use crate::error::InjectError;
use crate::ini::{IniDocument, KeyCase};
use crate::theme::Theme;

use super::{ColorCase, TargetFile, ValueSource};

/// Keys to set inside one section, in the order they are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRule {
    pub section: String,
    pub keys: Vec<(String, ValueSource)>,
}

impl SectionRule {
    pub fn new(section: &str) -> Self {
        Self {
            section: section.to_string(),
            keys: Vec::new(),
        }
    }

    /// Builder helper: set `key` to a theme role.
    pub fn role(mut self, key: &str, role: &str) -> Self {
        self.keys.push((key.to_string(), ValueSource::role(role)));
        self
    }
}

pub(super) fn inject(
    file: &TargetFile,
    rules: &[SectionRule],
    theme: &Theme,
    case: ColorCase,
) -> Result<Vec<String>, InjectError> {
    let mut doc =
        IniDocument::parse(&file.text(), KeyCase::Preserve).map_err(|source| InjectError::Parse {
            path: file.path().to_path_buf(),
            source,
        })?;

    for rule in rules {
        let mut resolved = Vec::with_capacity(rule.keys.len());
        for (key, value) in &rule.keys {
            resolved.push((key.as_str(), value.resolve(theme, case)?));
        }
        if !doc.has_section(&rule.section) {
            tracing::debug!(section = %rule.section, "creating missing section");
        }
        let section = doc.ensure_section(&rule.section);
        for (key, value) in resolved {
            section.set(key, &value);
        }
    }

    Ok(doc.to_lines())
}
