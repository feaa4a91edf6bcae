//! Minimal section/key document model for INI-style files.
//!
//! Covers the dialect shared by theme files, `kdeglobals`, and `kwinrc`:
//! `[section]` headers, `key=value` or `key: value` entries, full-line `#`/`;`
//! comments, and indented continuation lines. Comments are not retained, so
//! serializing a parsed document drops them.

use crate::error::ParseError;

/// How entry keys are normalized while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCase {
    /// Keep keys exactly as written (`BackgroundNormal`).
    Preserve,
    /// Fold keys to lowercase (theme color roles).
    Lower,
}

impl KeyCase {
    fn apply(self, key: &str) -> String {
        match self {
            Self::Preserve => key.to_string(),
            Self::Lower => key.to_lowercase(),
        }
    }
}

/// One `[name]` block with its entries in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace an existing key in place, or append it.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parsed section/key document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    sections: Vec<Section>,
}

impl IniDocument {
    pub fn parse(text: &str, key_case: KeyCase) -> Result<Self, ParseError> {
        let mut sections: Vec<Section> = Vec::new();
        // Index of the entry a continuation line would extend.
        let mut open_entry: Option<usize> = None;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                open_entry = None;
                continue;
            }
            if trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            let indented = raw.starts_with(' ') || raw.starts_with('\t');
            if indented {
                if let (Some(section), Some(entry)) = (sections.last_mut(), open_entry) {
                    let value = &mut section.entries[entry].1;
                    value.push('\n');
                    value.push_str(trimmed);
                    continue;
                }
            }

            if trimmed.starts_with('[') && trimmed.ends_with(']') && trimmed.len() > 2 {
                let name = &trimmed[1..trimmed.len() - 1];
                if sections.iter().any(|s| s.name == name) {
                    return Err(ParseError::new(
                        line_no,
                        format!("duplicate section `{name}`"),
                    ));
                }
                sections.push(Section::new(name));
                open_entry = None;
                continue;
            }

            let Some(section) = sections.last_mut() else {
                return Err(ParseError::new(line_no, "entry outside of any section"));
            };
            let Some(delim) = trimmed.find(|c| c == '=' || c == ':') else {
                return Err(ParseError::new(
                    line_no,
                    format!("expected `key=value`, got `{trimmed}`"),
                ));
            };
            let key = trimmed[..delim].trim();
            if key.is_empty() {
                return Err(ParseError::new(line_no, "empty key"));
            }
            let key = key_case.apply(key);
            if section.get(&key).is_some() {
                return Err(ParseError::new(
                    line_no,
                    format!("duplicate key `{key}` in section `{}`", section.name),
                ));
            }
            let value = trimmed[delim + 1..].trim();
            section.entries.push((key, value.to_string()));
            open_entry = Some(section.entries.len() - 1);
        }

        Ok(Self { sections })
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    #[cfg(test)]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get(key)
    }

    /// Return the named section, appending an empty one when absent.
    pub fn ensure_section(&mut self, name: &str) -> &mut Section {
        let idx = match self.sections.iter().position(|s| s.name == name) {
            Some(idx) => idx,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[idx]
    }

    /// Serialize as `[section]` + unpadded `key=value` rows, one blank line
    /// after every section.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            out.push('[');
            out.push_str(&section.name);
            out.push_str("]\n");
            for (key, value) in &section.entries {
                out.push_str(key);
                out.push('=');
                out.push_str(&value.replace('\n', "\n\t"));
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }

    /// Serialized output split into terminated lines, whitespace-only lines
    /// normalized to a bare `\n`.
    pub fn to_lines(&self) -> Vec<String> {
        self.serialize()
            .split_inclusive('\n')
            .map(|line| {
                if line.trim().is_empty() {
                    "\n".to_string()
                } else {
                    line.to_string()
                }
            })
            .collect()
    }
}
