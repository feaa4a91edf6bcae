//! Line-addressed template replacement.

use crate::error::InjectError;
use crate::theme::Theme;

use super::{ColorCase, ValueSource};

/// Placeholder substituted inside line templates.
pub const PLACEHOLDER: &str = "<x>";

/// How a rule finds the line it overwrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAddress {
    /// Exact 1-indexed line number.
    Number(usize),
    /// First line whose left-trimmed text starts with this prefix.
    Anchor(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRule {
    pub template: String,
    pub address: LineAddress,
    pub value: ValueSource,
}

impl LineRule {
    pub fn at(template: &str, line: usize, value: ValueSource) -> Self {
        Self {
            template: template.to_string(),
            address: LineAddress::Number(line),
            value,
        }
    }

    pub fn anchored(template: &str, anchor: &str, value: ValueSource) -> Self {
        Self {
            template: template.to_string(),
            address: LineAddress::Anchor(anchor.to_string()),
            value,
        }
    }

    /// 1-indexed line this rule addresses. Numbered rules are returned as
    /// written; `replace_line` does the bounds check.
    fn locate(&self, lines: &[String]) -> Option<usize> {
        match &self.address {
            LineAddress::Number(line) => Some(*line),
            LineAddress::Anchor(prefix) => lines
                .iter()
                .position(|line| line.trim_start().starts_with(prefix.as_str()))
                .map(|idx| idx + 1),
        }
    }
}

/// Overwrite the 1-indexed `line` with `template`, its placeholder replaced by
/// `replacement`. The line keeps its original terminator. Out-of-range line
/// numbers leave `lines` untouched and return `false`.
pub fn replace_line(lines: &mut [String], template: &str, line: usize, replacement: &str) -> bool {
    let Some(slot) = line.checked_sub(1).and_then(|idx| lines.get_mut(idx)) else {
        return false;
    };
    overwrite(slot, template, replacement);
    true
}

fn overwrite(slot: &mut String, template: &str, replacement: &str) {
    let terminator = line_terminator(slot);
    *slot = format!("{}{terminator}", template.replace(PLACEHOLDER, replacement));
}

fn line_terminator(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

pub(super) fn inject(
    lines: &[String],
    rules: &[LineRule],
    theme: &Theme,
    case: ColorCase,
) -> Result<Vec<String>, InjectError> {
    let mut out = lines.to_vec();
    for rule in rules {
        // Resolved first so a missing role fails even when the line is absent.
        let replacement = rule.value.resolve(theme, case)?;
        let written = rule
            .locate(&out)
            .is_some_and(|line| replace_line(&mut out, &rule.template, line, &replacement));
        if !written {
            tracing::debug!(template = %rule.template, "line rule skipped: no such line");
        }
    }
    Ok(out)
}
