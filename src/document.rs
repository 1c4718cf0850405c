//! Hosts document model: labeled entries parsed out of the raw file text.
//!
//! A managed entry is a marker line `#hosty-<label>` followed by its directive
//! line (`[#]<address> <domains>`). Edits are applied as in-place text
//! substitutions on the raw content so lines hosty does not own are left
//! byte-for-byte untouched.

use std::collections::HashMap;
use std::ops::Range;

use crate::error::{HostyError, Result};

/// Prefix announcing a managed entry's label.
pub const MARKER_PREFIX: &str = "#hosty-";

/// Leading character of a disabled directive line.
pub const COMMENT: char = '#';

/// Leading character the writer puts on enabled directive lines.
pub const ENABLED_PREFIX: char = ' ';

/// Label -> directive line.
pub type Entries = HashMap<String, String>;

/// True unless the directive line is commented out.
pub fn is_enabled(directive: &str) -> bool {
    !directive.starts_with(COMMENT)
}

/// Parse every marker/directive pair out of `content`.
///
/// A repeated label keeps the last pair. A marker on the final line has no
/// directive and is rejected.
pub fn parse_entries(content: &str) -> Result<Entries> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut entries = Entries::new();
    for (index, line) in lines.iter().enumerate() {
        let Some(label) = line.strip_prefix(MARKER_PREFIX) else {
            continue;
        };
        let directive = lines
            .get(index + 1)
            .ok_or_else(|| HostyError::MalformedDocument {
                label: label.to_string(),
                line: index + 1,
            })?;
        entries.insert(label.to_string(), directive.to_string());
    }
    Ok(entries)
}

/// Direction of an enable/disable edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Enable,
    Disable,
}

impl Toggle {
    /// Rewritten directive, or `None` when it is already in the target state.
    pub fn apply(self, directive: &str) -> Option<String> {
        match self {
            Toggle::Enable => directive
                .strip_prefix(COMMENT)
                .map(|rest| format!("{ENABLED_PREFIX}{rest}")),
            Toggle::Disable => {
                if !is_enabled(directive) {
                    return None;
                }
                let rest = directive.strip_prefix(ENABLED_PREFIX).unwrap_or(directive);
                Some(format!("{COMMENT}{rest}"))
            }
        }
    }
}

/// Byte ranges of one entry's lines, line breaks excluded.
#[derive(Debug)]
struct EntrySpan {
    marker: Range<usize>,
    directive: Range<usize>,
}

/// Raw hosts content plus the entries parsed from it, kept in step on every edit.
#[derive(Debug, Clone)]
pub struct Document {
    content: String,
    entries: Entries,
}

impl Document {
    pub fn parse(content: impl Into<String>) -> Result<Self> {
        let content = content.into();
        let entries = parse_entries(&content)?;
        tracing::debug!(entries = entries.len(), "parsed hosts document");
        Ok(Self { content, entries })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn entries(&self) -> &Entries {
        &self.entries
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries.get(label).map(String::as_str)
    }

    /// Create or overwrite an entry. The saved entry is always enabled.
    ///
    /// Returns the new directive line.
    pub fn save(&mut self, label: &str, address: &str, domains: &str) -> String {
        let directive = format!("{ENABLED_PREFIX}{address} {domains}");
        match self.locate(label) {
            Some(span) => self.content.replace_range(span.directive, &directive),
            None => {
                if !self.content.is_empty() && !self.content.ends_with('\n') {
                    self.content.push('\n');
                }
                self.content.push_str(MARKER_PREFIX);
                self.content.push_str(label);
                self.content.push('\n');
                self.content.push_str(&directive);
                self.content.push('\n');
            }
        }
        self.entries.insert(label.to_string(), directive.clone());
        directive
    }

    /// Flip an entry's state. `Ok(false)` means it was already in that state.
    pub fn toggle(&mut self, label: &str, toggle: Toggle) -> Result<bool> {
        let span = self
            .locate(label)
            .ok_or_else(|| HostyError::UnknownEntry(label.to_string()))?;
        let Some(next) = toggle.apply(&self.content[span.directive.clone()]) else {
            return Ok(false);
        };
        self.content.replace_range(span.directive, &next);
        self.entries.insert(label.to_string(), next);
        Ok(true)
    }

    /// Drop an entry's marker and directive lines. `false` if the label is unknown.
    pub fn remove(&mut self, label: &str) -> bool {
        let Some(span) = self.locate(label) else {
            return false;
        };
        let mut end = span.directive.end;
        if self.content[end..].starts_with('\n') {
            end += 1;
        }
        self.content.replace_range(span.marker.start..end, "");
        self.entries.remove(label);
        true
    }

    /// Find the last marker line for `label`, matching what `parse_entries` keeps.
    fn locate(&self, label: &str) -> Option<EntrySpan> {
        if !self.entries.contains_key(label) {
            return None;
        }
        let marker = format!("{MARKER_PREFIX}{label}");
        let lines = line_ranges(&self.content);
        let index = lines
            .iter()
            .rposition(|r| self.content[r.clone()] == marker)?;
        let directive = lines.get(index + 1)?.clone();
        Some(EntrySpan {
            marker: lines[index].clone(),
            directive,
        })
    }
}

fn line_ranges(content: &str) -> Vec<Range<usize>> {
    let mut start = 0;
    content
        .split('\n')
        .map(|line| {
            let range = start..start + line.len();
            start = range.end + 1;
            range
        })
        .collect()
}
