//! Entry listing and the output sink it writes through.

use crate::document::{is_enabled, Entries};

pub const ENABLED_GLYPH: &str = "✔";
pub const DISABLED_GLYPH: &str = "✖";
pub const NO_ENTRIES: &str = "hosty has no entries!\n";

/// Where command output goes. The console implementation lives in `cli`.
pub trait Printer {
    /// Write text as-is (no newline appended).
    fn print(&mut self, text: &str);
    /// Show usage help.
    fn usage(&mut self);
}

/// Entries sorted by label.
pub fn sorted_entries(entries: &Entries) -> Vec<(&str, &str)> {
    let mut v: Vec<_> = entries
        .iter()
        .map(|(label, line)| (label.as_str(), line.as_str()))
        .collect();
    v.sort_by(|a, b| a.0.cmp(b.0));
    v
}

/// Print all entries as one report, or the empty message plus usage.
pub fn list(entries: &Entries, printer: &mut dyn Printer) {
    if entries.is_empty() {
        printer.print(NO_ENTRIES);
        printer.usage();
        return;
    }
    let mut output = String::from("hosty entries:\n");
    for (label, line) in sorted_entries(entries) {
        let status = if is_enabled(line) {
            ENABLED_GLYPH
        } else {
            DISABLED_GLYPH
        };
        output.push_str(&format!("{status} {label}\t{line}\n"));
    }
    printer.print(&output);
}
