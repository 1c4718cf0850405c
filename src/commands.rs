//! Command handlers: one edit against the document, persisted, then listed.

use crate::document::{Document, Toggle};
use crate::error::Result;
use crate::list::{list, Printer};
use crate::store::HostsStore;

/// Print the raw hosts content.
pub fn cat(content: &str, printer: &mut dyn Printer) {
    printer.print(content);
    printer.print("\n");
}

/// Create or update an entry, persist, then list.
///
/// `domains` are joined with single spaces. Returns the saved directive line.
pub fn save(
    store: &dyn HostsStore,
    doc: &mut Document,
    printer: &mut dyn Printer,
    label: &str,
    address: &str,
    domains: &[String],
) -> Result<String> {
    let domains = domains.join(" ");
    let line = doc.save(label, address, domains.trim());
    store.write(doc.content())?;
    tracing::info!(entry = label, line = %line, "saved entry");
    list(doc.entries(), printer);
    Ok(line)
}

/// Enable or disable an entry, persisting only if it changed, then list.
pub fn toggle(
    store: &dyn HostsStore,
    doc: &mut Document,
    printer: &mut dyn Printer,
    label: &str,
    toggle: Toggle,
) -> Result<()> {
    if doc.toggle(label, toggle)? {
        store.write(doc.content())?;
        tracing::info!(entry = label, ?toggle, "toggled entry");
    } else {
        tracing::debug!(entry = label, ?toggle, "entry already in requested state");
    }
    list(doc.entries(), printer);
    Ok(())
}

/// Delete an entry, persist, then list. Unknown labels only print usage.
pub fn remove(
    store: &dyn HostsStore,
    doc: &mut Document,
    printer: &mut dyn Printer,
    label: &str,
) -> Result<()> {
    if !doc.remove(label) {
        printer.print(&format!("hosty has no entry: {label}\n"));
        printer.usage();
        return Ok(());
    }
    store.write(doc.content())?;
    tracing::info!(entry = label, "removed entry");
    list(doc.entries(), printer);
    Ok(())
}
