//! Removing entries.

mod common;

use common::{CapturePrinter, MemoryStore};
use hosty::commands;
use hosty::document::Document;

#[test]
fn remove_deletes_marker_and_directive() {
    let content = "127.0.0.1\tlocalhost\n#hosty-a\n 1.1.1.1 a.test\n#hosty-b\n#2.2.2.2 b.test\n::1\tlocalhost\n";
    let mut doc = Document::parse(content).unwrap();

    assert!(doc.remove("a"));

    assert_eq!(
        doc.content(),
        "127.0.0.1\tlocalhost\n#hosty-b\n#2.2.2.2 b.test\n::1\tlocalhost\n"
    );
    assert_eq!(doc.get("a"), None);
    assert_eq!(doc.entries().len(), 1);
}

#[test]
fn remove_last_entry_without_trailing_newline() {
    let mut doc = Document::parse("127.0.0.1\tlocalhost\n#hosty-a\n 1.1.1.1 a.test").unwrap();
    assert!(doc.remove("a"));
    assert_eq!(doc.content(), "127.0.0.1\tlocalhost\n");
    assert!(doc.entries().is_empty());
}

#[test]
fn remove_command_persists_and_lists() {
    let store = MemoryStore::new("#hosty-a\n 1.1.1.1 a.test\n#hosty-b\n 2.2.2.2 b.test\n");
    let mut doc = Document::parse(store.content()).unwrap();
    let mut printer = CapturePrinter::default();

    commands::remove(&store, &mut doc, &mut printer, "b").unwrap();

    assert_eq!(store.writes(), 1);
    assert_eq!(store.content(), "#hosty-a\n 1.1.1.1 a.test\n");
    assert_eq!(printer.output(), "hosty entries:\n✔ a\t 1.1.1.1 a.test\n");
}

#[test]
fn remove_only_entry_lists_empty() {
    let store = MemoryStore::new("#hosty-a\n 1.1.1.1 a.test\n");
    let mut doc = Document::parse(store.content()).unwrap();
    let mut printer = CapturePrinter::default();

    commands::remove(&store, &mut doc, &mut printer, "a").unwrap();

    assert_eq!(store.content(), "");
    assert_eq!(printer.output(), "hosty has no entries!\n");
    assert_eq!(printer.usage_calls, 1);
}

#[test]
fn remove_unknown_entry_does_not_write() {
    let content = "#hosty-a\n 1.1.1.1 a.test\n";
    let store = MemoryStore::new(content);
    let mut doc = Document::parse(store.content()).unwrap();
    let mut printer = CapturePrinter::default();

    commands::remove(&store, &mut doc, &mut printer, "nope").unwrap();

    assert_eq!(store.writes(), 0);
    assert_eq!(store.content(), content);
    assert_eq!(printer.output(), "hosty has no entry: nope\n");
    assert_eq!(printer.usage_calls, 1);
}
