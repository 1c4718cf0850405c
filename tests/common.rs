//! Shared test helpers.
#![allow(dead_code)]

use std::cell::RefCell;

use hosty::error::Result;
use hosty::list::Printer;
use hosty::store::HostsStore;
use tempfile::TempDir;

/// Create a temp directory for scratch hosts and config files.
pub fn temp_hosty_home() -> TempDir {
    tempfile::Builder::new()
        .prefix("hosty_test_")
        .tempdir()
        .expect("temp dir")
}

/// Run a closure with an env var set, restoring the previous value after.
pub fn with_env<F, R>(key: &str, value: &std::path::Path, f: F) -> R
where
    F: FnOnce() -> R,
{
    let prev = std::env::var_os(key);
    std::env::set_var(key, value);
    let r = f();
    match prev {
        Some(v) => std::env::set_var(key, v),
        None => std::env::remove_var(key),
    }
    r
}

/// In-memory store recording every write.
pub struct MemoryStore {
    content: RefCell<String>,
    writes: RefCell<Vec<String>>,
}

impl MemoryStore {
    pub fn new(content: &str) -> Self {
        Self {
            content: RefCell::new(content.to_string()),
            writes: RefCell::new(Vec::new()),
        }
    }

    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.borrow().len()
    }
}

impl HostsStore for MemoryStore {
    fn read(&self) -> Result<String> {
        Ok(self.content())
    }

    fn write(&self, content: &str) -> Result<()> {
        *self.content.borrow_mut() = content.to_string();
        self.writes.borrow_mut().push(content.to_string());
        Ok(())
    }
}

/// Printer capturing each print call and counting usage requests.
#[derive(Default)]
pub struct CapturePrinter {
    pub printed: Vec<String>,
    pub usage_calls: usize,
}

impl CapturePrinter {
    pub fn output(&self) -> String {
        self.printed.concat()
    }
}

impl Printer for CapturePrinter {
    fn print(&mut self, text: &str) {
        self.printed.push(text.to_string());
    }

    fn usage(&mut self) {
        self.usage_calls += 1;
    }
}
