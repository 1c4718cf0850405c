//! Platform defaults.

use std::path::PathBuf;

#[cfg(unix)]
const HOSTS_FILE: &str = "/etc/hosts";

#[cfg(windows)]
const HOSTS_FILE: &str = r"C:\Windows\System32\drivers\etc\hosts";

/// Location of the system hosts file.
pub fn default_hosts_path() -> PathBuf {
    PathBuf::from(HOSTS_FILE)
}
