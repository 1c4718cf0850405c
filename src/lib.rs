//! Hosty - labeled, toggleable entries in the hosts file.

pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod list;
pub mod platform;
pub mod store;
