//! dockwrap: docker / docker-compose wrapper
//!
//! Runs container tool commands through a fixed fallback chain of command
//! templates and normalizes their output into a uniform response envelope.
//! Also carries a small in-memory catalog of operating-system releases.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
