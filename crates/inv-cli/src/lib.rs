//! # inv-cli
//!
//! Command-line adapter for the inventory registry: configuration and tracing
//! bootstrap, dependency wiring, and one handler per command.

pub mod bootstrap;
pub mod cli;
pub mod commands;

pub use bootstrap::{run, run_cli};
