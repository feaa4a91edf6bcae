//! Binary-local application orchestration helpers.
//!
//! `main.rs` keeps process wiring (logging, config, exit codes); this module
//! hosts the command handlers.

pub(crate) mod commands;
