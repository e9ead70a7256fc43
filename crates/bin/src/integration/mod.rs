//! Glue between the library crates and the terminal.
//!
//! Providers, console prompts, and the tools each menu entry runs.

pub(crate) mod prompt;
pub(crate) mod provider;
pub(crate) mod tools;
