//! Handles Command Line Interface (CLI) related functionalities.
//!
//! `commands` holds the argument parser and the [`App`] handlers, `menus` drives the
//! interactive loops, `prompts` collects input and `display` renders output.

mod commands;
pub mod display;
pub mod menus;
mod prompts;

pub use commands::*;
