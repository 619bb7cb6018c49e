// NOTE: stockterm Architecture
//
// Snapshot in, screen out:
// - The store keeps dated record documents; the newest date is the live snapshot
// - The engine derives the ordered view from (snapshot, filter, sort) with no caches
// - The runtime owns one session: fetch lifecycle, focus and the render window
// - This crate maps user input onto session operations and session state onto output
//
// Console commands run the same pipeline once and print the result; the
// `screen` command keeps a session alive and redraws after every input.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, FilterArgs};
pub use commands::run;
