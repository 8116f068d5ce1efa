//! # CLI Layer
//!
//! One client of the stash library, and the only place that knows about
//! stdin, stdout, stderr and terminal colors.
//!
//! - `setup`: clap definitions and mode selection
//! - `commands`: `run()` and the per-mode handlers
//! - `render`: results to strings (text or JSON)
//! - `styles`: the color theme

mod commands;
mod render;
mod setup;
mod styles;

pub use commands::run;
