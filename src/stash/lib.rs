//! # Stash
//!
//! Pipe text in, get a timestamped file in `~/.stashes/`; list recent stashes
//! with a short teaser; take any of them back out by position.
//!
//! ```text
//! $ git diff | stash          # create
//! $ stash -l 3                # list the 3 newest, with teasers
//! $ stash -t 1 | git apply    # take the newest back
//! ```
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  flags, rendering, stdout/stderr, exit codes                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs): StashApi<S: DataStore>                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs): create, list, take               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/): FileStore, InMemoryStore                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward takes plain Rust arguments, returns
//! `Result<CmdResult>`, and never prints or exits.
//!
//! ## Positions
//!
//! Stashes are addressed by reverse position: `1` is the newest. Positions
//! are derived from the sorted directory listing on every call; see
//! [`index`].

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod logging;
pub mod model;
pub mod store;
pub mod teaser;
