//! mode_rotation - weighted map rotation for multi-mode game lobbies
//!
//! Keeps a log of played maps and offers a short-list of maps for the mode
//! that is up next, favoring maps (and map families) that haven't been
//! played recently.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (modes, catalog, scoring, selection)
//! - [`infra`] - Infrastructure layer (map file, play log, directories)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
