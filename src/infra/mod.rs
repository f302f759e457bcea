//! Infrastructure layer
//!
//! Handles all I/O operations on the map file, play log and config directory.
//! This module is the only place where side effects occur.

pub mod dirs;
pub mod filesystem;
pub mod play_log;
