//! Core business logic module
//!
//! This module contains the rotation logic. Apart from reading the settings
//! file it does no I/O - that belongs in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`mode`] - Game modes and the rotation cycle
//! - [`catalog`] - Map catalog parsing and validation
//! - [`scoring`] - Recency penalties and normalized shares
//! - [`selection`] - Weighted random short-list
//! - [`rotation`] - Rotation session state
//! - [`menu`] - Interactive response parsing
//! - [`simulate`] - Long-run rotation simulation
//! - [`settings`] - Settings file handling

pub mod catalog;
pub mod menu;
pub mod mode;
pub mod rotation;
pub mod scoring;
pub mod selection;
pub mod settings;
pub mod simulate;
