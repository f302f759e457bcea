//! Error types for mode_rotation
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::mode::Mode;

/// Map catalog (`all_maps.json`) errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// JSON could not be decoded into groups and variants
    #[error("Failed to parse map file: {0}")]
    Parse(String),

    /// Group name missing or empty
    #[error("Group {gid} has an empty name")]
    EmptyGroupName { gid: u16 },

    /// Variant names a mode that doesn't exist
    #[error("(gid {gid}) unknown map mode: '{mode}'")]
    UnknownMode { gid: u16, mode: String },

    /// Variant nickname present but empty
    #[error("(gid {gid}) map {id} has an empty nickname")]
    EmptyNickname { gid: u16, id: u16 },

    /// Map id used twice
    #[error("(gid {gid}) duplicate map id {id}")]
    DuplicateMapId { gid: u16, id: u16 },

    /// Group id used twice
    #[error("Duplicate group gid {gid}")]
    DuplicateGroupId { gid: u16 },
}

/// Play log (`play_log.txt`) errors
#[derive(Error, Debug)]
pub enum PlayLogError {
    /// Reading or appending failed
    #[error("IO error for '{path}': {error}")]
    Io { path: PathBuf, error: String },

    /// Line has no map id at all
    #[error("Error parsing the log at line {line}, could not find map id: '{text}'")]
    MissingMapId { line: usize, text: String },

    /// Line has digits that don't fit a map id
    #[error("Error parsing the log at line {line}, could not parse map id: '{text}'")]
    InvalidMapId { line: usize, text: String },

    /// Map id not in the catalog
    #[error("Error parsing the log at line {line}, could not find map with id {id}")]
    UnknownMap { line: usize, id: u16 },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Rotation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RotationError {
    /// Nothing in the catalog can be played
    #[error("No maps available for mode {mode} with {players} players")]
    NoCandidates { mode: Mode, players: u16 },
}

/// Interactive input errors
///
/// These are shown to the user before re-prompting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Numeric choice outside of the listed maps
    #[error("map selection {selection} out of range 1..{count}")]
    SelectionOutOfRange { selection: usize, count: usize },

    /// Player count outside of the lobby limits
    #[error("players must be between {min} and {max}")]
    PlayersOutOfRange { min: u16, max: u16 },

    /// Anything else
    #[error("bad response")]
    BadResponse,
}

/// Top-level mode_rotation error type
#[derive(Error, Debug)]
pub enum RotationAppError {
    /// Catalog error
    #[error("Map file error: {0}")]
    Catalog(#[from] CatalogError),

    /// Play log error
    #[error("Play log error: {0}")]
    PlayLog(#[from] PlayLogError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),

    /// Rotation error
    #[error("Rotation error: {0}")]
    Rotation(#[from] RotationError),
}
