//! Game modes and the rotation cycle
//!
//! Modes are ordered the way the lobby cycles through them. The ordering is
//! also used for menu numbering and report ordering.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// A game mode a map can be played in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mode {
    /// Team deathmatch
    TD,
    /// Deathmatch
    DM,
    Chaser,
    /// Battle royale
    BR,
    Captain,
    Siege,
}

/// Unknown mode name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown mode name '{0}'")]
pub struct UnknownMode(pub String);

impl Mode {
    /// All modes in rotation order
    pub const ALL: [Mode; 6] = [
        Mode::TD,
        Mode::DM,
        Mode::Chaser,
        Mode::BR,
        Mode::Captain,
        Mode::Siege,
    ];

    /// The mode that follows this one in the rotation
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Mode::TD => Mode::DM,
            Mode::DM => Mode::Chaser,
            Mode::Chaser => Mode::BR,
            Mode::BR => Mode::Captain,
            Mode::Captain => Mode::Siege,
            Mode::Siege => Mode::TD,
        }
    }

    /// Display name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Mode::TD => "TD",
            Mode::DM => "DM",
            Mode::Chaser => "Chaser",
            Mode::BR => "BR",
            Mode::Captain => "Captain",
            Mode::Siege => "Siege",
        }
    }

    /// How much a play of a sibling variant in `other` mode counts against
    /// this mode.
    ///
    /// Symmetric. Siege and Chaser have very few maps, so playing one of
    /// their siblings barely penalizes the others.
    #[must_use]
    pub fn discount(self, other: Self) -> f64 {
        let lo = self.min(other);
        let hi = self.max(other);

        match (lo, hi) {
            (Mode::Siege, Mode::Siege) | (Mode::Chaser, Mode::Chaser) => 1.0,
            (_, Mode::Siege) | (Mode::Chaser, _) | (_, Mode::Chaser) => 0.1,

            (Mode::TD, Mode::DM) => 0.6,
            (Mode::TD, Mode::BR | Mode::Captain) => 0.5,
            (Mode::DM, Mode::BR) => 0.9,
            (Mode::DM, Mode::Captain) => 0.8,
            (Mode::BR, Mode::Captain) => 0.7,

            _ => 1.0,
        }
    }
}

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "td" => Ok(Mode::TD),
            "dm" => Ok(Mode::DM),
            "chaser" => Ok(Mode::Chaser),
            "br" => Ok(Mode::BR),
            "captain" => Ok(Mode::Captain),
            "siege" => Ok(Mode::Siege),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
