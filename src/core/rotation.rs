//! Rotation session state
//!
//! Tracks the mode that is up next, the current lobby size and every map
//! played so far. Recording a play advances the rotation to the next mode.

use rand::Rng;

use crate::core::catalog::{Map, MapCatalog};
use crate::core::mode::Mode;
use crate::core::scoring::{ScoreTracker, ScoredMap};
use crate::core::selection::{pick_choices, DEFAULT_CHOICES};
use crate::error::{InputError, RotationError};

/// Smallest lobby the rotation accepts
pub const MIN_PLAYERS: u16 = 8;

/// Largest lobby the rotation accepts
pub const MAX_PLAYERS: u16 = 16;

/// Lobby size at startup
pub const DEFAULT_PLAYERS: u16 = 16;

/// Validate a lobby size
pub fn validate_players(players: u16) -> Result<u16, InputError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
        Ok(players)
    } else {
        Err(InputError::PlayersOutOfRange {
            min: MIN_PLAYERS,
            max: MAX_PLAYERS,
        })
    }
}

/// Live state of a rotation
#[derive(Debug, Clone)]
pub struct Rotation<'a> {
    tracker: ScoreTracker<'a>,
    mode: Mode,
    players: u16,
    choices: usize,
}

impl<'a> Rotation<'a> {
    /// Resume a rotation from previously played maps
    ///
    /// The first mode is the one after the last played map's mode, or TD when
    /// nothing has been played.
    #[must_use]
    pub fn new(catalog: &'a MapCatalog, history: &[&'a Map]) -> Self {
        let mode = history.last().map_or(Mode::TD, |m| m.mode.next());
        let tracker = ScoreTracker::from_history(catalog, history);

        Self {
            tracker,
            mode,
            players: DEFAULT_PLAYERS,
            choices: DEFAULT_CHOICES,
        }
    }

    /// Set the lobby size
    #[must_use]
    pub fn with_players(mut self, players: u16) -> Self {
        self.players = players;
        self
    }

    /// Set how many maps are offered per round
    #[must_use]
    pub fn with_choices(mut self, choices: usize) -> Self {
        self.choices = choices.max(1);
        self
    }

    /// Mode that is up next
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch the mode without recording a play
    pub fn set_mode(&mut self, mode: Mode) {
        tracing::info!("Mode changed from {} to {}", self.mode, mode);
        self.mode = mode;
    }

    /// Current lobby size
    #[must_use]
    pub fn players(&self) -> u16 {
        self.players
    }

    /// Change the lobby size
    pub fn set_players(&mut self, players: u16) -> Result<(), InputError> {
        self.players = validate_players(players)?;
        tracing::info!("Player count set to {}", self.players);
        Ok(())
    }

    /// Draw the short-list for the current mode and lobby size
    pub fn choices<R>(&self, rng: &mut R) -> Result<Vec<ScoredMap<'a>>, RotationError>
    where
        R: Rng + ?Sized,
    {
        let scores = self.all_choices()?;
        Ok(pick_choices(&scores, self.choices, rng))
    }

    /// Every candidate for the current mode and lobby size, highest share first
    pub fn all_choices(&self) -> Result<Vec<ScoredMap<'a>>, RotationError> {
        let scores = self.tracker.scores(self.mode, self.players);
        if scores.is_empty() {
            return Err(RotationError::NoCandidates {
                mode: self.mode,
                players: self.players,
            });
        }
        Ok(scores)
    }

    /// Every map of `mode` regardless of lobby size, highest share first
    #[must_use]
    pub fn percentages(&self, mode: Mode) -> Vec<ScoredMap<'a>> {
        self.shares(mode, 0)
    }

    /// Every map of `mode` that fits `players`, highest share first
    #[must_use]
    pub fn shares(&self, mode: Mode, players: u16) -> Vec<ScoredMap<'a>> {
        self.tracker.scores(mode, players)
    }

    /// Record a played map and advance to the next mode
    pub fn record(&mut self, map: &'a Map) {
        self.tracker.record(map);
        self.mode = self.mode.next();
        tracing::debug!("Recorded {}, next mode {}", map.info(), self.mode);
    }
}
