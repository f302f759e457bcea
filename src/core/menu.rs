//! Interactive menu responses
//!
//! Pure parsing of what the host typed at each prompt. The prompt loop
//! lives in [`crate::cli::commands::play`].

use crate::core::mode::Mode;
use crate::core::rotation::validate_players;
use crate::error::InputError;

/// Action picked from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Zero-based index into the listed choices
    SelectMap(usize),
    ChangeMode,
    SetPlayers,
    Percentages,
    AllMaps,
    Shuffle,
    Quit,
}

/// Letter options of the main menu, in display order
pub const MENU_OPTIONS: &[(char, &str)] = &[
    ('m', "Change Mode"),
    ('p', "Set Players"),
    ('%', "Show Map Percents"),
    ('a', "Choose From All Maps"),
    ('s', "Shuffle"),
    ('q', "Quit"),
];

/// Parse a main-menu response given how many maps are listed
pub fn parse_menu_action(response: &str, map_count: usize) -> Result<MenuAction, InputError> {
    let response = response.trim();

    if let Ok(n) = response.parse::<usize>() {
        return if (1..=map_count).contains(&n) {
            Ok(MenuAction::SelectMap(n - 1))
        } else {
            Err(InputError::SelectionOutOfRange {
                selection: n,
                count: map_count,
            })
        };
    }

    match response {
        "m" => Ok(MenuAction::ChangeMode),
        "p" => Ok(MenuAction::SetPlayers),
        "%" => Ok(MenuAction::Percentages),
        "a" => Ok(MenuAction::AllMaps),
        "s" => Ok(MenuAction::Shuffle),
        "q" => Ok(MenuAction::Quit),
        _ => Err(InputError::BadResponse),
    }
}

/// Parse a mode-menu response
///
/// Accepts the 1-based position in [`Mode::ALL`] or a mode name. `c` cancels
/// and yields `None`.
pub fn parse_mode_choice(response: &str) -> Result<Option<Mode>, InputError> {
    let response = response.trim();
    if response == "c" {
        return Ok(None);
    }

    if let Ok(n) = response.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|idx| Mode::ALL.get(idx))
            .map(|mode| Some(*mode))
            .ok_or(InputError::BadResponse);
    }

    response
        .parse::<Mode>()
        .map(Some)
        .map_err(|_| InputError::BadResponse)
}

/// Parse a player-count response
pub fn parse_player_count(response: &str) -> Result<u16, InputError> {
    response
        .trim()
        .parse::<u16>()
        .map_err(|_| InputError::PlayersOutOfRange {
            min: crate::core::rotation::MIN_PLAYERS,
            max: crate::core::rotation::MAX_PLAYERS,
        })
        .and_then(validate_players)
}
