//! CLI implementation for `mode_rotation play`
//!
//! Runs the interactive rotation: offers a short-list for the current mode,
//! records the host's pick in the play log and moves on to the next mode.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use rand::Rng;

use crate::cli::commands::AppContext;
use crate::cli::output::{
    choice_key, create_spinner, is_quiet, percent, print_success, print_warning, styled_mode,
};
use crate::core::catalog::Map;
use crate::core::menu::{
    parse_menu_action, parse_mode_choice, parse_player_count, MenuAction, MENU_OPTIONS,
};
use crate::core::mode::Mode;
use crate::core::rotation::{validate_players, Rotation};
use crate::core::scoring::ScoredMap;
use crate::infra::{filesystem, play_log};

/// Execute the play command
pub fn execute(ctx: &AppContext, players: Option<u16>) -> Result<()> {
    let catalog = filesystem::load_catalog(&ctx.maps_path)
        .with_context(|| format!("Failed to load maps from {}", ctx.maps_path.display()))?;
    if !is_quiet() {
        println!("Loaded {} maps", catalog.len());
    }

    let history = play_log::load(&ctx.log_path, &catalog)
        .with_context(|| format!("Failed to load play log from {}", ctx.log_path.display()))?;
    if !is_quiet() {
        println!("Loaded Log with {} entries", history.len());
    }

    let players = validate_players(players.unwrap_or(ctx.players))?;
    let mut rotation = Rotation::new(&catalog, &history)
        .with_players(players)
        .with_choices(ctx.choices);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut rng = rand::thread_rng();
    let mut recorded = 0usize;

    run_session(
        &mut rotation,
        &mut stdin.lock(),
        &mut stdout.lock(),
        &mut rng,
        |map| {
            play_log::append(&ctx.log_path, map)?;
            recorded += 1;
            Ok(())
        },
    )?;

    if recorded > 0 {
        print_success(&format!(
            "Recorded {recorded} map(s) in {}",
            ctx.log_path.display()
        ));
    }

    Ok(())
}

/// Drive the interactive menu until the host quits or input ends
///
/// `on_select` is called with every picked map before it is recorded.
pub fn run_session<'a, R, W, G, F>(
    rotation: &mut Rotation<'a>,
    input: &mut R,
    out: &mut W,
    rng: &mut G,
    mut on_select: F,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
    F: FnMut(&Map) -> Result<()>,
{
    let mut show_all_maps = false;

    loop {
        let choices = if show_all_maps {
            show_all_maps = false;
            rotation.all_choices()
        } else {
            let spinner = create_spinner("Selecting options");
            let choices = rotation.choices(rng);
            spinner.finish_and_clear();
            choices
        };

        let choices: Vec<ScoredMap<'a>> = choices.unwrap_or_else(|e| {
            print_warning(&e.to_string());
            Vec::new()
        });

        print_map_choices(out, rotation.mode(), rotation.players(), &choices)?;

        let Some(action) = read_until_valid(input, out, |r| parse_menu_action(r, choices.len()))?
        else {
            return Ok(());
        };

        match action {
            MenuAction::SelectMap(idx) => {
                let map = choices[idx].map;
                on_select(map)?;
                rotation.record(map);
                writeln!(out, "{} Selected. Have Fun!", map_info(map))?;
                writeln!(out)?;
            }
            MenuAction::ChangeMode => {
                if let Some(Some(mode)) = prompt_for_mode(input, out)? {
                    rotation.set_mode(mode);
                }
            }
            MenuAction::SetPlayers => {
                write!(out, "How many players?\n> ")?;
                out.flush()?;
                match read_until_valid(input, out, parse_player_count)? {
                    Some(players) => rotation.set_players(players)?,
                    None => return Ok(()),
                }
            }
            MenuAction::Percentages => {
                if let Some(Some(mode)) = prompt_for_mode(input, out)? {
                    print_percentages(out, mode, &rotation.percentages(mode))?;
                }
            }
            MenuAction::AllMaps => show_all_maps = true,
            MenuAction::Shuffle => {}
            MenuAction::Quit => return Ok(()),
        }
    }
}

fn map_info(map: &Map) -> String {
    format!("{} {} ({})", map.nickname, styled_mode(map.mode), map.players)
}

fn print_map_choices<W: Write>(
    out: &mut W,
    mode: Mode,
    players: u16,
    choices: &[ScoredMap<'_>],
) -> io::Result<()> {
    let width = if choices.len() > 9 { 2 } else { 1 };

    writeln!(out)?;
    writeln!(out, "Mode {} for {} players", styled_mode(mode), players)?;
    for (idx, choice) in choices.iter().enumerate() {
        writeln!(
            out,
            " ({}) {} ({}) {}",
            choice_key(format!("{:>width$}", idx + 1)),
            choice.map.nickname,
            choice.map.players,
            percent(choice.share)
        )?;
    }

    let pad = " ".repeat(width - 1);
    for (key, label) in MENU_OPTIONS {
        writeln!(out, " ({pad}{}) {label}", choice_key(key))?;
    }
    write!(out, "> ")?;
    out.flush()
}

/// Ask for a mode; `Ok(None)` when input ended, `Ok(Some(None))` when cancelled
fn prompt_for_mode<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<Option<Mode>>> {
    writeln!(out, "Select Mode:")?;
    for (idx, mode) in Mode::ALL.iter().enumerate() {
        writeln!(out, " ({}) {}", choice_key(idx + 1), styled_mode(*mode))?;
    }
    writeln!(out, " ({}) Cancel", choice_key('c'))?;
    write!(out, "> ")?;
    out.flush()?;

    read_until_valid(input, out, parse_mode_choice)
}

fn print_percentages<W: Write>(out: &mut W, mode: Mode, scores: &[ScoredMap<'_>]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "All maps for {}", styled_mode(mode))?;
    for scored in scores {
        writeln!(
            out,
            "  {} ({}) {}",
            scored.map.nickname,
            scored.map.players,
            percent(scored.share)
        )?;
    }
    writeln!(out)
}

/// Read lines until `parse` accepts one; `None` at end of input
fn read_until_valid<R, W, T, E, P>(input: &mut R, out: &mut W, parse: P) -> Result<Option<T>>
where
    R: BufRead,
    W: Write,
    E: std::fmt::Display,
    P: Fn(&str) -> Result<T, E>,
{
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            tracing::debug!("Input closed");
            return Ok(None);
        }

        match parse(line.trim()) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => {
                write!(out, "{err}\n> ")?;
                out.flush()?;
            }
        }
    }
}
