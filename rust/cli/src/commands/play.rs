//! # Play Command
//!
//! Interactive Klondike session on the console.
//!
//! Each input line is parsed into a command descriptor. Lines that do not
//! parse are reported on the error stream with their status and the table
//! is left alone. Accepted commands run against the engine, which redraws
//! the table and checks for a win after every change.
//!
//! The session ends when the game is won, the player types `QUIT`, or the
//! input runs out.

use crate::error::CliError;
use crate::formatters::format_card;
use crate::io_utils::read_stdin_line;
use crate::klondike;
use crate::render::render_table;
use crate::ui;
use patience_engine::command::{CommandDescriptor, CommandId, CommandStatus, PILE_CODES, parse};
use patience_engine::engine::{Action, Engine};
use patience_engine::errors::GameError;
use patience_engine::game::GameState;
use patience_engine::pile::{PileRef, PileType};
use std::io::{BufRead, Write};
use tracing::{debug, info};

const KEY: &[(&str, &str)] = &[
    ("MOVE <from> <to>", "move one card, if the move is allowed"),
    ("FORCE <from> <to>", "move one card without checking"),
    ("FLIP <pile>", "turn the top card of a pile face up"),
    ("UNDO", "take back the last move or flip"),
    ("REDO", "replay the last move taken back"),
    ("CLEAR", "redraw the table"),
    ("KEY, HELP", "show this key"),
    ("QUIT", "give up the game"),
];

/// Handle the play command: one interactive game of Klondike.
///
/// # Arguments
///
/// * `seed` - Shuffle seed; `None` picks a time-based one
/// * `out` - Output stream for the table and replies
/// * `err` - Error stream for rejected commands and failed moves
/// * `stdin` - Input stream of player commands
///
/// # Returns
///
/// * `Ok(())` once the game is finished or the input is exhausted
/// * `Err(CliError)` if dealing fails, the input cannot be read, or the
///   output streams cannot be written
pub fn handle_play_command(
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let mut engine = klondike::new_game(seed)?;
    info!(seed = engine.seed(), "game started");
    writeln!(out, "Klondike, seed {}", engine.seed())?;
    writeln!(out, "Type KEY for the list of commands.")?;
    draw(&engine, out)?;

    while !engine.is_finished() {
        ui::write_prompt(out)?;
        let Some(line) = read_stdin_line(stdin)? else {
            debug!("input exhausted");
            break;
        };
        if line.is_empty() {
            continue;
        }

        let parsed = parse(&line);
        let status = parsed.status_for_arity();
        if !status.is_ok() {
            debug!(%line, %status, "command rejected");
            ui::write_status(err, status)?;
            continue;
        }
        execute(&mut engine, &parsed.descriptor, out, err)?;
    }

    write_summary(&engine, out)
}

/// Runs one accepted command.
fn execute(
    engine: &mut Engine,
    descriptor: &CommandDescriptor,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let Some(command) = descriptor.command else {
        ui::write_status(err, CommandStatus::BadCommand)?;
        return Ok(());
    };
    if matches!(command, CommandId::Move | CommandId::Flip) {
        let verdict = engine.validate(descriptor);
        if !verdict.is_ok() {
            ui::write_status(err, verdict)?;
            return Ok(());
        }
    }

    let changed = match (command, descriptor.src(), descriptor.dst()) {
        (CommandId::Clear, _, _) => {
            draw(engine, out)?;
            false
        }
        (CommandId::Key, _, _) => {
            write_key(out)?;
            false
        }
        (CommandId::Move | CommandId::Force, Some(src), Some(dst)) => {
            report(engine.move_card(src, dst), err)?
        }
        (CommandId::Flip, Some(pile), _) => {
            let flipped = engine.flip_top_card(pile);
            if let Some(card) = flipped.as_ref().ok().and_then(|&id| engine.table().card(id)) {
                writeln!(out, "Turned up {}", format_card(card))?;
            }
            report(flipped, err)?
        }
        (CommandId::Undo, _, _) => {
            let undone = engine.undo();
            if let Ok(action) = &undone {
                writeln!(out, "Undid {}", describe(*action))?;
            }
            report(undone, err)?
        }
        (CommandId::Redo, _, _) => {
            let redone = engine.redo();
            if let Ok(action) = &redone {
                writeln!(out, "Redid {}", describe(*action))?;
            }
            report(redone, err)?
        }
        (CommandId::Quit, _, _) => {
            engine.resign();
            false
        }
        (CommandId::Move | CommandId::Force | CommandId::Flip, _, _) => {
            ui::write_status(err, CommandStatus::MissingArguments)?;
            false
        }
    };

    if changed {
        engine.check_for_win();
        draw(engine, out)?;
    }
    Ok(())
}

/// Prints a failed engine call; returns whether the table changed.
fn report<T>(result: Result<T, GameError>, err: &mut dyn Write) -> Result<bool, CliError> {
    match result {
        Ok(_) => Ok(true),
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            Ok(false)
        }
    }
}

fn describe(action: Action) -> String {
    match action {
        Action::Move { src, dst, count } => {
            let cards = if count == 1 { "card" } else { "cards" };
            format!("move of {} {} from {} to {}", count, cards, src, dst)
        }
        Action::Flip { pile, .. } => format!("flip on {}", pile),
    }
}

fn draw(engine: &Engine, out: &mut dyn Write) -> Result<(), CliError> {
    write!(out, "{}", render_table(engine.table()))?;
    Ok(())
}

fn write_key(out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "Commands:")?;
    for (usage, what) in KEY {
        writeln!(out, "  {:<18} {}", usage, what)?;
    }
    let piles: Vec<String> = PILE_CODES
        .iter()
        .map(|(code, kind)| format!("{} {}", code, kind))
        .collect();
    writeln!(out, "Piles: {}", piles.join(", "))?;
    writeln!(
        out,
        "Add a number for piles after the first, e.g. {} or {}.",
        PileRef::new(PileType::Tableau, 3),
        PileRef::new(PileType::Foundation, 0),
    )?;
    Ok(())
}

fn write_summary(engine: &Engine, out: &mut dyn Write) -> Result<(), CliError> {
    match engine.state() {
        GameState::Won => writeln!(out, "You won!")?,
        GameState::Over => writeln!(out, "Game abandoned.")?,
        GameState::InProgress | GameState::Error => writeln!(out, "Game left unfinished.")?,
    }
    writeln!(out, "Seed: {}", engine.seed())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(script: &str) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(script.to_string());
        handle_play_command(Some(42), &mut out, &mut err, &mut input).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn quit_ends_the_session() {
        let (out, err) = play("quit\nkey\n");
        assert!(out.contains("Game abandoned."));
        assert!(out.ends_with("Seed: 42\n"));
        // nothing after QUIT is read
        assert!(!out.contains("Commands:"));
        assert!(err.is_empty());
    }

    #[test]
    fn eof_leaves_the_game_unfinished() {
        let (out, _) = play("");
        assert!(out.starts_with("Klondike, seed 42\n"));
        assert!(out.contains("Game left unfinished."));
    }

    #[test]
    fn key_lists_commands_and_piles() {
        let (out, _) = play("HELP\n");
        assert!(out.contains("Commands:"));
        assert!(out.contains("FORCE <from> <to>"));
        assert!(out.contains("T tableau"));
        assert!(out.contains("e.g. T3 or F0"));
    }

    #[test]
    fn parse_failures_are_reported_with_status() {
        let (_, err) = play("jump\nmove x s\nmove d s t0\nmove d\n");
        let lines: Vec<&str> = err.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Error: Bad command",
                "Error: Bad argument 1",
                "Error: Too many arguments",
                "Error: Missing arguments",
            ]
        );
    }

    #[test]
    fn rejected_move_is_a_bad_move() {
        let (_, err) = play("move s t0\nmove t0 t0\n");
        assert_eq!(err, "Error: Bad move\nError: Bad move\n");
    }

    #[test]
    fn force_skips_the_policy_but_not_the_engine() {
        let (_, err) = play("force s t0\n");
        assert_eq!(err, "Error: Empty pile\n");
    }

    #[test]
    fn move_then_undo_and_redo() {
        let (out, err) = play("move d s\nundo\nredo\nundo\nundo\n");
        assert!(out.contains("Undid move of 1 card from D0 to S0"));
        assert!(out.contains("Redid move of 1 card from D0 to S0"));
        assert_eq!(err, "Error: nothing to undo\n");
    }

    #[test]
    fn flip_needs_a_face_down_top_card() {
        let (out, err) = play("flip t3\nmove d s\nflip s\nundo\nflip c\n");
        assert_eq!(err, "Error: top card of T3 is already face up\nError: Bad move\n");
        assert!(out.contains("Undid flip on S0"));
    }

    #[test]
    fn flip_names_the_card_turned_up() {
        let mut engine = klondike::new_game(Some(42)).unwrap();
        let s0 = PileRef::new(PileType::Discard, 0);
        engine.move_card(PileRef::new(PileType::Stock, 0), s0).unwrap();
        let id = engine.flip_top_card(s0).unwrap();
        let expected = format_card(engine.table().card(id).unwrap());

        let (out, err) = play("move d s\nflip s\n");
        assert!(err.is_empty());
        assert!(out.contains(&format!("Turned up {}\n", expected)));
    }
}
