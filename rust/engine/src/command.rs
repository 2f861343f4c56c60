//! Turns one line of operator text into a [`CommandDescriptor`].
//!
//! Grammar: `<command> [<arg1>] [<arg2>]`, case-insensitive, words separated
//! by spaces or commas. An argument is a pile letter followed by an optional
//! decimal index (`T1`, `F3`, `D`); a missing index means `0`.
//!
//! Every parse yields a fully populated descriptor plus one [`CommandStatus`]
//! naming the first category of failure, ranked
//! bad command > missing/bad argument > too many arguments.
//! Once a field fails, every later argument slot is forced invalid.
//!
//! ```
//! use patience_engine::command::{parse, CommandId, CommandStatus};
//! use patience_engine::pile::{PileRef, PileType};
//!
//! let parsed = parse("move t1 f3");
//! assert_eq!(parsed.status, CommandStatus::Ok);
//! assert_eq!(parsed.descriptor.command, Some(CommandId::Move));
//! assert_eq!(parsed.descriptor.args[1], Some(PileRef::new(PileType::Foundation, 3)));
//! ```

use std::fmt;

use crate::pile::{PileRef, PileType};

/// Argument slots in every descriptor, whatever the command.
pub const ARG_SLOTS: usize = 2;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CommandId {
    Clear,
    /// Show the command key (`KEY` or `HELP`)
    Key,
    Move,
    Flip,
    Quit,
    Undo,
    Redo,
    /// Move without consulting the validation policy
    Force,
}

impl CommandId {
    /// Pile references the command actually uses.
    pub fn arity(self) -> usize {
        match self {
            CommandId::Move | CommandId::Force => 2,
            CommandId::Flip => 1,
            CommandId::Clear
            | CommandId::Key
            | CommandId::Quit
            | CommandId::Undo
            | CommandId::Redo => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CommandId::Clear => "CLEAR",
            CommandId::Key => "KEY",
            CommandId::Move => "MOVE",
            CommandId::Flip => "FLIP",
            CommandId::Quit => "QUIT",
            CommandId::Undo => "UNDO",
            CommandId::Redo => "REDO",
            CommandId::Force => "FORCE",
        }
    }
}

const COMMANDS: &[(&str, CommandId)] = &[
    ("CLEAR", CommandId::Clear),
    ("KEY", CommandId::Key),
    ("HELP", CommandId::Key),
    ("MOVE", CommandId::Move),
    ("FLIP", CommandId::Flip),
    ("QUIT", CommandId::Quit),
    ("UNDO", CommandId::Undo),
    ("REDO", CommandId::Redo),
    ("FORCE", CommandId::Force),
];

pub const PILE_CODES: &[(char, PileType)] = &[
    ('D', PileType::Stock),
    ('S', PileType::Discard),
    ('W', PileType::Waste),
    ('F', PileType::Foundation),
    ('C', PileType::Cell),
    ('T', PileType::Tableau),
];

/// Letter used for `kind` in the command grammar.
pub fn pile_code(kind: PileType) -> char {
    PILE_CODES
        .iter()
        .find(|(_, k)| *k == kind)
        .map(|(c, _)| *c)
        .unwrap_or('?')
}

/// Parse-time outcome. Never carries move-time failures; those are
/// [`crate::errors::GameError`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CommandStatus {
    Ok,
    BadCommand,
    /// Zero-based slot of the first malformed argument
    BadArgument { slot: usize },
    MissingArguments,
    TooManyArguments,
    /// Rejected by the host's validation policy
    BadMove,
    Error,
}

impl CommandStatus {
    pub fn is_ok(self) -> bool {
        self == CommandStatus::Ok
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandStatus::Ok => write!(f, "OK"),
            CommandStatus::BadCommand => write!(f, "Bad command"),
            CommandStatus::BadArgument { slot } => write!(f, "Bad argument {}", slot + 1),
            CommandStatus::MissingArguments => write!(f, "Missing arguments"),
            CommandStatus::TooManyArguments => write!(f, "Too many arguments"),
            CommandStatus::BadMove => write!(f, "Bad move"),
            CommandStatus::Error => write!(f, "Internal error"),
        }
    }
}

/// Structured form of one input line. `None` marks an invalid or unset field.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct CommandDescriptor {
    pub command: Option<CommandId>,
    pub args: [Option<PileRef>; ARG_SLOTS],
}

impl CommandDescriptor {
    /// Leading slots that hold a pile reference.
    pub fn filled_args(&self) -> usize {
        self.args.iter().take_while(|a| a.is_some()).count()
    }

    pub fn src(&self) -> Option<PileRef> {
        self.args[0]
    }

    pub fn dst(&self) -> Option<PileRef> {
        self.args[1]
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ParsedCommand {
    pub descriptor: CommandDescriptor,
    pub status: CommandStatus,
}

impl ParsedCommand {
    /// Accepts a short argument list when the command needs fewer slots than
    /// the descriptor carries.
    pub fn status_for_arity(&self) -> CommandStatus {
        match (self.status, self.descriptor.command) {
            (CommandStatus::MissingArguments, Some(cmd))
                if self.descriptor.filled_args() >= cmd.arity() =>
            {
                CommandStatus::Ok
            }
            (status, _) => status,
        }
    }
}

/// Splits on whitespace and commas, dropping empty words.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|w| !w.is_empty())
        .collect()
}

pub fn parse_command_id(word: &str) -> Option<CommandId> {
    COMMANDS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(word))
        .map(|(_, id)| *id)
}

/// Parses `<letter>[index]`; `None` for an unknown letter or a remainder
/// that is not a plain decimal number.
pub fn parse_pile_ref(word: &str) -> Option<PileRef> {
    let mut chars = word.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    let kind = PILE_CODES
        .iter()
        .find(|(c, _)| *c == letter)
        .map(|(_, k)| *k)?;
    let rest = chars.as_str();
    let index = if rest.is_empty() {
        0
    } else if rest.bytes().all(|b| b.is_ascii_digit()) {
        rest.parse().ok()?
    } else {
        return None;
    };
    Some(PileRef::new(kind, index))
}

pub fn parse(line: &str) -> ParsedCommand {
    let words = tokenize(line);
    let mut descriptor = CommandDescriptor::default();

    let Some(first) = words.first() else {
        return ParsedCommand {
            descriptor,
            status: CommandStatus::BadCommand,
        };
    };

    let mut status = CommandStatus::Ok;
    descriptor.command = parse_command_id(first);
    if descriptor.command.is_none() {
        status = CommandStatus::BadCommand;
    }

    for slot in 0..ARG_SLOTS {
        if !status.is_ok() {
            descriptor.args[slot] = None;
            continue;
        }
        match words.get(slot + 1) {
            None => status = CommandStatus::MissingArguments,
            Some(word) => match parse_pile_ref(word) {
                Some(r) => descriptor.args[slot] = Some(r),
                None => status = CommandStatus::BadArgument { slot },
            },
        }
    }

    if status.is_ok() && words.len() > ARG_SLOTS + 1 {
        status = CommandStatus::TooManyArguments;
    }

    ParsedCommand { descriptor, status }
}

impl fmt::Display for PileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", pile_code(self.kind), self.index)
    }
}
