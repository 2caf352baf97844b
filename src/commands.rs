use std::fmt::Display;

use combine::error::ParseError;
use combine::parser::char::{digit, letter, space, spaces};
use combine::{
    attempt, eof, many1, optional, skip_many1,
    stream::position,
    EasyParser, Parser, Stream,
};

/// Commands accepted by the home screen, one per button plus navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HomeCommand {
    Add,
    Complete,
    ShowIncomplete,
    ShowAll,
    /// Zero-based row of the list view.
    Select(usize),
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum CommandParseError {
    UnknownCommand(String),
    InvalidArgument(Vec<String>),
    Syntax(String),
}

impl Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandParseError::UnknownCommand(c) => write!(f, "Unknown command '{c}'"),
            CommandParseError::InvalidArgument(args) => {
                write!(f, "Invalid argument: {}", args.join(" "))
            }
            CommandParseError::Syntax(e) => write!(f, "Could not parse command: {e}"),
        }
    }
}

/// A command word optionally followed by a number.
fn command<Input>() -> impl Parser<Input, Output = (String, Option<String>)>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    let word = many1::<String, _, _>(letter());
    let number = attempt(skip_many1(space()).with(many1::<String, _, _>(digit())));

    (spaces().silent(), word, optional(number), spaces().silent(), eof())
        .map(|(_, word, arg, _, _)| (word, arg))
}

/// Parses one line from the command editor. Blank lines yield `Ok(None)`.
pub(crate) fn parse_home_command(
    input: &str,
) -> Result<Option<HomeCommand>, CommandParseError> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    let ((word, arg), _) = command()
        .easy_parse(position::Stream::new(input))
        .map_err(|e| CommandParseError::Syntax(e.to_string()))?;

    let word = word.to_ascii_lowercase();
    let cmd = match (word.as_str(), arg) {
        ("add" | "a", None) => HomeCommand::Add,
        ("complete" | "done" | "c", None) => HomeCommand::Complete,
        ("incomplete" | "i", None) => HomeCommand::ShowIncomplete,
        ("all" | "ls", None) => HomeCommand::ShowAll,
        ("quit" | "q", None) => HomeCommand::Quit,
        ("select" | "s", Some(row)) => match row.parse::<usize>() {
            // Rows are shown to the user starting at 1.
            Ok(n) if n > 0 => HomeCommand::Select(n - 1),
            _ => return Err(CommandParseError::InvalidArgument(vec![word.clone(), row])),
        },
        ("select" | "s", None) => {
            return Err(CommandParseError::InvalidArgument(vec![word.clone()]));
        }
        (
            "add" | "a" | "complete" | "done" | "c" | "incomplete" | "i" | "all" | "ls"
            | "quit" | "q",
            Some(arg),
        ) => return Err(CommandParseError::InvalidArgument(vec![word.clone(), arg])),
        _ => return Err(CommandParseError::UnknownCommand(word.clone())),
    };
    Ok(Some(cmd))
}
