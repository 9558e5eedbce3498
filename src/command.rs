use ufmt_macros::uDebug;
use winnow::combinator::{alt, eof, terminated};
use winnow::token::{one_of, take_while};
use winnow::{Parser, Result};

use crate::SideSelection;

/// Operator commands.
#[derive(Debug, uDebug, PartialEq, Clone, Copy)]
pub enum Command {
    /// `H`: Home the X then Y axes.
    Home,
    /// `S`: Start a paint cycle.
    Start,
    /// `E`: Emergency stop.
    EmergencyStop,
    /// `R`: Reset after an emergency stop.
    Reset,
    /// Two or more characters: choose which sides to paint.
    SelectSides(SideSelection),
}
impl Command {
    /// Parses one line of operator input.
    ///
    /// Surrounding whitespace is ignored. Single-character commands are
    /// case-insensitive. Any longer line is a side selection, in which only
    /// the digits `1` to `4` are significant.
    pub fn parse(line: &str) -> core::result::Result<Command, Error> {
        alt((Self::parse_single, Self::parse_selection))
            .parse(line.trim())
            .map_err(|_| Error::Unrecognized)
    }

    fn parse_single(input: &mut &str) -> Result<Command> {
        terminated(
            alt((
                one_of(['H', 'h']).value(Command::Home),
                one_of(['S', 's']).value(Command::Start),
                one_of(['E', 'e']).value(Command::EmergencyStop),
                one_of(['R', 'r']).value(Command::Reset),
            )),
            eof,
        )
        .parse_next(input)
    }

    fn parse_selection(input: &mut &str) -> Result<Command> {
        take_while(2.., |_: char| true)
            .map(|text: &str| {
                Command::SelectSides(SideSelection::from_digits(text))
            })
            .parse_next(input)
    }
}

/// Input that is not a command.
#[derive(Debug, PartialEq)]
pub enum Error {
    Unrecognized,
}
