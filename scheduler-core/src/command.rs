//! Tokenizing of the line-oriented command language.
//!
//! ```text
//! A  <date> <timeslot> <location> <department> <email> <duration>
//! R  <date> <timeslot> <location>
//! P | PE | PC | PD | Q
//! ```

use crate::{Error, Result};

pub const CMD_ADD: &str = "A";
pub const CMD_CANCEL: &str = "R";
pub const CMD_PRINT: &str = "P";
pub const CMD_PRINT_BY_DATE: &str = "PE";
pub const CMD_PRINT_BY_CAMPUS: &str = "PC";
pub const CMD_PRINT_BY_DEPARTMENT: &str = "PD";
pub const CMD_QUIT: &str = "Q";

/// Raw fields of an `A` command, validated later by the organizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddArgs {
    pub date: String,
    pub timeslot: String,
    pub location: String,
    pub department: String,
    pub email: String,
    pub duration: String,
}

/// Raw fields of an `R` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelArgs {
    pub date: String,
    pub timeslot: String,
    pub location: String,
}

/// One input line, recognised but not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddArgs),
    Cancel(CancelArgs),
    Print,
    PrintByDate,
    PrintByCampus,
    PrintByDepartment,
    Quit,
    /// Blank line; ignored
    Empty,
    /// Anything else, carrying the offending token
    Unknown(String),
}

impl Command {
    /// Splits `line` on whitespace and recognises the leading token.
    ///
    /// Command tokens are case-sensitive. Extra trailing tokens are ignored.
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(Self::Empty);
        };

        let command = match name {
            CMD_ADD => {
                let [date, timeslot, location, department, email, duration] =
                    take_fields(&mut tokens, CMD_ADD)?;
                Self::Add(AddArgs {
                    date,
                    timeslot,
                    location,
                    department,
                    email,
                    duration,
                })
            }
            CMD_CANCEL => {
                let [date, timeslot, location] = take_fields(&mut tokens, CMD_CANCEL)?;
                Self::Cancel(CancelArgs {
                    date,
                    timeslot,
                    location,
                })
            }
            CMD_PRINT => Self::Print,
            CMD_PRINT_BY_DATE => Self::PrintByDate,
            CMD_PRINT_BY_CAMPUS => Self::PrintByCampus,
            CMD_PRINT_BY_DEPARTMENT => Self::PrintByDepartment,
            CMD_QUIT => Self::Quit,
            other => Self::Unknown(other.to_string()),
        };

        Ok(command)
    }
}

fn take_fields<'a, const N: usize>(
    tokens: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<[String; N]> {
    let fields: Vec<String> = tokens.take(N).map(str::to_string).collect();
    fields.try_into().map_err(|_| Error::MissingArguments {
        command,
        expected: N,
    })
}
