//! Turns raw command lines into typed [`Instruction`]s.
//!
//! The grammar is whole-token: the first whitespace-delimited word of the
//! trimmed line is the keyword, everything after it is the argument text.
//! Keywords are matched case-insensitively against [`KEYWORDS`] in order.

use crate::engine::Phase;
use crate::error::ParseError;
use crate::robot::{Bearing, Rotation};
use serde::{Deserialize, Serialize};

/// A validated command, ready for the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// Put the robot at `(x, y)`. `bearing` is `None` only when re-placing an
    /// already placed robot, which then keeps facing the same way.
    Place {
        x: i32,
        y: i32,
        bearing: Option<Bearing>,
    },
    /// Step one cell forward.
    Move,
    /// Quarter turn in place.
    Rotate(Rotation),
    /// Print the current position.
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Keyword {
    Place,
    Move,
    Left,
    Right,
    Report,
}

/// Accepted keywords in matching priority.
const KEYWORDS: [(&str, Keyword); 5] = [
    ("PLACE", Keyword::Place),
    ("MOVE", Keyword::Move),
    ("LEFT", Keyword::Left),
    ("RIGHT", Keyword::Right),
    ("REPORT", Keyword::Report),
];

/// Parses one command line.
///
/// `phase` decides whether `PLACE` must carry a bearing: it is required until
/// the robot is on the grid and optional afterwards.
pub fn parse(line: &str, phase: Phase) -> Result<Instruction, ParseError> {
    let line = line.trim();
    let (word, args) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let keyword = KEYWORDS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(word))
        .map(|&(_, keyword)| keyword)
        .ok_or(ParseError::Unrecognized)?;

    match keyword {
        Keyword::Place => parse_place(args, phase),
        Keyword::Move => bare(args, Instruction::Move, ParseError::MoveFormat),
        Keyword::Left => bare(args, Instruction::Rotate(Rotation::Left), ParseError::LeftFormat),
        Keyword::Right => bare(
            args,
            Instruction::Rotate(Rotation::Right),
            ParseError::RightFormat,
        ),
        Keyword::Report => bare(args, Instruction::Report, ParseError::ReportFormat),
    }
}

/// Commands that take no arguments.
fn bare(args: &str, instruction: Instruction, err: ParseError) -> Result<Instruction, ParseError> {
    if args.is_empty() {
        Ok(instruction)
    } else {
        Err(err)
    }
}

/// `<x>,<y>` or `<x>,<y>,<bearing>`.
fn parse_place(args: &str, phase: Phase) -> Result<Instruction, ParseError> {
    let fields: Vec<&str> = args.split(',').map(str::trim).collect();
    if !(2..=3).contains(&fields.len()) || fields.iter().any(|f| f.is_empty()) {
        return Err(ParseError::PlaceFormat);
    }

    let x = fields[0].parse::<i32>().map_err(|_| ParseError::InvalidX)?;
    let y = fields[1].parse::<i32>().map_err(|_| ParseError::InvalidY)?;

    let bearing = match fields.get(2) {
        Some(name) => Some(Bearing::from_name(name).ok_or(ParseError::InvalidBearing)?),
        None if phase == Phase::Uninitialized => return Err(ParseError::BearingRequired),
        None => None,
    };

    Ok(Instruction::Place { x, y, bearing })
}
