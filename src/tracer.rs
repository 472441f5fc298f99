use std::convert::TryFrom;
use std::{error::Error, fmt};

use geo::Coordinate;
use log::debug;

use crate::StrokeIndex;

/// Direction of a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Parse from the usual single-letter tokens (`U`, `D`, `L`, `R`).
///
/// Unknown tokens are rejected rather than skipped: a skipped token
/// would silently shift the cursor for every later move.
impl TryFrom<char> for Direction {
    type Error = PathError;

    fn try_from(ch: char) -> Result<Self, PathError> {
        match ch {
            'U' => Ok(Direction::Up),
            'D' => Ok(Direction::Down),
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            other => Err(PathError::UnknownDirection(other)),
        }
    }
}

/// One step of a path: a direction and a positive length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub direction: Direction,
    pub length: i64,
}

impl Move {
    pub fn new(direction: Direction, length: i64) -> Self {
        Move { direction, length }
    }

    /// Parse a comma-separated move list such as `"R8,U5,L5,D3"`.
    pub fn parse_path(path: &str) -> Result<Vec<Move>, PathError> {
        path.split(',')
            .map(|token| {
                let token = token.trim();
                let mut chars = token.chars();
                let direction = chars
                    .next()
                    .ok_or_else(|| PathError::MalformedMove(token.to_string()))
                    .and_then(Direction::try_from)?;
                let length = chars
                    .as_str()
                    .parse()
                    .map_err(|_| PathError::MalformedMove(token.to_string()))?;
                Ok(Move { direction, length })
            })
            .collect()
    }
}

/// Failure while reading a move sequence.
///
/// Any of these aborts the whole trace: the cursor is sequential and
/// position-dependent, so partial results are not meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A direction token outside `U`, `D`, `L`, `R`.
    UnknownDirection(char),
    /// A move with zero or negative length, at the given position.
    NonPositiveLength { index: usize, length: i64 },
    /// A textual move that could not be parsed.
    MalformedMove(String),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::UnknownDirection(ch) => {
                write!(f, "unknown direction token: {:?}", ch)
            }
            PathError::NonPositiveLength { index, length } => {
                write!(f, "move #{} has non-positive length {}", index, length)
            }
            PathError::MalformedMove(token) => {
                write!(f, "malformed move: {:?}", token)
            }
        }
    }
}

impl Error for PathError {}

/// Walks a move sequence from the origin, recording one stroke per
/// move.
///
/// Up/Down moves record a vertical stroke on the line at the current
/// `x`; Left/Right moves record a horizontal stroke on the line at
/// the current `y`. Stroke endpoints are always stored `(min, max)`
/// regardless of travel direction.
#[derive(Debug, Clone, Default)]
pub struct PathTracer {
    x: i64,
    y: i64,
    vertical: StrokeIndex,
    horizontal: StrokeIndex,
}

impl PathTracer {
    /// Trace all of `moves` starting at `(0, 0)`.
    ///
    /// An empty sequence is valid and yields empty indices.
    pub fn trace<I: IntoIterator<Item = Move>>(moves: I) -> Result<Self, PathError> {
        let mut tracer = PathTracer::default();
        for (index, mv) in moves.into_iter().enumerate() {
            tracer.step(index, mv)?;
        }
        debug!(
            "traced path: {} vertical lines, {} horizontal lines, cursor ({}, {})",
            tracer.vertical.line_count(),
            tracer.horizontal.line_count(),
            tracer.x,
            tracer.y
        );
        Ok(tracer)
    }

    fn step(&mut self, index: usize, mv: Move) -> Result<(), PathError> {
        if mv.length <= 0 {
            return Err(PathError::NonPositiveLength {
                index,
                length: mv.length,
            });
        }
        match mv.direction {
            Direction::Up => {
                let to = self.y + mv.length;
                self.vertical.insert(self.x, self.y, to);
                self.y = to;
            }
            Direction::Down => {
                let to = self.y - mv.length;
                self.vertical.insert(self.x, to, self.y);
                self.y = to;
            }
            Direction::Right => {
                let to = self.x + mv.length;
                self.horizontal.insert(self.y, self.x, to);
                self.x = to;
            }
            Direction::Left => {
                let to = self.x - mv.length;
                self.horizontal.insert(self.y, to, self.x);
                self.x = to;
            }
        }
        Ok(())
    }

    /// Cursor position after the last traced move.
    pub fn position(&self) -> Coordinate<i64> {
        Coordinate {
            x: self.x,
            y: self.y,
        }
    }

    /// Hand out the accumulated `(vertical, horizontal)` indices.
    pub fn into_indices(self) -> (StrokeIndex, StrokeIndex) {
        (self.vertical, self.horizontal)
    }
}
