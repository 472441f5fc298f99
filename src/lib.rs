//! Detects all crossing points between the orthogonal strokes traced
//! out by a sequence of directional moves from a common origin.
//!
//! Up/down moves produce vertical strokes; left/right moves produce
//! horizontal ones. The engine finds every point where a vertical
//! stroke geometrically intersects a horizontal stroke, without
//! enumerating the O(n²) stroke pairs.
//!
//! The computation runs in three phases:
//!
//! 1. [`PathTracer`] walks the moves and accumulates one interval per
//! move into two [`StrokeIndex`] instances, one per axis family.
//! Strokes beginning at the same coordinate on the same line are
//! merged eagerly on insertion.
//! 1. Each index is consolidated: per line, overlapping or touching
//! intervals collapse into a minimal disjoint set.
//! 1. [`Crossings`] builds a [`RowIndex`] over the consolidated
//! horizontal lines and sweeps every vertical interval against it,
//! combining a range query by row with a binary search by column.
//!
//! # Usage
//!
//! Construct a [`Crossings`] iterator from the move sequence, or use
//! [`find_crossings`] to collect the points directly. Crossing points
//! are reported as [`Coordinate`]s with integer scalars.
//!
//! ```rust
//! use ortho_crossings::{find_crossings, Move};
//!
//! let path = Move::parse_path("R8,U5,L5,D3,U7,R6,D4,L4").unwrap();
//! let crossings = find_crossings(path).unwrap();
//! // The path re-crosses itself six times (corners included).
//! assert_eq!(crossings.len(), 6);
//! ```
//!
//! [`Coordinate`]: geo::Coordinate
mod interval;
pub use interval::Interval;

mod strokes;
pub use strokes::{ConsolidatedIndex, StrokeIndex};

mod tracer;
pub use tracer::{Direction, Move, PathError, PathTracer};

mod rows;
pub use rows::{Row, RowIndex};

pub mod crossings;
pub use crossings::{find_crossings, Crossings};

#[cfg(test)]
#[path = "../benches/utils/random.rs"]
pub(crate) mod random;
