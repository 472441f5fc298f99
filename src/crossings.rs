//! Crossing search between the two stroke families.

use std::ops::Range;

use geo::Coordinate;
use log::debug;

use crate::{Interval, Move, PathError, PathTracer, RowIndex};

/// Iterator over all crossing points of an orthogonal path.
///
/// Traces the moves from the origin, consolidates both stroke
/// families, and then walks every vertical interval against the rows
/// it spans. For each vertical interval `(x, [y0, y1])` the candidate
/// rows are found with a range query on the row index, and each
/// candidate is checked with a binary search for a stroke containing
/// `x`. This beats the brute-force search over all stroke pairs
/// whenever the number of crossings is small compared to n².
///
/// Rows are visited in ascending key order within a vertical line,
/// and vertical lines in ascending key order.
pub struct Crossings {
    rows: RowIndex,
    verticals: std::vec::IntoIter<(i64, Interval)>,
    current: Option<(i64, Range<usize>)>,
}

impl Crossings {
    /// Trace `moves` from the origin and prepare the crossing search.
    ///
    /// Fails on the first invalid move; no partial result is
    /// produced.
    pub fn try_new<I: IntoIterator<Item = Move>>(moves: I) -> Result<Self, PathError> {
        let tracer = PathTracer::trace(moves)?;
        let (vertical, horizontal) = tracer.into_indices();

        let rows = RowIndex::from(horizontal.consolidate());
        let verticals: Vec<(i64, Interval)> = vertical
            .consolidate()
            .into_iter()
            .flat_map(|(x, list)| list.into_iter().map(move |iv| (x, iv)))
            .collect();
        debug!(
            "crossing search over {} vertical intervals and {} rows",
            verticals.len(),
            rows.len()
        );

        Ok(Crossings {
            rows,
            verticals: verticals.into_iter(),
            current: None,
        })
    }
}

impl Iterator for Crossings {
    type Item = Coordinate<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((x, positions)) = &mut self.current {
                let x = *x;
                if let Some(pos) = positions.next() {
                    let row = self.rows.row(pos);
                    if row.find_crossing(x).is_some() {
                        return Some(Coordinate { x, y: row.y });
                    }
                    continue;
                }
            }
            // Candidate rows exhausted; move to the next vertical
            // interval.
            let (x, iv) = self.verticals.next()?;
            self.current = Some((x, self.rows.range_positions(iv.start, iv.stop)));
        }
    }
}

/// Collect all crossing points of `moves` into a vector.
pub fn find_crossings<I: IntoIterator<Item = Move>>(
    moves: I,
) -> Result<Vec<Coordinate<i64>>, PathError> {
    Ok(Crossings::try_new(moves)?.collect())
}
