use std::collections::{btree_map, BTreeMap};

use itertools::Itertools;
use log::trace;
use smallvec::SmallVec;

use crate::Interval;

/// Merged intervals of one line. Most lines carry only a few strokes.
pub(crate) type IntervalList = SmallVec<[Interval; 4]>;

/// Strokes of one axis family, grouped by the orthogonal coordinate.
///
/// Vertical strokes are keyed by their `x`; horizontal strokes by
/// their `y`. Within a line, intervals are keyed by `start`.
///
/// Insertion merges eagerly when two strokes begin at the same
/// coordinate: the existing interval is widened instead of inserting
/// a duplicate. This keeps per-line entry counts small while a path
/// repeatedly backtracks over the same corner, and leaves the full
/// overlap merge to [`consolidate`](StrokeIndex::consolidate).
#[derive(Debug, Clone, Default)]
pub struct StrokeIndex {
    lines: BTreeMap<i64, BTreeMap<i64, i64>>,
}

impl StrokeIndex {
    pub fn new() -> Self {
        Default::default()
    }

    /// Record the stroke `[start, stop]` on the line at `key`.
    ///
    /// If an interval starting at `start` already exists on that
    /// line, its stop is extended to the max of the two.
    pub fn insert(&mut self, key: i64, start: i64, stop: i64) {
        debug_assert!(start <= stop, "stroke requires start <= stop");
        let line = self.lines.entry(key).or_default();
        let entry = line.entry(start).or_insert(stop);
        if *entry < stop {
            *entry = stop;
        }
    }

    /// Number of lines with at least one stroke.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Collapse each line's intervals into a minimal disjoint set.
    ///
    /// Intervals arrive sorted by `start` (map order), so a single
    /// left-to-right pass suffices: successive intervals are folded
    /// into a running one while they overlap or touch it, and the
    /// running interval is emitted once the next start lies past its
    /// stop.
    pub fn consolidate(self) -> ConsolidatedIndex {
        let lines = self
            .lines
            .into_iter()
            .map(|(key, line)| {
                let raw = line.len();
                let merged: IntervalList = line
                    .into_iter()
                    .map(Interval::from)
                    .coalesce(|cur, next| {
                        if cur.meets(&next) {
                            Ok(Interval::new(cur.start, cur.stop.max(next.stop)))
                        } else {
                            Err((cur, next))
                        }
                    })
                    .collect();
                trace!(
                    "consolidated line {}: {} -> {} intervals",
                    key,
                    raw,
                    merged.len()
                );
                (key, merged)
            })
            .collect();
        ConsolidatedIndex { lines }
    }
}

/// A [`StrokeIndex`] after consolidation.
///
/// Per line, intervals are disjoint and strictly increasing by
/// `start`; no two overlap or touch.
#[derive(Debug, Clone, Default)]
pub struct ConsolidatedIndex {
    pub(crate) lines: BTreeMap<i64, IntervalList>,
}

impl ConsolidatedIndex {
    /// The merged intervals of the line at `key`, sorted by start.
    pub fn line(&self, key: i64) -> Option<&[Interval]> {
        self.lines.get(&key).map(|l| &l[..])
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Iterate over lines in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &[Interval])> {
        self.lines.iter().map(|(&key, list)| (key, &list[..]))
    }
}

impl IntoIterator for ConsolidatedIndex {
    type Item = (i64, IntervalList);
    type IntoIter = btree_map::IntoIter<i64, IntervalList>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}
