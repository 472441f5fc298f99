use std::ops::Range;

use crate::{strokes::IntervalList, ConsolidatedIndex, Interval};

/// One horizontal line and its merged strokes.
///
/// Intervals are disjoint and sorted by `start`, as produced by
/// consolidation; [`find_crossing`](Row::find_crossing) relies on
/// both.
#[derive(Debug, Clone)]
pub struct Row {
    pub y: i64,
    intervals: IntervalList,
}

impl Row {
    /// The merged strokes of this row, sorted by start.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Binary search for the stroke containing column `x`, if any.
    ///
    /// Three-way branch: descend left of intervals starting past
    /// `x`, right of intervals stopping before it. At most one can
    /// contain `x` since the intervals are disjoint. O(log k).
    pub fn find_crossing(&self, x: i64) -> Option<Interval> {
        let mut lo = 0;
        let mut hi = self.intervals.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let iv = self.intervals[mid];
            if x < iv.start {
                hi = mid;
            } else if x > iv.stop {
                lo = mid + 1;
            } else {
                return Some(iv);
            }
        }
        None
    }
}

/// All horizontal rows after consolidation, ordered by row key.
///
/// Restricts a crossing search to the rows a vertical stroke
/// actually spans.
#[derive(Debug, Clone, Default)]
pub struct RowIndex {
    rows: Vec<Row>,
}

/// Build from the consolidated horizontal index; map order keeps the
/// rows sorted by key.
impl From<ConsolidatedIndex> for RowIndex {
    fn from(index: ConsolidatedIndex) -> Self {
        let rows = index
            .lines
            .into_iter()
            .map(|(y, intervals)| Row { y, intervals })
            .collect();
        RowIndex { rows }
    }
}

impl RowIndex {
    /// Rows whose key lies in `[low, high]`, both ends included, in
    /// ascending key order.
    pub fn range(&self, low: i64, high: i64) -> &[Row] {
        &self.rows[self.range_positions(low, high)]
    }

    /// Positions of the rows in `[low, high]` within the sorted row
    /// list.
    pub(crate) fn range_positions(&self, low: i64, high: i64) -> Range<usize> {
        let lo = self.rows.partition_point(|r| r.y < low);
        let hi = self.rows.partition_point(|r| r.y <= high);
        lo..hi
    }

    pub(crate) fn row(&self, position: usize) -> &Row {
        &self.rows[position]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StrokeIndex;

    fn row_index(lines: &[(i64, &[(i64, i64)])]) -> RowIndex {
        let mut index = StrokeIndex::new();
        for &(y, strokes) in lines {
            for &(start, stop) in strokes {
                index.insert(y, start, stop);
            }
        }
        index.consolidate().into()
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let index = row_index(&[
            (0, &[(0, 5)]),
            (3, &[(0, 5)]),
            (7, &[(0, 5)]),
            (9, &[(0, 5)]),
        ]);
        let keys =
            |rows: &[Row]| rows.iter().map(|r| r.y).collect::<Vec<_>>();
        assert_eq!(keys(index.range(3, 7)), vec![3, 7]);
        assert_eq!(keys(index.range(0, 9)), vec![0, 3, 7, 9]);
        assert_eq!(keys(index.range(4, 6)), Vec::<i64>::new());
        assert_eq!(keys(index.range(-5, 0)), vec![0]);
        assert_eq!(keys(index.range(9, 20)), vec![9]);
    }

    #[test]
    fn find_crossing_three_way_search() {
        let index = row_index(&[(0, &[(0, 2), (5, 7), (10, 14)])]);
        let row = &index.range(0, 0)[0];

        assert_eq!(row.find_crossing(0), Some(Interval::new(0, 2)));
        assert_eq!(row.find_crossing(6), Some(Interval::new(5, 7)));
        assert_eq!(row.find_crossing(14), Some(Interval::new(10, 14)));
        assert_eq!(row.find_crossing(3), None);
        assert_eq!(row.find_crossing(-1), None);
        assert_eq!(row.find_crossing(15), None);
    }

    #[test]
    fn find_crossing_on_degenerate_interval() {
        // A single-point stroke still registers a hit at its column.
        let index = row_index(&[(5, &[(3, 3)])]);
        let row = &index.range(5, 5)[0];
        assert_eq!(row.find_crossing(3), Some(Interval::new(3, 3)));
        assert_eq!(row.find_crossing(2), None);
        assert_eq!(row.find_crossing(4), None);
    }

    #[test]
    fn empty_index() {
        let index = RowIndex::default();
        assert!(index.is_empty());
        assert!(index.range(i64::MIN, i64::MAX).is_empty());
    }
}
