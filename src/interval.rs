/// A closed integer interval `[start, stop]` along one axis.
///
/// Represents the extent of a stroke on its variable coordinate; the
/// fixed coordinate (the line it belongs to) is stored by the
/// containing index. Invariant: `start <= stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Interval {
    pub start: i64,
    pub stop: i64,
}

impl Interval {
    pub fn new(start: i64, stop: i64) -> Self {
        debug_assert!(start <= stop, "interval requires start <= stop");
        Interval { start, stop }
    }

    /// Check if `v` lies within the interval. Both ends are included.
    #[inline]
    pub fn contains(&self, v: i64) -> bool {
        self.start <= v && v <= self.stop
    }

    /// Check if `other` overlaps or touches this interval.
    ///
    /// Touching counts: `[0, 3]` and `[3, 5]` merge into one stroke.
    #[inline]
    pub fn meets(&self, other: &Interval) -> bool {
        self.start <= other.stop && other.start <= self.stop
    }
}

impl From<(i64, i64)> for Interval {
    fn from((start, stop): (i64, i64)) -> Self {
        Interval::new(start, stop)
    }
}
