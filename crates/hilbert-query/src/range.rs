//! Inclusive intervals of curve indices.

use std::fmt;

use crate::error::{self, invalid};

/// An inclusive interval `[low, high]` with `low <= high`.
///
/// Ranges order by `low`, then by `high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Range {
    /// Smallest value in the interval.
    low: u64,
    /// Largest value in the interval.
    high: u64,
}

impl Range {
    /// Create a range, failing if `low > high`.
    pub fn new(low: u64, high: u64) -> error::Result<Self> {
        if low > high {
            invalid!("range low {low} is greater than high {high}");
        }
        Ok(Self { low, high })
    }

    /// A range holding exactly one value.
    pub fn single(value: u64) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    /// Build a range from two values in either order.
    pub(crate) fn spanning(a: u64, b: u64) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    /// Smallest value in the range.
    pub fn low(&self) -> u64 {
        self.low
    }

    /// Largest value in the range.
    pub fn high(&self) -> u64 {
        self.high
    }

    /// Number of values in the range.
    pub fn size(&self) -> u128 {
        u128::from(self.high - self.low) + 1
    }

    /// Does the range include `value`?
    pub fn contains(&self, value: u64) -> bool {
        self.low <= value && value <= self.high
    }

    /// Halve the range, rounding the midpoint down. A single-value range is
    /// returned unchanged.
    fn halve(self) -> (Self, Option<Self>) {
        if self.low == self.high {
            return (self, None);
        }
        let mid = self.low + (self.high - self.low) / 2;
        (
            Self {
                low: self.low,
                high: mid,
            },
            Some(Self {
                low: mid + 1,
                high: self.high,
            }),
        )
    }

    /// Recursively halve the range `depth` times.
    ///
    /// The result partitions `self` in ascending order with no gaps or
    /// overlaps. It holds `2^depth` ranges unless the interval runs out of
    /// values first, in which case single-value ranges are not split further.
    pub fn split(&self, depth: u32) -> Vec<Self> {
        let mut ranges = vec![*self];
        for _ in 0..depth {
            if ranges.iter().all(|r| r.low == r.high) {
                break;
            }
            let mut next = Vec::with_capacity(ranges.len() * 2);
            for r in ranges {
                let (a, b) = r.halve();
                next.push(a);
                next.extend(b);
            }
            ranges = next;
        }
        ranges
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// Merge ranges into the minimal sorted list covering the same values.
///
/// Ranges are sorted by `low`, and any range that overlaps or directly
/// follows its predecessor (`next.low <= prev.high + 1`) is folded into it.
/// In the result consecutive ranges are separated by at least one value.
pub fn simplify(ranges: impl IntoIterator<Item = Range>) -> Vec<Range> {
    let mut sorted: Vec<Range> = ranges.into_iter().collect();
    sorted.sort_unstable();

    let mut merged: Vec<Range> = Vec::with_capacity(sorted.len());
    for r in sorted {
        match merged.last_mut() {
            Some(last) if r.low <= last.high.saturating_add(1) => {
                last.high = last.high.max(r.high);
            }
            _ => merged.push(r),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(low: u64, high: u64) -> Range {
        Range::new(low, high).unwrap()
    }

    #[test]
    fn construct() {
        assert!(Range::new(3, 2).is_err());
        assert_eq!(r(2, 2), Range::single(2));
        assert_eq!(Range::spanning(9, 4), r(4, 9));
        assert_eq!(r(4, 9).size(), 6);
        assert_eq!(r(0, u64::MAX).size(), 1 << 64);
        assert!(r(4, 9).contains(4));
        assert!(r(4, 9).contains(9));
        assert!(!r(4, 9).contains(10));
        assert_eq!(r(4, 9).to_string(), "[4, 9]");
    }

    #[test]
    fn ordering() {
        let mut v = vec![r(5, 6), r(1, 9), r(1, 2)];
        v.sort();
        assert_eq!(v, vec![r(1, 2), r(1, 9), r(5, 6)]);
    }

    #[test]
    fn split() {
        assert_eq!(r(0, 10).split(0), vec![r(0, 10)]);
        assert_eq!(r(0, 10).split(1), vec![r(0, 5), r(6, 10)]);
        assert_eq!(r(0, 10).split(2), vec![r(0, 2), r(3, 5), r(6, 8), r(9, 10)]);
        assert_eq!(r(3, 4).split(3), vec![r(3, 3), r(4, 4)]);
        assert_eq!(r(0, 2).split(2), vec![r(0, 0), r(1, 1), r(2, 2)]);
        assert_eq!(r(7, 7).split(5), vec![r(7, 7)]);
        assert_eq!(
            r(0, u64::MAX).split(1),
            vec![r(0, u64::MAX / 2), r(u64::MAX / 2 + 1, u64::MAX)]
        );
        assert_eq!(r(0, 1023).split(64).len(), 1024);
    }

    #[test]
    fn simplify_merges() {
        assert!(simplify(Vec::new()).is_empty());
        assert_eq!(simplify(vec![r(1, 2)]), vec![r(1, 2)]);
        assert_eq!(simplify(vec![r(4, 5), r(1, 2)]), vec![r(1, 2), r(4, 5)]);
        // Adjacent ranges join.
        assert_eq!(simplify(vec![r(3, 5), r(1, 2)]), vec![r(1, 5)]);
        // Overlapping and contained ranges join.
        assert_eq!(
            simplify(vec![r(10, 12), r(1, 8), r(2, 3), r(7, 9), r(14, 14)]),
            vec![r(1, 12), r(14, 14)]
        );
        assert_eq!(
            simplify(vec![r(u64::MAX, u64::MAX), r(0, u64::MAX - 1)]),
            vec![r(0, u64::MAX)]
        );
    }
}
