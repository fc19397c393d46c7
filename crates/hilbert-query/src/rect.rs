//! Axis-aligned hyper-rectangles on the curve's grid.

use smallvec::{SmallVec, smallvec};

use crate::{
    error::{self, invalid},
    ops,
    point::Point,
    product::Product,
    range::Range,
};

/// An axis-aligned box, stored as its inclusive lower and upper corners.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HyperRect {
    /// Coordinate-wise minimum corner.
    low: Point,
    /// Coordinate-wise maximum corner.
    high: Point,
}

impl HyperRect {
    /// The box spanned by two opposite corners, given in any order along each
    /// axis.
    pub fn new(a: &[u64], b: &[u64]) -> error::Result<Self> {
        if a.len() != b.len() {
            invalid!(
                "box corners have different dimensions: {} and {}",
                a.len(),
                b.len()
            );
        }
        if a.is_empty() {
            invalid!("box corners must have at least one coordinate");
        }
        let (low, high) = a.iter().zip(b).map(|(x, y)| (*x.min(y), *x.max(y))).unzip();
        Ok(Self {
            low: Point(low),
            high: Point(high),
        })
    }

    /// The box whose extent along axis `i` is `ranges[i]`.
    pub fn from_ranges(ranges: &[Range]) -> Self {
        Self {
            low: Point(ranges.iter().map(Range::low).collect()),
            high: Point(ranges.iter().map(Range::high).collect()),
        }
    }

    /// Lower corner.
    pub fn low(&self) -> &Point {
        &self.low
    }

    /// Upper corner.
    pub fn high(&self) -> &Point {
        &self.high
    }

    /// Number of axes.
    pub fn dimensions(&self) -> u32 {
        self.low.dimension()
    }

    /// Extent of the box along `axis`.
    pub fn axis(&self, axis: usize) -> Range {
        Range::spanning(self.low[axis], self.high[axis])
    }

    /// Number of grid cells inside the box, saturating at `u128::MAX`.
    pub fn cells(&self) -> u128 {
        (0..self.low.len()).fold(1u128, |acc, i| acc.saturating_mul(self.axis(i).size()))
    }

    /// Is `point` inside the box? Points of the wrong dimensionality are not.
    pub fn contains(&self, point: &[u64]) -> bool {
        point.len() == self.low.len()
            && point
                .iter()
                .zip(self.low.iter().zip(self.high.iter()))
                .all(|(c, (lo, hi))| lo <= c && c <= hi)
    }

    /// Lazily enumerate the `2^dimensions` corners of the box. Corner `k`
    /// takes the upper coordinate on axis `i` when bit `i` of `k` is set.
    /// Degenerate axes produce repeated corners.
    pub fn corners(&self) -> impl Iterator<Item = Point> + '_ {
        let radices: SmallVec<[usize; 8]> = smallvec![2; self.low.len()];
        Product::new(radices).map(move |choice| {
            Point(
                choice
                    .iter()
                    .enumerate()
                    .map(|(i, c)| if *c == 0 { self.low[i] } else { self.high[i] })
                    .collect(),
            )
        })
    }

    /// Cut the box in two along `axis` at the largest power-of-two boundary
    /// inside its extent (see [`ops::most_significant_between`]). A box that
    /// is one cell thick along `axis` is returned whole.
    pub fn split_aligned(&self, axis: usize) -> (Self, Option<Self>) {
        let (low, high) = (self.low[axis], self.high[axis]);
        if low == high {
            return (self.clone(), None);
        }
        let cut = ops::most_significant_between(low, high);
        let mut first = self.clone();
        first.high.0[axis] = cut - 1;
        let mut second = self.clone();
        second.low.0[axis] = cut;
        (first, Some(second))
    }

    /// Does the box overlap the cube of side `side` whose lowest corner is
    /// `origin`?
    pub fn intersects_cube(&self, origin: &[u64], side: u64) -> bool {
        origin
            .iter()
            .zip(self.low.iter().zip(self.high.iter()))
            .all(|(o, (lo, hi))| *o <= *hi && o + (side - 1) >= *lo)
    }

    /// Does the box fully enclose the cube of side `side` whose lowest corner
    /// is `origin`?
    pub fn contains_cube(&self, origin: &[u64], side: u64) -> bool {
        origin
            .iter()
            .zip(self.low.iter().zip(self.high.iter()))
            .all(|(o, (lo, hi))| *o >= *lo && o + (side - 1) <= *hi)
    }
}
