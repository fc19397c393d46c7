//! N‑dimensional grid points.

use std::ops::Deref;

use smallvec::SmallVec;

/// A point on the curve's grid, one unsigned coordinate per dimension.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point(pub SmallVec<[u64; 8]>);

impl Point {
    /// Create a new `Point` from a backing vector.
    pub fn new(vec: impl Into<SmallVec<[u64; 8]>>) -> Self {
        Self(vec.into())
    }

    /// Euclidean distance between two points of the same dimensionality.
    ///
    /// In debug builds a dimensionality mismatch triggers a `debug_assert!`;
    /// in release builds the distance is computed over the shared prefix.
    pub fn distance(&self, other: &Self) -> f64 {
        debug_assert!(
            self.len() == other.len(),
            "Point::distance called with differing dimensions: {} vs {}",
            self.len(),
            other.len()
        );

        let tot: f64 = self
            .0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| {
                let d = a.abs_diff(*b) as f64;
                d * d
            })
            .sum();
        tot.sqrt()
    }

    /// The point's coordinates as a slice.
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// Dimensionality of the point.
    pub fn dimension(&self) -> u32 {
        self.0.len() as u32
    }
}

impl From<Point> for Vec<u64> {
    fn from(val: Point) -> Self {
        val.0.to_vec()
    }
}

impl From<&[u64]> for Point {
    fn from(coords: &[u64]) -> Self {
        Self(SmallVec::from_slice(coords))
    }
}

impl Deref for Point {
    type Target = [u64];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
