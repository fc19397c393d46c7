//! Validated curve parameters.

use crate::error::{self, invalid};

/// Widest index, in bits, that a curve may produce.
pub const MAX_INDEX_BITS: u32 = 63;

/// Bits per dimension and dimension count for a Hilbert curve.
///
/// A `CurveSpec` can only be obtained through its constructors, which check
/// that `bits * dimensions` fits within [`MAX_INDEX_BITS`]. Every other
/// quantity (grid side, number of cells, largest index) is derived from the
/// two stored values and is guaranteed not to overflow `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurveSpec {
    /// Bits per coordinate.
    bits: u32,
    /// Number of coordinates per point.
    dimensions: u32,
}

impl CurveSpec {
    /// Create a spec from bits per dimension and a dimension count.
    pub fn new(bits: u32, dimensions: u32) -> error::Result<Self> {
        if bits == 0 {
            invalid!("bits per dimension must be at least 1");
        }
        if dimensions == 0 {
            invalid!("dimensions must be at least 1");
        }
        match bits.checked_mul(dimensions) {
            Some(total) if total <= MAX_INDEX_BITS => Ok(Self { bits, dimensions }),
            _ => invalid!(
                "bits * dimensions must be less than or equal to {MAX_INDEX_BITS}, \
                 got {bits} * {dimensions}"
            ),
        }
    }

    /// Create a spec for a hypercube grid with `size` cells along each axis.
    /// The size must be a power of two of at least 2.
    pub fn power_of_two(dimensions: u32, size: u64) -> error::Result<Self> {
        if size < 2 || !size.is_power_of_two() {
            invalid!("grid size must be a power of two >= 2, got {size}");
        }
        Self::new(size.trailing_zeros(), dimensions)
    }

    /// Bits per coordinate.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Number of coordinates per point.
    pub fn dimensions(&self) -> u32 {
        self.dimensions
    }

    /// Number of significant bits in a curve index.
    pub fn index_bits(&self) -> u32 {
        self.bits * self.dimensions
    }

    /// Number of grid cells along each axis (`2^bits`).
    pub fn side(&self) -> u64 {
        1 << self.bits
    }

    /// Largest valid coordinate value.
    pub fn max_coordinate(&self) -> u64 {
        self.side() - 1
    }

    /// Total number of cells, which is also the number of curve indices.
    pub fn length(&self) -> u64 {
        1 << self.index_bits()
    }

    /// Largest valid curve index.
    pub fn max_index(&self) -> u64 {
        self.length() - 1
    }

    /// Check that `point` has the right arity and that every coordinate is on
    /// the grid.
    pub fn check_point(&self, point: &[u64]) -> error::Result<()> {
        if point.len() != self.dimensions as usize {
            invalid!(
                "expected a point with {} coordinates, got {}",
                self.dimensions,
                point.len()
            );
        }
        let max = self.max_coordinate();
        if let Some((axis, c)) = point.iter().enumerate().find(|(_, c)| **c > max) {
            invalid!("coordinate {c} on axis {axis} exceeds the maximum of {max}");
        }
        Ok(())
    }

    /// Check that `index` lies on the curve.
    pub fn check_index(&self, index: u64) -> error::Result<()> {
        if index > self.max_index() {
            invalid!(
                "index {index} exceeds the maximum of {} for a {}-bit curve",
                self.max_index(),
                self.index_bits()
            );
        }
        Ok(())
    }
}
