//! The Hilbert curve facade: point encoding, index decoding and range
//! queries over a fixed grid.

use smallvec::SmallVec;

use crate::{
    error::{self, invalid},
    ops,
    point::Point,
    query::{self, Strategy},
    range::Range,
    rect::HyperRect,
    spec::CurveSpec,
    transpose::{Skilling, Transpose},
};

/// A Hilbert curve over a `2^bits` hypercube grid in `dimensions` dimensions.
///
/// The curve is immutable once built, and every method takes `&self`, so a
/// single instance can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct HilbertCurve<T = Skilling> {
    /// Grid parameters.
    spec: CurveSpec,
    /// Mapping between coordinates and transposed indices.
    transform: T,
}

#[allow(clippy::multiple_inherent_impl)]
impl HilbertCurve {
    /// Construct a curve with `bits` bits per coordinate in `dimensions`
    /// dimensions, using Skilling's transform.
    ///
    /// Fails if either value is zero or `bits * dimensions > 63`.
    pub fn new(bits: u32, dimensions: u32) -> error::Result<Self> {
        Ok(Self::from_spec(CurveSpec::new(bits, dimensions)?))
    }

    /// Construct a curve from validated parameters.
    pub fn from_spec(spec: CurveSpec) -> Self {
        Self::with_transpose(spec, Skilling)
    }
}

impl<T: Transpose> HilbertCurve<T> {
    /// Construct a curve that uses a custom transform.
    pub fn with_transpose(spec: CurveSpec, transform: T) -> Self {
        Self { spec, transform }
    }

    /// Grid parameters.
    pub fn spec(&self) -> &CurveSpec {
        &self.spec
    }

    /// Bits per coordinate.
    pub fn bits(&self) -> u32 {
        self.spec.bits()
    }

    /// Number of dimensions.
    pub fn dimensions(&self) -> u32 {
        self.spec.dimensions()
    }

    /// Number of points on the curve.
    pub fn length(&self) -> u64 {
        self.spec.length()
    }

    /// Curve index of `point`.
    ///
    /// Fails if the point does not have exactly `dimensions` coordinates or
    /// if any coordinate is outside `[0, 2^bits)`.
    pub fn encode(&self, point: &[u64]) -> error::Result<u64> {
        self.spec.check_point(point)?;
        let transposed = self.transform.transpose(self.bits(), point);
        Ok(ops::interleave(self.bits(), &transposed))
    }

    /// Point at curve index `index`.
    ///
    /// Fails if `index >= 2^(bits * dimensions)`.
    pub fn decode(&self, index: u64) -> error::Result<Point> {
        self.spec.check_index(index)?;
        Ok(Point(self.coordinates(index)))
    }

    /// Decode without validating `index`. Bits above the index width are
    /// ignored.
    fn coordinates(&self, index: u64) -> SmallVec<[u64; 8]> {
        let transposed = ops::deinterleave(self.bits(), self.dimensions(), index);
        self.transform.untranspose(self.bits(), &transposed)
    }

    /// Lowest corner of the cube filled by the `2^(dimensions * level)`
    /// consecutive indices starting at `start`, which must be a multiple of
    /// that block length.
    pub(crate) fn block_origin(&self, start: u64, level: u32) -> SmallVec<[u64; 8]> {
        let mask = !ops::bitmask(level);
        let mut origin = self.coordinates(start);
        for c in origin.iter_mut() {
            *c &= mask;
        }
        origin
    }

    /// Check that `rect` has the curve's dimensionality and lies on the grid.
    pub fn check_rect(&self, rect: &HyperRect) -> error::Result<()> {
        if rect.dimensions() != self.dimensions() {
            invalid!(
                "expected a box with {} dimensions, got {}",
                self.dimensions(),
                rect.dimensions()
            );
        }
        self.spec.check_point(rect.high())
    }

    /// The exact smallest and largest curve indices of any point in the box
    /// spanned by corners `a` and `b`.
    pub fn bounds(&self, a: &[u64], b: &[u64]) -> error::Result<Range> {
        let rect = self.rect(a, b)?;
        query::bounds(self, &rect)
    }

    /// Cover the box spanned by corners `a` and `b` with sorted, disjoint
    /// index ranges, splitting each axis into `2^split_depth` intervals
    /// ([`Strategy::Intervals`]).
    ///
    /// Every point inside the box has its index in one of the returned
    /// ranges. Deeper splits cost more and overscan less.
    pub fn query(&self, a: &[u64], b: &[u64], split_depth: u32) -> error::Result<Vec<Range>> {
        self.query_with(a, b, split_depth, Strategy::Intervals)
    }

    /// Like [`HilbertCurve::query`], but bisects the box `split_depth` times
    /// along every axis at power-of-two boundaries ([`Strategy::Aligned`]).
    pub fn query_aligned(
        &self,
        a: &[u64],
        b: &[u64],
        split_depth: u32,
    ) -> error::Result<Vec<Range>> {
        self.query_with(a, b, split_depth, Strategy::Aligned)
    }

    /// Cover the box spanned by corners `a` and `b` using `strategy`.
    pub fn query_with(
        &self,
        a: &[u64],
        b: &[u64],
        split_depth: u32,
        strategy: Strategy,
    ) -> error::Result<Vec<Range>> {
        let rect = self.rect(a, b)?;
        query::cover(self, &rect, split_depth, strategy)
    }

    /// Build and validate the box spanned by two corners.
    fn rect(&self, a: &[u64], b: &[u64]) -> error::Result<HyperRect> {
        self.spec.check_point(a)?;
        self.spec.check_point(b)?;
        HyperRect::new(a, b)
    }
}
