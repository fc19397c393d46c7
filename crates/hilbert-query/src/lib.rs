//! Hilbert curve indexing for multi-dimensional range queries.
//!
//! A [`HilbertCurve`] maps points on an N‑dimensional `2^bits` grid to
//! positions along a Hilbert curve and back. Because the curve preserves
//! locality, a box in space maps to a modest number of contiguous index
//! runs. [`HilbertCurve::query`] computes those runs so a box query can be
//! answered with range scans over any store ordered by curve index.
//!
//! ```
//! use hilbert_query::HilbertCurve;
//!
//! let curve = HilbertCurve::new(3, 2)?;
//! let index = curve.encode(&[5, 2])?;
//! assert_eq!(curve.decode(index)?.as_slice(), &[5, 2]);
//!
//! let ranges = curve.query(&[1, 2], &[5, 6], 3)?;
//! assert!(ranges.iter().any(|r| r.contains(index)));
//! # Ok::<(), hilbert_query::error::Error>(())
//! ```

/// The curve facade.
pub mod curve;
/// Error types used across the crate.
pub mod error;
/// Bit interleaving between transposed and scalar indices.
#[doc(hidden)]
pub mod ops;
/// N‑dimensional points.
pub mod point;
/// Lazy Cartesian products of index tuples.
pub mod product;
/// Box-to-range decomposition.
pub mod query;
/// Inclusive index ranges.
pub mod range;
/// Axis-aligned boxes.
pub mod rect;
/// Validated curve parameters.
pub mod spec;
/// The Skilling transform and its trait.
pub mod transpose;

pub use crate::{
    curve::HilbertCurve,
    query::Strategy,
    range::{Range, simplify},
    rect::HyperRect,
    spec::CurveSpec,
    transpose::{Skilling, Transpose},
};
