//! Decomposition of a query box into curve index ranges.
//!
//! A box on the grid maps to many disjoint runs of curve indices. The
//! functions here split the box into sub-boxes, take the exact index range
//! of each, and merge the results. Splitting more finely gives tighter
//! ranges at a cost exponential in `dimensions * split_depth`.
//!
//! Exact sub-box ranges come from the curve's block structure: the
//! `2^(dimensions * k)` consecutive indices starting at any multiple of that
//! length fill an aligned cube of side `2^k`. Descending from the whole grid
//! and following the first (or last) child cube that overlaps the box
//! reaches the box's smallest (or largest) index in `bits` steps.

use std::iter;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{
    curve::HilbertCurve,
    error::{self, invalid},
    product::Product,
    range::{self, Range},
    rect::HyperRect,
    transpose::Transpose,
};

/// How a query box is divided before index ranges are taken.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Halve each axis's interval `split_depth` times and take every
    /// combination of the per-axis pieces.
    #[default]
    Intervals,
    /// Bisect the box `split_depth` times along every axis, cutting at the
    /// largest power-of-two boundary inside the extent so that pieces line up
    /// with the curve's blocks.
    Aligned,
}

/// Which end of a box's index range to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum End {
    /// Smallest index.
    Low,
    /// Largest index.
    High,
}

/// The exact range of curve indices covered by `rect`.
pub fn bounds<T: Transpose>(curve: &HilbertCurve<T>, rect: &HyperRect) -> error::Result<Range> {
    curve.check_rect(rect)?;
    exact_range(curve, rect)
}

/// Index ranges covering every point of `rect`: sorted, disjoint and
/// separated by at least one index.
pub fn cover<T: Transpose>(
    curve: &HilbertCurve<T>,
    rect: &HyperRect,
    split_depth: u32,
    strategy: Strategy,
) -> error::Result<Vec<Range>> {
    curve.check_rect(rect)?;
    let pieces = match strategy {
        Strategy::Intervals => interval_pieces(rect, split_depth),
        Strategy::Aligned => aligned_pieces(rect, split_depth),
    };
    let mut ranges = Vec::with_capacity(pieces.len());
    for piece in &pieces {
        let r = exact_range(curve, piece)?;
        trace!(?piece, range = %r, "sub-box range");
        ranges.push(r);
    }
    let merged = range::simplify(ranges);
    debug!(
        ?strategy,
        split_depth,
        pieces = pieces.len(),
        ranges = merged.len(),
        "covered query box"
    );
    Ok(merged)
}

/// Split each axis of `rect` into intervals and return every combination
/// as a box.
fn interval_pieces(rect: &HyperRect, split_depth: u32) -> Vec<HyperRect> {
    let per_axis: Vec<Vec<Range>> = (0..rect.dimensions() as usize)
        .map(|axis| rect.axis(axis).split(split_depth))
        .collect();
    let radices: SmallVec<[usize; 8]> = per_axis.iter().map(Vec::len).collect();
    Product::new(radices)
        .map(|choice| {
            let ranges: SmallVec<[Range; 8]> = choice
                .iter()
                .zip(&per_axis)
                .map(|(i, pieces)| pieces[*i])
                .collect();
            HyperRect::from_ranges(&ranges)
        })
        .collect()
}

/// Repeatedly bisect `rect` along each axis in turn at block-aligned cuts.
fn aligned_pieces(rect: &HyperRect, split_depth: u32) -> Vec<HyperRect> {
    let mut boxes = vec![rect.clone()];
    for _ in 0..split_depth {
        let before = boxes.len();
        for axis in 0..rect.dimensions() as usize {
            boxes = boxes
                .into_iter()
                .flat_map(|b| {
                    let (first, second) = b.split_aligned(axis);
                    iter::once(first).chain(second)
                })
                .collect();
        }
        if boxes.len() == before {
            break;
        }
    }
    boxes
}

/// Smallest and largest curve indices inside `rect`, which must lie on the
/// curve's grid.
fn exact_range<T: Transpose>(curve: &HilbertCurve<T>, rect: &HyperRect) -> error::Result<Range> {
    let low = extreme(curve, rect, End::Low);
    let high = extreme(curve, rect, End::High);
    match (low, high) {
        (Some(low), Some(high)) => Range::new(low, high),
        _ => invalid!("box {rect:?} does not overlap the curve's grid"),
    }
}

/// Walk down the curve's blocks towards the requested end of `rect`'s index
/// range. Returns `None` only if `rect` misses the grid entirely.
fn extreme<T: Transpose>(curve: &HilbertCurve<T>, rect: &HyperRect, end: End) -> Option<u64> {
    let dimensions = curve.dimensions();
    let children = 1u64 << dimensions;
    let mut start = 0u64;
    let mut origin = curve.block_origin(0, curve.bits());
    if !rect.intersects_cube(&origin, curve.spec().side()) {
        return None;
    }
    for level in (0..curve.bits()).rev() {
        // The block at `start` spans `2^(dimensions * (level + 1))` indices.
        let side = 1u64 << (level + 1);
        if rect.contains_cube(&origin, side) {
            return Some(match end {
                End::Low => start,
                End::High => start + ((1u64 << (dimensions * (level + 1))) - 1),
            });
        }
        let child_len = 1u64 << (dimensions * level);
        let child_side = 1u64 << level;
        let overlapping = |child: u64| {
            let child_start = start + child * child_len;
            let child_origin = curve.block_origin(child_start, level);
            rect.intersects_cube(&child_origin, child_side)
                .then_some((child_start, child_origin))
        };
        let found = match end {
            End::Low => (0..children).find_map(overlapping),
            End::High => (0..children).rev().find_map(overlapping),
        };
        (start, origin) = found?;
    }
    Some(start)
}
