//! Bit operations behind the curve transform.
//!
//! The Skilling transform produces a "transposed" index: one word per
//! dimension, where bit `p` of word `j` is the `j`th digit of level `p`. The
//! scalar curve index is the same set of bits read level by level, most
//! significant level first and dimension 0 first within a level.

use smallvec::{SmallVec, smallvec};

/// Bitmask with the `bits` least‑significant bits set. Saturates to
/// `u64::MAX` for widths of 64 and above.
#[inline]
pub const fn bitmask(bits: u32) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Pack a transposed index into a scalar curve index.
///
/// Reads the low `bits` bits of each word in `transposed` and emits them
/// most-significant level first, dimension-major within a level, packing the
/// result big-endian into `bits * transposed.len()` bits.
pub fn interleave(bits: u32, transposed: &[u64]) -> u64 {
    let mut index = 0u64;
    for level in (0..bits).rev() {
        for word in transposed {
            index = (index << 1) | ((word >> level) & 1);
        }
    }
    index
}

/// Unpack a scalar curve index into its transposed form. Exact inverse of
/// [`interleave`].
///
/// Only the low `bits * dimensions` bits of `index` are read; anything above
/// is ignored.
pub fn deinterleave(bits: u32, dimensions: u32, index: u64) -> SmallVec<[u64; 8]> {
    let mut transposed = smallvec![0u64; dimensions as usize];
    if dimensions == 0 {
        return transposed;
    }
    let length = bits.saturating_mul(dimensions).min(64);
    for idx in 0..length {
        if index & (1 << idx) != 0 {
            let dim = (length - idx - 1) % dimensions;
            let shift = idx / dimensions;
            transposed[dim as usize] |= 1 << shift;
        }
    }
    transposed
}

/// The value in `(low, high]` with the most trailing zero bits.
///
/// This is the largest power-of-two boundary strictly inside the interval:
/// the bits above the most significant bit where `low` and `high` differ are
/// kept, that bit is set, and everything below is cleared. Splitting
/// `[low, high]` into `[low, m - 1]` and `[m, high]` at this value aligns the
/// cut with the curve's block structure. Returns `high` when `low >= high`.
pub fn most_significant_between(low: u64, high: u64) -> u64 {
    if low >= high {
        return high;
    }
    let diff = 63 - (low ^ high).leading_zeros();
    high & !bitmask(diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmask() {
        assert_eq!(bitmask(0), 0);
        assert_eq!(bitmask(3), 0b111);
        assert_eq!(bitmask(63), u64::MAX >> 1);
        assert_eq!(bitmask(64), u64::MAX);
    }

    #[test]
    fn test_interleave() {
        // Level 1 then level 0; dimension 0 first within a level.
        assert_eq!(interleave(2, &[0b10, 0b00]), 0b1000);
        assert_eq!(interleave(2, &[0b00, 0b10]), 0b0100);
        assert_eq!(interleave(2, &[0b01, 0b00]), 0b0010);
        assert_eq!(interleave(2, &[0b00, 0b01]), 0b0001);
        assert_eq!(interleave(3, &[0b101, 0b011]), 0b10_01_11);
        assert_eq!(interleave(1, &[1, 0, 1]), 0b101);
    }

    #[test]
    fn test_deinterleave() {
        assert_eq!(deinterleave(3, 2, 0b10_01_11).as_slice(), &[0b101, 0b011]);
        assert_eq!(deinterleave(1, 3, 0b101).as_slice(), &[1, 0, 1]);
        // Bits beyond the index width are ignored.
        assert_eq!(deinterleave(2, 2, 0xff00 | 0b1000).as_slice(), &[0b10, 0]);
        assert_eq!(
            deinterleave(21, 3, u64::MAX).as_slice(),
            &[bitmask(21), bitmask(21), bitmask(21)]
        );
    }

    #[test]
    fn interleave_roundtrip() {
        for dim in 1u32..=4 {
            for bits in 1..=4 {
                for idx in 0..(1u64 << (dim * bits)) {
                    let t = deinterleave(bits, dim, idx);
                    assert!(t.iter().all(|w| *w <= bitmask(bits)));
                    assert_eq!(interleave(bits, &t), idx);
                }
            }
        }
        let t = deinterleave(63, 1, u64::MAX >> 1);
        assert_eq!(interleave(63, &t), u64::MAX >> 1);
    }

    #[test]
    fn test_most_significant_between() {
        assert_eq!(most_significant_between(0, 3), 2);
        assert_eq!(most_significant_between(0, 1), 1);
        assert_eq!(most_significant_between(1, 2), 2);
        assert_eq!(most_significant_between(3, 4), 4);
        assert_eq!(most_significant_between(5, 12), 8);
        assert_eq!(most_significant_between(9, 11), 10);
        assert_eq!(most_significant_between(0, u64::MAX), 1 << 63);
        assert_eq!(most_significant_between(7, 7), 7);
        for low in 0..40u64 {
            for high in low + 1..40 {
                let m = most_significant_between(low, high);
                assert!(low < m && m <= high, "{low} {high} {m}");
                assert!((low + 1..=high).all(|v| v.trailing_zeros() <= m.trailing_zeros()));
            }
        }
    }
}
