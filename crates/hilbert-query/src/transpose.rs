//! Conversion between grid coordinates and the transposed Hilbert index.
//!
//! The transposed index is the intermediate form used by John Skilling's
//! algorithm ("Programming the Hilbert curve", AIP Conf. Proc. 707, 2004):
//! one word per dimension, bit-interleaved across dimensions. Packing it into
//! a scalar is the job of [`crate::ops::interleave`].

use smallvec::SmallVec;

/// A reversible mapping between points and transposed Hilbert indices.
///
/// Implementations must be pure: the same inputs always give the same output,
/// and `untranspose(bits, &transpose(bits, p)) == p` for every point whose
/// coordinates fit in `bits` bits.
pub trait Transpose: Send + Sync {
    /// Map grid coordinates to a transposed index.
    fn transpose(&self, bits: u32, point: &[u64]) -> SmallVec<[u64; 8]>;

    /// Map a transposed index back to grid coordinates.
    fn untranspose(&self, bits: u32, transposed: &[u64]) -> SmallVec<[u64; 8]>;
}

/// Skilling's in-place Hilbert transform.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Skilling;

impl Transpose for Skilling {
    fn transpose(&self, bits: u32, point: &[u64]) -> SmallVec<[u64; 8]> {
        let mut x = SmallVec::from_slice(point);
        if x.is_empty() || bits == 0 {
            return x;
        }
        let n = x.len();
        let m = 1u64 << (bits - 1);

        // Inverse undo
        let mut q = m;
        while q > 1 {
            let p = q - 1;
            for i in 0..n {
                exchange_or_invert(&mut x, i, q, p);
            }
            q >>= 1;
        }

        // Gray encode
        for i in 1..n {
            let prev = x[i - 1];
            x[i] ^= prev;
        }
        let mut t = 0;
        let mut q = m;
        while q > 1 {
            if x[n - 1] & q != 0 {
                t ^= q - 1;
            }
            q >>= 1;
        }
        for w in x.iter_mut() {
            *w ^= t;
        }
        x
    }

    fn untranspose(&self, bits: u32, transposed: &[u64]) -> SmallVec<[u64; 8]> {
        let mut x = SmallVec::from_slice(transposed);
        if x.is_empty() || bits == 0 {
            return x;
        }
        let n = x.len();

        // Gray decode by H ^ (H/2)
        let t = x[n - 1] >> 1;
        for i in (1..n).rev() {
            let prev = x[i - 1];
            x[i] ^= prev;
        }
        x[0] ^= t;

        // Undo excess work
        for level in 1..bits {
            let q = 1u64 << level;
            let p = q - 1;
            for i in (0..n).rev() {
                exchange_or_invert(&mut x, i, q, p);
            }
        }
        x
    }
}

/// One step of Skilling's reflection: if bit `q` of `x[i]` is set, invert the
/// low bits `p` of `x[0]`; otherwise swap the low bits `p` of `x[0]` and
/// `x[i]`.
#[inline]
fn exchange_or_invert(x: &mut [u64], i: usize, q: u64, p: u64) {
    if x[i] & q != 0 {
        x[0] ^= p;
    } else {
        let t = (x[0] ^ x[i]) & p;
        x[0] ^= t;
        x[i] ^= t;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        for dim in 1usize..=4 {
            for bits in 1u32..=3 {
                let side = 1u64 << bits;
                let cells = side.pow(dim as u32);
                for cell in 0..cells {
                    let mut v = cell;
                    let mut p = vec![0u64; dim];
                    for c in p.iter_mut() {
                        *c = v % side;
                        v /= side;
                    }
                    let t = Skilling.transpose(bits, &p);
                    assert!(t.iter().all(|w| *w < side));
                    assert_eq!(Skilling.untranspose(bits, &t).as_slice(), p.as_slice());
                }
            }
        }
    }

    #[test]
    fn unit_square() {
        // Transposed words for the four cells of a 1-bit, 2-D curve.
        assert_eq!(Skilling.transpose(1, &[0, 0]).as_slice(), &[0, 0]);
        assert_eq!(Skilling.transpose(1, &[0, 1]).as_slice(), &[0, 1]);
        assert_eq!(Skilling.transpose(1, &[1, 1]).as_slice(), &[1, 0]);
        assert_eq!(Skilling.transpose(1, &[1, 0]).as_slice(), &[1, 1]);
    }

    #[test]
    fn wide() {
        let bits = 63;
        let p = [(1u64 << 63) - 1];
        let t = Skilling.transpose(bits, &p);
        assert_eq!(Skilling.untranspose(bits, &t).as_slice(), &p);

        let bits = 21;
        let p = [(1u64 << 21) - 1, 12345, 1 << 20];
        let t = Skilling.transpose(bits, &p);
        assert_eq!(Skilling.untranspose(bits, &t).as_slice(), &p);
    }
}
