//! Lazy mixed-radix counting over index tuples.

use smallvec::{SmallVec, smallvec};

/// Iterator over every tuple `t` with `t[i] < radices[i]`.
///
/// Position 0 varies fastest. The iterator is finite, and cloning it before
/// use gives an independent restart. A radix of zero yields no tuples; an
/// empty radix list yields a single empty tuple.
#[derive(Debug, Clone)]
pub struct Product {
    /// Number of values at each position.
    radices: SmallVec<[usize; 8]>,
    /// The next tuple to yield, or `None` once exhausted.
    next: Option<SmallVec<[usize; 8]>>,
}

impl Product {
    /// Count through all tuples for the given radices.
    pub fn new(radices: impl Into<SmallVec<[usize; 8]>>) -> Self {
        let radices = radices.into();
        let next = if radices.contains(&0) {
            None
        } else {
            Some(smallvec![0; radices.len()])
        };
        Self { radices, next }
    }

    /// Total number of tuples, saturating at `usize::MAX`.
    pub fn total(&self) -> usize {
        self.radices
            .iter()
            .fold(1usize, |acc, r| acc.saturating_mul(*r))
    }
}

impl Iterator for Product {
    type Item = SmallVec<[usize; 8]>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.as_mut()?;
        let out = current.clone();
        let mut wrapped = true;
        for (digit, radix) in current.iter_mut().zip(self.radices.iter()) {
            *digit += 1;
            if *digit < *radix {
                wrapped = false;
                break;
            }
            *digit = 0;
        }
        if wrapped {
            self.next = None;
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(p: Product) -> Vec<Vec<usize>> {
        p.map(|t| t.to_vec()).collect()
    }

    #[test]
    fn counts() {
        let p = Product::new(vec![2, 3]);
        assert_eq!(p.total(), 6);
        assert_eq!(
            collect(p),
            vec![
                vec![0, 0],
                vec![1, 0],
                vec![0, 1],
                vec![1, 1],
                vec![0, 2],
                vec![1, 2]
            ]
        );
    }

    #[test]
    fn degenerate() {
        assert!(collect(Product::new(vec![2, 0, 3])).is_empty());
        assert_eq!(collect(Product::new(Vec::new())), vec![Vec::<usize>::new()]);
        assert_eq!(collect(Product::new(vec![1, 1])), vec![vec![0, 0]]);
    }

    #[test]
    fn restart() {
        let p = Product::new(vec![2, 2, 2]);
        let again = p.clone();
        assert_eq!(p.count(), 8);
        assert_eq!(again.count(), 8);
    }
}
