pub mod math;
pub mod serde;

use std::fmt::{self, Debug};

use num::Num;

/// ZeroSpVec is a sparse vector that treats zero elements as absent.
/// It keeps `indices` and `values` side by side:
/// - `inds` holds the logical index of every stored element
/// - `vals` holds the value stored at that index
///
/// Stored elements are guaranteed to be sorted by ascending index,
/// and no stored value is zero.
#[derive(Clone, PartialEq)]
pub struct ZeroSpVec<N>
where
    N: Num,
{
    inds: Vec<usize>,
    vals: Vec<N>,
    len: usize,
}

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    #[inline]
    pub fn new() -> Self {
        Self::with_len(0)
    }

    /// Empty (all zero) vector with `len` logical dimensions
    #[inline]
    pub fn with_len(len: usize) -> Self {
        ZeroSpVec {
            inds: Vec::new(),
            vals: Vec::new(),
            len,
        }
    }

    /// Build from `(index, value)` pairs in any order.
    /// Zero values are dropped, repeated indices are summed.
    ///
    /// # Panics
    /// Debug builds panic if an index is outside `0..len`.
    pub fn from_pairs<I>(len: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, N)>,
    {
        let mut pairs: Vec<(usize, N)> = pairs.into_iter().collect();
        pairs.sort_unstable_by_key(|(idx, _)| *idx);

        let mut vec = ZeroSpVec::with_len(len);
        vec.inds.reserve(pairs.len());
        vec.vals.reserve(pairs.len());
        for (idx, val) in pairs {
            debug_assert!(idx < len, "index {idx} out of bounds for length {len}");
            if vec.inds.last().copied() == Some(idx) {
                if let Some(acc) = vec.vals.last_mut() {
                    *acc = *acc + val;
                }
            } else {
                vec.inds.push(idx);
                vec.vals.push(val);
            }
        }
        vec.drop_zeros();
        vec
    }

    /// Dense to sparse
    #[inline]
    pub fn from_vec(vec: Vec<N>) -> Self {
        let len = vec.len();
        Self::from_pairs(len, vec.into_iter().enumerate())
    }

    fn drop_zeros(&mut self) {
        if self.vals.iter().all(|v| !v.is_zero()) {
            return;
        }
        let (inds, vals): (Vec<usize>, Vec<N>) = self
            .inds
            .iter()
            .zip(self.vals.iter())
            .filter(|(_, v)| !v.is_zero())
            .map(|(i, v)| (*i, *v))
            .unzip();
        self.inds = inds;
        self.vals = vals;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Logical dimension
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of stored (non zero) elements
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.inds.is_empty()
    }

    /// Value at logical `index`; `None` when out of range
    #[inline]
    pub fn get(&self, index: usize) -> Option<N> {
        if index >= self.len {
            return None;
        }
        match self.inds.binary_search(&index) {
            Ok(pos) => Some(self.vals[pos]),
            Err(_) => Some(N::zero()),
        }
    }

    /// Iterate stored elements as `(index, &value)` in ascending index order
    #[inline]
    pub fn raw_iter(&self) -> impl ExactSizeIterator<Item = (usize, &N)> + '_ {
        self.inds.iter().copied().zip(self.vals.iter())
    }

    /// Iterate all logical elements, zeros included
    pub fn iter(&self) -> impl Iterator<Item = N> + '_ {
        let mut stored = self.raw_iter().peekable();
        (0..self.len).map(move |i| match stored.peek() {
            Some(&(idx, val)) if idx == i => {
                stored.next();
                *val
            }
            _ => N::zero(),
        })
    }

    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.inds.shrink_to_fit();
        self.vals.shrink_to_fit();
    }
}

impl<N> Default for ZeroSpVec<N>
where
    N: Num + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Debug for ZeroSpVec<N>
where
    N: Num + Copy + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_struct("ZeroSpVec")
                .field("len", &self.len)
                .field("nnz", &self.nnz())
                .field("entries", &self.raw_iter().collect::<Vec<_>>())
                .finish()
        } else {
            f.debug_map().entries(self.raw_iter()).finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_sorts_merges_and_drops_zeros() {
        let vec = ZeroSpVec::from_pairs(6, vec![(4, 2.0), (1, 1.0), (4, 3.0), (2, 0.0)]);
        assert_eq!(vec.len(), 6);
        assert_eq!(vec.nnz(), 2);
        assert_eq!(vec.raw_iter().map(|(i, v)| (i, *v)).collect::<Vec<_>>(), vec![(1, 1.0), (4, 5.0)]);
    }

    #[test]
    fn get_distinguishes_zero_and_out_of_range() {
        let vec = ZeroSpVec::from_vec(vec![0u32, 7, 0]);
        assert_eq!(vec.get(0), Some(0));
        assert_eq!(vec.get(1), Some(7));
        assert_eq!(vec.get(3), None);
    }

    #[test]
    fn dense_iteration_restores_zeros() {
        let dense = vec![0.0, 1.5, 0.0, 0.0, 2.5];
        let vec = ZeroSpVec::from_vec(dense.clone());
        assert_eq!(vec.iter().collect::<Vec<f64>>(), dense);
    }

    #[test]
    fn all_zero_vector_keeps_dimension() {
        let vec: ZeroSpVec<f64> = ZeroSpVec::with_len(3);
        assert!(vec.is_zero());
        assert!(!vec.is_empty());
        assert_eq!(vec.nnz(), 0);
    }
}
