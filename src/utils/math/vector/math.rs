use std::cmp::Ordering;
use std::ops::AddAssign;

use num::Num;

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    /// Dot product of two sparse vectors.
    /// Walks both index lists once, O(nnz(a) + nnz(b)).
    ///
    /// # Arguments
    /// * `other` - another vector of the same dimension
    ///
    /// # Returns
    /// * `R` - the dot product in the accumulator type
    #[inline]
    pub fn dot<R>(&self, other: &Self) -> R
    where
        R: Num + AddAssign,
        N: Into<R>,
    {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );

        let mut result = R::zero();
        let mut a_it = self.raw_iter();
        let mut b_it = other.raw_iter();
        let mut a_next = a_it.next();
        let mut b_next = b_it.next();

        while let (Some((ia, va)), Some((ib, vb))) = (a_next, b_next) {
            match ia.cmp(&ib) {
                Ordering::Equal => {
                    result += (*va).into() * (*vb).into();
                    a_next = a_it.next();
                    b_next = b_it.next();
                }
                Ordering::Less => a_next = a_it.next(),
                Ordering::Greater => b_next = b_it.next(),
            }
        }
        result
    }

    /// Squared euclidean norm
    #[inline]
    pub fn norm_sq<R>(&self) -> R
    where
        R: Num + AddAssign + Copy,
        N: Into<R>,
    {
        let mut result = R::zero();
        for (_, val) in self.raw_iter() {
            let val: R = (*val).into();
            result += val * val;
        }
        result
    }

    /// Element-wise product with a dense vector.
    /// Only stored elements are visited; indices past `dense` become zero.
    pub fn hadamard_dense(&self, dense: &[N]) -> Self {
        ZeroSpVec::from_pairs(
            self.len(),
            self.raw_iter()
                .map(|(idx, val)| (idx, *val * dense.get(idx).copied().unwrap_or(N::zero()))),
        )
    }
}
