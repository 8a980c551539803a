use rayon::prelude::*;

/// Symmetric N x N similarity matrix, upper triangle packed row by row.
/// Holds N(N+1)/2 scores; `get(i, j)` and `get(j, i)` read the same cell.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SimilarityMatrix {
    /// Fill the matrix with `score(i, j)` for every `i <= j`.
    /// Rows are computed independently, so `parallel` only changes the schedule.
    pub fn build<F>(n: usize, parallel: bool, score: F) -> Self
    where
        F: Fn(usize, usize) -> f64 + Sync,
    {
        let row = |i: usize| (i..n).map(|j| score(i, j)).collect::<Vec<f64>>();
        let rows: Vec<Vec<f64>> = if parallel {
            (0..n).into_par_iter().map(row).collect()
        } else {
            (0..n).map(row).collect()
        };
        let mut data = Vec::with_capacity(n * (n + 1) / 2);
        rows.into_iter().for_each(|r| data.extend(r));
        Self { n, data }
    }

    #[inline]
    fn offset(&self, i: usize) -> usize {
        i * (2 * self.n - i + 1) / 2
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.n || j >= self.n {
            return None;
        }
        let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
        self.data.get(self.offset(lo) + (hi - lo)).copied()
    }

    /// Full row `i` in column order
    pub fn row(&self, i: usize) -> Vec<f64> {
        (0..self.n).filter_map(|j| self.get(i, j)).collect()
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }
}
