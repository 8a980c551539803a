use std::fmt::{self, Debug, Display};

/// One ranked candidate
#[derive(Debug, Clone, PartialEq)]
pub struct HitEntry<K> {
    pub key: K,
    pub score: f64,
    /// position of the document in the corpus
    pub position: usize,
}

/// Structure to store ranking results
#[derive(Clone, PartialEq)]
pub struct Hits<K> {
    pub list: Vec<HitEntry<K>>,
}

impl<K> Hits<K> {
    pub fn new(list: Vec<HitEntry<K>>) -> Self {
        Hits { list }
    }

    /// Sort by descending score; equal scores keep ascending corpus position.
    /// NaN scores are removed.
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        self.list.retain(|hit| !hit.score.is_nan());
        self.list.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.position.cmp(&b.position))
        });
        self
    }

    /// Keep the first `k` entries
    pub fn truncate(&mut self, k: usize) -> &mut Self {
        self.list.truncate(k);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.list.iter().map(|hit| &hit.key)
    }

    pub fn into_keys(self) -> Vec<K> {
        self.list.into_iter().map(|hit| hit.key).collect()
    }
}

impl<K> Debug for Hits<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Hits [")?;
            for hit in &self.list {
                writeln!(f, "    {:?}: {:.6} (pos: {})", hit.key, hit.score, hit.position)?;
            }
            write!(f, "]")
        } else {
            f.debug_list()
                .entries(self.list.iter().map(|hit| (&hit.key, hit.score)))
                .finish()
        }
    }
}

impl<K> Display for Hits<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, hit) in self.list.iter().enumerate() {
            writeln!(f, "{:>3}. {:?} ({:.4})", rank + 1, hit.key, hit.score)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(key: &'static str, score: f64, position: usize) -> HitEntry<&'static str> {
        HitEntry { key, score, position }
    }

    #[test]
    fn ties_break_on_corpus_position() {
        let mut hits = Hits::new(vec![
            hit("d", 0.5, 3),
            hit("b", 0.9, 1),
            hit("c", 0.5, 2),
            hit("e", 0.5, 0),
        ]);
        hits.sort_by_score_desc();
        assert_eq!(hits.keys().copied().collect::<Vec<_>>(), vec!["b", "e", "c", "d"]);
    }

    #[test]
    fn nan_scores_are_dropped() {
        let mut hits = Hits::new(vec![hit("a", f64::NAN, 0), hit("b", 0.0, 1)]);
        hits.sort_by_score_desc().truncate(5);
        assert_eq!(hits.into_keys(), vec!["b"]);
    }

    #[test]
    fn display_lists_ranks() {
        let hits = Hits::new(vec![hit("Alien", 0.75, 4)]);
        assert_eq!(hits.to_string(), "  1. \"Alien\" (0.7500)\n");
    }
}
