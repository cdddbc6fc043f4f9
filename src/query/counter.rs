//! Label counting in first-seen order

use std::collections::HashMap;

/// Counts string keys, remembering the order in which each key first
/// appeared so that ties resolve deterministically.
#[derive(Debug, Default)]
pub(crate) struct FirstSeenCounter<'a> {
    index: HashMap<&'a str, usize>,
    counts: Vec<(&'a str, usize)>,
}

impl<'a> FirstSeenCounter<'a> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, key: &'a str) {
        match self.index.get(key) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(key, self.counts.len());
                self.counts.push((key, 1));
            }
        }
    }

    /// Descending by count; equal counts keep first-seen order.
    pub(crate) fn into_ranked(self) -> Vec<(&'a str, usize)> {
        let mut counts = self.counts;
        // sort_by is stable
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

impl<'a> FromIterator<&'a str> for FirstSeenCounter<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counter = Self::new();
        for key in iter {
            counter.add(key);
        }
        counter
    }
}
