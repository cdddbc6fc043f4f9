//! Sentiment label counts for one developer

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::counter::FirstSeenCounter;
use crate::dataset::Table;

/// `{<developer>: {<label>: <count>, ...}}`
///
/// Labels serialize in descending count order, so the map is written by hand
/// rather than through a sorted `serde_json::Map`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewsAnalysis {
    pub developer: String,
    pub sentiments: Vec<(String, usize)>,
}

impl ReviewsAnalysis {
    /// Number of labelled reviews counted
    pub fn total(&self) -> usize {
        self.sentiments.iter().map(|(_, n)| n).sum()
    }

    pub fn count(&self, label: &str) -> usize {
        self.sentiments
            .iter()
            .find(|(l, _)| l == label)
            .map_or(0, |(_, n)| *n)
    }
}

struct SentimentCounts<'a>(&'a [(String, usize)]);

impl Serialize for SentimentCounts<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, count) in self.0 {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

impl Serialize for ReviewsAnalysis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.developer, &SentimentCounts(&self.sentiments))?;
        map.end()
    }
}

/// Count each `sentiment_analysis` label among `developer_name`'s rows
/// (exact, case-sensitive match). Rows without a label are not counted.
pub fn developer_reviews_analysis(table: &Table, developer_name: &str) -> ReviewsAnalysis {
    let counter: FirstSeenCounter = table
        .iter()
        .filter(|r| r.developer_is(developer_name))
        .filter_map(|r| r.sentiment_analysis.as_deref())
        .collect();

    ReviewsAnalysis {
        developer: developer_name.to_string(),
        sentiments: counter
            .into_ranked()
            .into_iter()
            .map(|(label, n)| (label.to_string(), n))
            .collect(),
    }
}
