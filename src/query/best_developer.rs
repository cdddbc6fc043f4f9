//! Most-recommended developers of a year

use serde::Serialize;

use super::counter::FirstSeenCounter;
use crate::dataset::Table;

/// Size of the ranking returned by [`best_developer_year`]
pub const TOP_DEVELOPERS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeveloperRank {
    #[serde(rename = "Desarrollador")]
    pub developer: String,
    #[serde(rename = "Cantidad de juegos recomendados")]
    pub recommended: usize,
}

/// Count recommended rows of `year` per developer and keep the top three,
/// descending. Equal counts rank in the order the developers first appear
/// in the table.
pub fn best_developer_year(table: &Table, year: i32) -> Vec<DeveloperRank> {
    let counter: FirstSeenCounter = table
        .iter()
        .filter(|r| r.year == Some(year) && r.recommend == Some(true))
        .filter_map(|r| r.developer.as_deref())
        .collect();

    counter
        .into_ranked()
        .into_iter()
        .take(TOP_DEVELOPERS)
        .map(|(developer, recommended)| DeveloperRank {
            developer: developer.to_string(),
            recommended,
        })
        .collect()
}
