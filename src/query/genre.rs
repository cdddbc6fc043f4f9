//! Top player and yearly playtime for a genre

use std::collections::BTreeMap;

use serde::Serialize;

use super::errors::{QueryError, QueryResult};
use crate::dataset::{Record, Table};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearHours {
    #[serde(rename = "Año")]
    pub year: i32,
    #[serde(rename = "Horas")]
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenrePlaytime {
    #[serde(rename = "Usuario con más horas jugadas para Género")]
    pub top_user: Option<String>,
    #[serde(rename = "Horas jugadas")]
    pub hours_by_year: Vec<YearHours>,
}

/// Rows whose genres contain `genre` (case-insensitive substring).
///
/// The top user is taken from the single row with the largest
/// `playtime_forever`; the first such row wins a tie. Hours are summed per
/// year, ascending.
///
/// # Errors
///
/// - [`QueryError::NoMatchingRows`] when no row mentions the genre
/// - [`QueryError::MissingValues`] when matching rows carry no playtime
pub fn user_for_genre(table: &Table, genre: &str) -> QueryResult<GenrePlaytime> {
    let needle = genre.to_lowercase();
    let matching: Vec<&Record> = table.iter().filter(|r| r.genres_contain(&needle)).collect();

    if matching.is_empty() {
        return Err(QueryError::no_matching_rows("genre", genre));
    }

    let mut top: Option<(&Record, f64)> = None;
    for record in &matching {
        let Some(playtime) = record.playtime_forever else { continue };
        // strict comparison keeps the earliest row on ties
        if top.map_or(true, |(_, best)| playtime > best) {
            top = Some((*record, playtime));
        }
    }

    let Some((top_record, _)) = top else {
        return Err(QueryError::missing_values("playtime_forever", "genre", genre));
    };

    let mut by_year: BTreeMap<i32, f64> = BTreeMap::new();
    for record in &matching {
        let Some(year) = record.year else { continue };
        *by_year.entry(year).or_insert(0.0) += record.playtime_forever.unwrap_or(0.0);
    }

    Ok(GenrePlaytime {
        top_user: top_record.user_id.clone(),
        hours_by_year: by_year
            .into_iter()
            .map(|(year, hours)| YearHours { year, hours })
            .collect(),
    })
}
