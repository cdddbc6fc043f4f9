//! Items per year and free-content ratio for one developer

use std::collections::BTreeMap;

use serde::Serialize;

use crate::dataset::Table;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeveloperYear {
    #[serde(rename = "Año")]
    pub year: i32,
    #[serde(rename = "Cantidad de Items")]
    pub items: usize,
    /// Percentage (0-100) of the year's rows with price exactly 0
    #[serde(rename = "Contenido Free")]
    pub free_content: f64,
}

/// One entry per year in which `developer_name` has rows, ascending by year.
///
/// The developer match is exact and case-sensitive. Rows without a year are
/// not grouped.
pub fn developer(table: &Table, developer_name: &str) -> Vec<DeveloperYear> {
    // year -> (rows, free rows)
    let mut by_year: BTreeMap<i32, (usize, usize)> = BTreeMap::new();

    for record in table.iter().filter(|r| r.developer_is(developer_name)) {
        let Some(year) = record.year else { continue };
        let bucket = by_year.entry(year).or_default();
        bucket.0 += 1;
        if record.is_free() {
            bucket.1 += 1;
        }
    }

    by_year
        .into_iter()
        .map(|(year, (items, free))| DeveloperYear {
            year,
            items,
            free_content: free as f64 / items as f64 * 100.0,
        })
        .collect()
}
