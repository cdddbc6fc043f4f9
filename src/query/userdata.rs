//! Spend, recommendation ratio and item count for one user

use serde::Serialize;

use super::format;
use crate::dataset::Table;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserData {
    #[serde(rename = "Usuario")]
    pub user: String,
    /// `"<sum of price> USD"`
    #[serde(rename = "Dinero gastado")]
    pub money_spent: String,
    /// `"<mean of recommend × 100, 2 decimals>%"`; null when no row
    /// carries a recommendation
    #[serde(rename = "% de recomendación")]
    pub recommend_percentage: Option<String>,
    #[serde(rename = "Cantidad de items")]
    pub items: usize,
}

/// Summarize every row whose `user_id` equals `user_id` exactly.
///
/// An unknown user yields `0.0 USD`, zero items and a null percentage.
pub fn userdata(table: &Table, user_id: &str) -> UserData {
    let mut spent = 0.0;
    let mut items = 0;
    let mut recommended = 0usize;
    let mut rated = 0usize;

    for record in table.iter().filter(|r| r.user_is(user_id)) {
        items += 1;
        if let Some(price) = record.price {
            spent += price;
        }
        if let Some(recommend) = record.recommend {
            rated += 1;
            if recommend {
                recommended += 1;
            }
        }
    }

    let ratio = (rated > 0).then(|| recommended as f64 / rated as f64 * 100.0);

    UserData {
        user: user_id.to_string(),
        money_spent: format::usd(spent),
        recommend_percentage: format::percentage(ratio),
        items,
    }
}
