//! One row of the consultable table
//!
//! Cells are deserialized straight from CSV. Empty cells (and the literal
//! `nan` that dataframe exports sometimes emit) become `None`. Text cells keep
//! their exact content; numbers and flags may be padded.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// A single (user, game, review) fact
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    #[serde(deserialize_with = "text")]
    pub developer: Option<String>,
    #[serde(deserialize_with = "whole_number")]
    pub year: Option<i32>,
    #[serde(deserialize_with = "text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "decimal")]
    pub price: Option<f64>,
    #[serde(deserialize_with = "text")]
    pub user_id: Option<String>,
    #[serde(deserialize_with = "flag")]
    pub recommend: Option<bool>,
    #[serde(deserialize_with = "decimal")]
    pub playtime_forever: Option<f64>,
    #[serde(deserialize_with = "text")]
    pub genres: Option<String>,
    #[serde(deserialize_with = "text")]
    pub sentiment_analysis: Option<String>,
}

impl Record {
    pub fn is_free(&self) -> bool {
        self.price == Some(0.0)
    }

    pub fn developer_is(&self, name: &str) -> bool {
        self.developer.as_deref() == Some(name)
    }

    pub fn user_is(&self, user_id: &str) -> bool {
        self.user_id.as_deref() == Some(user_id)
    }

    /// Case-insensitive substring match on the genres cell.
    ///
    /// `needle` must already be lowercased.
    pub fn genres_contain(&self, needle: &str) -> bool {
        self.genres
            .as_deref()
            .is_some_and(|g| g.to_lowercase().contains(needle))
    }
}

/// The cell exactly as written, or `None` when it is blank or `nan`.
fn raw_cell<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let raw: Option<String> = Option::deserialize(d)?;
    Ok(raw.filter(|s| {
        let trimmed = s.trim();
        !(trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan"))
    }))
}

/// Text is kept verbatim, surrounding whitespace included, so that
/// equality filters see the stored value.
fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    raw_cell(d)
}

/// Numeric and flag cells tolerate padding.
fn scalar_cell<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(raw_cell(d)?.map(|s| s.trim().to_string()))
}

fn decimal<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    match scalar_cell(d)? {
        None => Ok(None),
        Some(s) => s
            .parse::<f64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid number '{}'", s))),
    }
}

/// Accepts `2015` as well as the `2015.0` a float column export produces.
fn whole_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i32>, D::Error> {
    match scalar_cell(d)? {
        None => Ok(None),
        Some(s) => {
            if let Ok(v) = s.parse::<i32>() {
                return Ok(Some(v));
            }
            match s.parse::<f64>() {
                Ok(v) if v.fract() == 0.0 && v >= i32::MIN as f64 && v <= i32::MAX as f64 => {
                    Ok(Some(v as i32))
                }
                _ => Err(de::Error::custom(format!("invalid year '{}'", s))),
            }
        }
    }
}

fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
    match scalar_cell(d)? {
        None => Ok(None),
        Some(s) => match s.to_ascii_lowercase().as_str() {
            "1" | "1.0" | "true" => Ok(Some(true)),
            "0" | "0.0" | "false" => Ok(Some(false)),
            _ => Err(de::Error::custom(format!("invalid boolean '{}'", s))),
        },
    }
}
