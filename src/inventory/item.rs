use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpiryParseError {
    #[error("Expiry is not an ISO date or RFC 3339 timestamp: {0:?}")]
    Invalid(String),
}

/// Where an item stands in the household. Missing input defaults to `In`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    In,
    Consumed,
    Discarded,
}

/// A food item the caller has on hand. The pipeline only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "expiryISO", deserialize_with = "deserialize_expiry")]
    pub expiry: NaiveDate,
    #[serde(default, deserialize_with = "deserialize_status")]
    pub status: ItemStatus,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, expiry: NaiveDate) -> Self {
        Self {
            name: name.into(),
            expiry,
            status: ItemStatus::In,
        }
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_in_stock(&self) -> bool {
        self.status == ItemStatus::In
    }
}

/// Parse an expiry string.
///
/// Accepts `YYYY-MM-DD`, or an RFC 3339 timestamp whose calendar date (in
/// its own offset) is used.
pub fn parse_expiry(raw: &str) -> Result<NaiveDate, ExpiryParseError> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .map_err(|_| ExpiryParseError::Invalid(raw.to_string()))
}

fn deserialize_expiry<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_expiry(&raw).map_err(serde::de::Error::custom)
}

/// `null` counts as absent.
fn deserialize_status<'de, D>(deserializer: D) -> Result<ItemStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ItemStatus>::deserialize(deserializer)?.unwrap_or_default())
}
