//! Transfer list documents as pasted from and copied back into the game.
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::InputError;
use crate::numbers::integral_f64_to_u64;

/// One resource movement between two realms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferItem {
    pub from: i64,
    pub to: i64,
    pub resource: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: u64,
    /// Keys the game attaches that this tool does not interpret. Carried
    /// through untouched by the multiply transform.
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl TransferItem {
    #[must_use]
    pub fn new(from: i64, to: i64, resource: impl Into<String>, amount: u64) -> Self {
        Self {
            from,
            to,
            resource: resource.into(),
            amount,
            extra: Map::new(),
        }
    }
}

/// Ordered list of transfers, the only shape accepted and produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferList {
    pub items: Vec<TransferItem>,
}

impl TransferList {
    #[must_use]
    pub const fn new(items: Vec<TransferItem>) -> Self {
        Self { items }
    }

    /// Parse a pasted transfer document.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MalformedTransferList`] when the text is not JSON
    /// or does not match the `{"items": [...]}` shape.
    pub fn parse(text: &str) -> Result<Self, InputError> {
        serde_json::from_str(text).map_err(|e| InputError::MalformedTransferList(e.to_string()))
    }

    /// Render with two-space indentation, the format the game accepts back.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all amounts, saturating.
    #[must_use]
    pub fn total_amount(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, item| acc.saturating_add(item.amount))
    }
}

/// Accept any non-negative integral JSON number, including `100.0`.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    number
        .as_u64()
        .or_else(|| number.as_f64().and_then(integral_f64_to_u64))
        .ok_or_else(|| {
            serde::de::Error::custom(format!(
                "amount must be a non-negative whole number, got {number}"
            ))
        })
}
