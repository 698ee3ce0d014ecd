//! The two transfer transforms: scaling amounts and deriving donkey shipments.
use serde::{Deserialize, Serialize};

use crate::constants::{DONKEY_CAPACITY, DONKEY_RESOURCE};
use crate::error::InputError;
use crate::numbers::{ceil_div_u64, round_f64_to_u64, u64_to_f64};
use crate::transfer::{TransferItem, TransferList};

/// How carrier transfers are keyed and merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarrierMode {
    /// Donkeys go to the realm each transfer is sent *from*; transfers that
    /// share a sender are merged into one shipment.
    #[default]
    AggregateByOrigin,
    /// Donkeys go to each transfer's destination, one shipment per transfer.
    PerTransfer,
}

impl CarrierMode {
    /// Stable value used by the UI toggle.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::AggregateByOrigin => "aggregate_by_origin",
            Self::PerTransfer => "per_transfer",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "aggregate_by_origin" => Some(Self::AggregateByOrigin),
            "per_transfer" => Some(Self::PerTransfer),
            _ => None,
        }
    }
}

/// Parse the multiplier field.
///
/// # Errors
///
/// Returns [`InputError::InvalidMultiplier`] for empty, non-numeric,
/// non-finite, or negative input.
pub fn parse_multiplier(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|factor| factor.is_finite() && *factor >= 0.0)
        .ok_or_else(|| InputError::InvalidMultiplier(text.to_string()))
}

/// Parse the sending realm id.
///
/// # Errors
///
/// Returns [`InputError::InvalidRealmId`] for empty or non-integer input.
pub fn parse_realm_id(text: &str) -> Result<i64, InputError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| InputError::InvalidRealmId(text.to_string()))
}

/// Scale every amount by `factor`, rounding to the nearest whole unit.
#[must_use]
pub fn multiply(list: &TransferList, factor: f64) -> TransferList {
    let items = list
        .items
        .iter()
        .map(|item| TransferItem {
            amount: round_f64_to_u64(u64_to_f64(item.amount) * factor),
            ..item.clone()
        })
        .collect();
    TransferList::new(items)
}

/// Donkeys needed to haul `amount` units.
#[must_use]
pub const fn donkeys_for(amount: u64) -> u64 {
    ceil_div_u64(amount, DONKEY_CAPACITY)
}

/// Build the donkey shipments from `source` needed to move every transfer.
#[must_use]
pub fn derive_carriers(list: &TransferList, source: i64, mode: CarrierMode) -> TransferList {
    let candidates = list.items.iter().filter_map(|item| {
        let amount = donkeys_for(item.amount);
        if amount == 0 {
            return None;
        }
        let destination = match mode {
            CarrierMode::AggregateByOrigin => item.from,
            CarrierMode::PerTransfer => item.to,
        };
        Some(TransferItem::new(source, destination, DONKEY_RESOURCE, amount))
    });

    let items = match mode {
        CarrierMode::PerTransfer => candidates.collect(),
        CarrierMode::AggregateByOrigin => {
            let mut merged: Vec<TransferItem> = Vec::new();
            for candidate in candidates {
                if let Some(existing) = merged.iter_mut().find(|m| m.to == candidate.to) {
                    existing.amount = existing.amount.saturating_add(candidate.amount);
                } else {
                    merged.push(candidate);
                }
            }
            merged
        }
    };
    TransferList::new(items)
}

/// Parse both inputs and run [`multiply`].
///
/// # Errors
///
/// Returns the first parse failure: malformed transfer JSON, then an invalid
/// multiplier.
pub fn run_multiply(transfers: &str, multiplier: &str) -> Result<TransferList, InputError> {
    let list = TransferList::parse(transfers)?;
    let factor = parse_multiplier(multiplier)?;
    let out = multiply(&list, factor);
    log::debug!("multiplied {} transfers by {factor}", out.len());
    Ok(out)
}

/// Parse both inputs and run [`derive_carriers`].
///
/// # Errors
///
/// Returns the first parse failure: malformed transfer JSON, then an invalid
/// realm id.
pub fn run_send_donkeys(
    transfers: &str,
    realm_id: &str,
    mode: CarrierMode,
) -> Result<TransferList, InputError> {
    let list = TransferList::parse(transfers)?;
    let source = parse_realm_id(realm_id)?;
    let out = derive_carriers(&list, source, mode);
    log::debug!(
        "derived {} donkey shipments ({} donkeys) from realm {source}",
        out.len(),
        out.total_amount()
    );
    Ok(out)
}
