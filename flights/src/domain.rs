//! Flight offer domain model and the sort engine applied to merged results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalized flight offer as returned to API clients.
///
/// Provider adapters map their upstream wire formats into this record;
/// amounts are always in major currency units after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightOffer {
    pub arrival_time: DateTime<Utc>,
    pub departure_time: DateTime<Utc>,
    pub duration_minutes: i64,
    pub total_amount: f64,
    pub currency: String,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Price,
    Duration,
}

impl SortKey {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "price" => Some(SortKey::Price),
            "duration" => Some(SortKey::Duration),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortOrder::Ascending),
            "desc" => Some(SortOrder::Descending),
            _ => None,
        }
    }
}

/// A fully recognized sort request.
///
/// Both the key and the order must be recognized for a directive to
/// exist; an unrecognized order skips sorting even when the key is
/// valid, so callers keep concatenation order in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortDirective {
    pub fn from_params(sort_by: Option<&str>, order: Option<&str>) -> Option<Self> {
        let key = SortKey::parse(sort_by?)?;
        let order = SortOrder::parse(order?)?;
        Some(SortDirective { key, order })
    }
}

/// Sorts offers in place per the directive.
///
/// The underlying sort is stable; descending order is the ascending sort
/// reversed, so ties mirror exactly between the two orders.
pub fn sort_offers(offers: &mut [FlightOffer], directive: SortDirective) {
    match directive.key {
        SortKey::Price => offers.sort_by(|a, b| a.total_amount.total_cmp(&b.total_amount)),
        SortKey::Duration => offers.sort_by(|a, b| a.duration_minutes.cmp(&b.duration_minutes)),
    }

    if directive.order == SortOrder::Descending {
        offers.reverse();
    }
}
