//! Search criteria validation and the two-provider aggregator.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{FlightOffer, SortDirective, sort_offers};
use crate::metrics_defs::PROVIDER_FAILURES;
use crate::provider::{FlightsService, ProviderError};

/// Validated flight search input.
///
/// Construction goes through [`SearchCriteria::parse`] so no provider is
/// ever called with an unvalidated date or airport code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid departure date, must be of format YYYY-MM-DD")]
    InvalidDepartureDate,
    #[error("Invalid airport code for origin")]
    InvalidOrigin,
    #[error("Invalid airport code for destination")]
    InvalidDestination,
}

impl SearchCriteria {
    pub fn parse(
        origin: &str,
        destination: &str,
        departure_date: &str,
    ) -> Result<Self, ValidationError> {
        let departure_date = NaiveDate::parse_from_str(departure_date, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDepartureDate)?;

        if origin.len() > 3 {
            return Err(ValidationError::InvalidOrigin);
        }
        if destination.len() > 3 {
            return Err(ValidationError::InvalidDestination);
        }

        Ok(SearchCriteria {
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_date,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// Both providers failed or returned nothing.
    #[error("no flight offers available")]
    NoOffers,
}

/// Fans a search out to both airlines and merges the survivors.
pub struct FlightSearch {
    airline_a: Arc<dyn FlightsService>,
    airline_b: Arc<dyn FlightsService>,
}

impl FlightSearch {
    pub fn new(airline_a: Arc<dyn FlightsService>, airline_b: Arc<dyn FlightsService>) -> Self {
        FlightSearch {
            airline_a,
            airline_b,
        }
    }

    /// Queries both providers concurrently and concatenates their offers,
    /// airline A first. A failed provider is logged and skipped; only a
    /// fully empty merge is an error.
    pub async fn search(
        &self,
        criteria: &SearchCriteria,
        directive: Option<SortDirective>,
    ) -> Result<Vec<FlightOffer>, SearchError> {
        let (from_a, from_b) = tokio::join!(
            self.airline_a.get_flights(
                &criteria.origin,
                &criteria.destination,
                criteria.departure_date,
            ),
            self.airline_b.get_flights(
                &criteria.origin,
                &criteria.destination,
                criteria.departure_date,
            ),
        );

        let mut offers = Vec::new();
        append_offers(&mut offers, from_a, "airline_a");
        append_offers(&mut offers, from_b, "airline_b");

        if offers.is_empty() {
            return Err(SearchError::NoOffers);
        }

        if let Some(directive) = directive {
            sort_offers(&mut offers, directive);
        }

        Ok(offers)
    }
}

fn append_offers(
    merged: &mut Vec<FlightOffer>,
    result: Result<Vec<FlightOffer>, ProviderError>,
    airline: &'static str,
) {
    match result {
        Ok(offers) => merged.extend(offers),
        Err(error) => {
            tracing::warn!(airline, %error, "dropping failed provider response");
            metrics::counter!(PROVIDER_FAILURES.name, "airline" => airline).increment(1);
        }
    }
}
