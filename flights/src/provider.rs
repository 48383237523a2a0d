//! Provider contract shared by the airline adapters.

use async_trait::async_trait;
use chrono::NaiveDate;
use http::StatusCode;
use serde::Serialize;

use crate::domain::FlightOffer;

#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    /// The upstream answered with a 5xx; the raw error body is kept for logging.
    #[error("downstream unavailable: {body}")]
    DownstreamUnavailable { body: String },
    #[error("unexpected response code: {status}")]
    UnrecognizedStatus { status: StatusCode },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// A single flight-offer upstream.
#[async_trait]
pub trait FlightsService: Send + Sync {
    async fn get_flights(
        &self,
        origin: &str,
        destination: &str,
        departure_date: NaiveDate,
    ) -> Result<Vec<FlightOffer>, ProviderError>;
}

/// Request body both airlines accept on `POST /`.
#[derive(Serialize)]
pub(crate) struct FlightsRequest<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
    pub departure_date: NaiveDate,
}
