//! Client for the airline B flight-offer upstream.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use http::StatusCode;
use http::header;
use serde::Deserialize;
use url::Url;

use crate::domain::FlightOffer;
use crate::provider::{FlightsRequest, FlightsService, ProviderError};

/// Airline B lists flights at the top level, prices in major units, and
/// sends no duration; it is derived from the timestamps instead.
pub struct AirlineBClient {
    client: reqwest::Client,
    base_url: Url,
}

impl AirlineBClient {
    pub fn new(client: reqwest::Client, base_url: Url) -> Self {
        AirlineBClient { client, base_url }
    }
}

#[derive(Deserialize)]
struct FlightsEnvelope {
    flights: Vec<WireFlight>,
}

#[derive(Deserialize)]
struct WireFlight {
    arrival: DateTime<Utc>,
    currency: String,
    departure: DateTime<Utc>,
    dest: String,
    flight_number: String,
    origin: String,
    price: WirePrice,
}

#[derive(Deserialize)]
struct WirePrice {
    amount: f64,
}

impl From<WireFlight> for FlightOffer {
    fn from(wire: WireFlight) -> Self {
        // Duration is not on the wire; clamp so inverted timestamps
        // cannot produce a negative duration.
        let duration_minutes = (wire.arrival - wire.departure).num_minutes().max(0);

        FlightOffer {
            arrival_time: wire.arrival,
            departure_time: wire.departure,
            duration_minutes,
            total_amount: wire.price.amount,
            currency: wire.currency,
            flight_number: wire.flight_number,
            origin: wire.origin,
            destination: wire.dest,
        }
    }
}

#[async_trait]
impl FlightsService for AirlineBClient {
    async fn get_flights(
        &self,
        origin: &str,
        destination: &str,
        departure_date: NaiveDate,
    ) -> Result<Vec<FlightOffer>, ProviderError> {
        let body = FlightsRequest {
            origin,
            destination,
            departure_date,
        };

        let response = self
            .client
            .post(self.base_url.clone())
            .header(header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let envelope = response.json::<FlightsEnvelope>().await?;
                Ok(envelope.flights.into_iter().map(Into::into).collect())
            }
            status if status.is_server_error() => Err(ProviderError::DownstreamUnavailable {
                body: response.text().await?,
            }),
            status => Err(ProviderError::UnrecognizedStatus { status }),
        }
    }
}
