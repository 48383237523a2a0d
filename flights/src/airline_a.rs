//! Client for the airline A flight-offer upstream.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use http::StatusCode;
use http::header;
use serde::Deserialize;
use url::Url;

use crate::domain::FlightOffer;
use crate::provider::{FlightsRequest, FlightsService, ProviderError};

/// Airline A nests offers under `data.offers` and prices in minor units.
pub struct AirlineAClient {
    client: reqwest::Client,
    base_url: Url,
}

impl AirlineAClient {
    pub fn new(client: reqwest::Client, base_url: Url) -> Self {
        AirlineAClient { client, base_url }
    }
}

#[derive(Deserialize)]
struct OffersEnvelope {
    data: OffersData,
}

#[derive(Deserialize)]
struct OffersData {
    offers: Vec<WireOffer>,
}

#[derive(Deserialize)]
struct WireOffer {
    arrival: DateTime<Utc>,
    departure: DateTime<Utc>,
    destination: String,
    duration: i64,
    flight_number: String,
    origin: String,
    total_amount: f64,
    total_currency: String,
}

impl From<WireOffer> for FlightOffer {
    fn from(wire: WireOffer) -> Self {
        FlightOffer {
            arrival_time: wire.arrival,
            departure_time: wire.departure,
            duration_minutes: wire.duration,
            // Minor currency units on the wire.
            total_amount: wire.total_amount / 100.0,
            currency: wire.total_currency,
            flight_number: wire.flight_number,
            origin: wire.origin,
            destination: wire.destination,
        }
    }
}

#[async_trait]
impl FlightsService for AirlineAClient {
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
                let envelope = response.json::<OffersEnvelope>().await?;
                Ok(envelope.data.offers.into_iter().map(Into::into).collect())
            }
            status if status.is_server_error() => Err(ProviderError::DownstreamUnavailable {
                body: response.text().await?,
            }),
            status => Err(ProviderError::UnrecognizedStatus { status }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::post;
    use axum::{Json, Router};
    use tokio::net::TcpListener;

    async fn start_mock(router: Router) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Url::parse(&format!("http://{addr}/")).unwrap()
    }

    fn client() -> reqwest::Client {
        reqwest::Client::new()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 10, 21).unwrap()
    }

    #[tokio::test]
    async fn maps_offers_into_domain_records() {
        let router = Router::new().route(
            "/",
            post(|Json(body): Json<serde_json::Value>| async move {
                assert_eq!(body["origin"], "LHR");
                assert_eq!(body["destination"], "JFK");
                assert_eq!(body["departure_date"], "2019-10-21");

                Json(serde_json::json!({
                    "data": {
                        "offers": [{
                            "arrival": "2019-10-21T18:00:00Z",
                            "departure": "2019-10-21T15:00:00Z",
                            "destination": "JFK",
                            "duration": 180,
                            "flight_number": "BA117",
                            "id": "off_1",
                            "origin": "LHR",
                            "total_amount": 12550.0,
                            "total_currency": "GBP"
                        }]
                    }
                }))
            }),
        );
        let base_url = start_mock(router).await;

        let offers = AirlineAClient::new(client(), base_url)
            .get_flights("LHR", "JFK", date())
            .await
            .unwrap();

        assert_eq!(offers.len(), 1);
        let offer = &offers[0];
        assert_eq!(offer.total_amount, 125.50);
        assert_eq!(offer.currency, "GBP");
        assert_eq!(offer.duration_minutes, 180);
        assert_eq!(offer.flight_number, "BA117");
        assert_eq!(offer.origin, "LHR");
        assert_eq!(offer.destination, "JFK");
    }

    #[tokio::test]
    async fn server_error_carries_raw_body() {
        let router = Router::new().route(
            "/",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
        );
        let base_url = start_mock(router).await;

        let error = AirlineAClient::new(client(), base_url)
            .get_flights("LHR", "JFK", date())
            .await
            .unwrap_err();

        match error {
            ProviderError::DownstreamUnavailable { body } => {
                assert_eq!(body, "upstream exploded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unexpected_status_is_reported() {
        let router = Router::new().route("/", post(|| async { StatusCode::IM_A_TEAPOT }));
        let base_url = start_mock(router).await;

        let error = AirlineAClient::new(client(), base_url)
            .get_flights("LHR", "JFK", date())
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            ProviderError::UnrecognizedStatus {
                status: StatusCode::IM_A_TEAPOT,
            }
        ));
    }
}
