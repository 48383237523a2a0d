//! Flight search endpoint.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use flights::domain::{FlightOffer, SortDirective};
use flights::metrics_defs::SEARCH_REQUESTS;
use flights::search::{SearchCriteria, SearchError};
use shared::http::ApiError;

use super::AppState;

/// Body of `POST /flights/search`. Fields default to empty so missing
/// ones fail criteria validation rather than body deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchFlightsRequest {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
}

#[derive(Debug, Deserialize)]
pub struct SortParams {
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

pub async fn search_flights(
    State(state): State<AppState>,
    Query(params): Query<SortParams>,
    Json(body): Json<SearchFlightsRequest>,
) -> Result<Json<Vec<FlightOffer>>, ApiError> {
    let criteria = SearchCriteria::parse(&body.origin, &body.destination, &body.departure_date)
        .map_err(|error| {
            metrics::counter!(SEARCH_REQUESTS.name, "outcome" => "rejected").increment(1);
            ApiError::bad_request(error.to_string())
        })?;

    let directive = SortDirective::from_params(params.sort_by.as_deref(), params.order.as_deref());

    match state.flight_search.search(&criteria, directive).await {
        Ok(offers) => {
            metrics::counter!(SEARCH_REQUESTS.name, "outcome" => "ok").increment(1);
            Ok(Json(offers))
        }
        Err(SearchError::NoOffers) => {
            tracing::error!(
                origin = %criteria.origin,
                destination = %criteria.destination,
                "flight search produced no offers"
            );
            metrics::counter!(SEARCH_REQUESTS.name, "outcome" => "failed").increment(1);
            Err(ApiError::internal())
        }
    }
}
