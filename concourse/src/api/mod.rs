//! HTTP surface: router assembly and the request handlers.

pub mod flights;
pub mod movies;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use ::flights::search::FlightSearch;
use ::movies::client::MoviesService;

#[derive(Clone)]
pub struct AppState {
    pub flight_search: Arc<FlightSearch>,
    pub movies: Arc<dyn MoviesService>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/flights/search", post(flights::search_flights))
        .route("/api/v1/movies", get(movies::get_movies))
        .route("/api/v1/movies/{id}", get(movies::get_movie))
        .route("/api/v1/sagas", get(movies::get_sagas))
        .route("/api/v1/sagas/{name}", get(movies::get_saga))
        .with_state(state)
}
