//! Handlers for the movie-catalog endpoints.

use axum::Json;
use axum::extract::{Path, State};

use movies::client::CatalogError;
use movies::domain::{self, Movie, Saga};
use shared::http::ApiError;

use super::AppState;

pub async fn get_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = fetch_catalog(&state).await?;
    Ok(Json(movies))
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    let id = id
        .parse::<i64>()
        .map_err(|_| ApiError::bad_request("Invalid movie ID"))?;

    match state.movies.get_movie(id).await {
        Ok(movie) => Ok(Json(movie)),
        Err(CatalogError::MovieNotFound) => Err(ApiError::not_found("Movie not found")),
        Err(error) => {
            tracing::error!(%error, movie_id = id, "failed to fetch movie from catalog");
            Err(ApiError::internal())
        }
    }
}

pub async fn get_sagas(State(state): State<AppState>) -> Result<Json<Vec<Saga>>, ApiError> {
    let movies = fetch_catalog(&state).await?;
    Ok(Json(domain::group_by_saga(&movies)))
}

pub async fn get_saga(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Saga>, ApiError> {
    let movies = fetch_catalog(&state).await?;
    let saga =
        domain::get_saga(&movies, &name).map_err(|_| ApiError::not_found("Saga not found"))?;

    Ok(Json(saga))
}

async fn fetch_catalog(state: &AppState) -> Result<Vec<Movie>, ApiError> {
    state.movies.get_movies().await.map_err(|error| {
        tracing::error!(%error, "failed to fetch movies from catalog");
        ApiError::internal()
    })
}
