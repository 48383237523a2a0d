//! Client for the movie-catalog upstream.

use async_trait::async_trait;
use http::StatusCode;
use http::header;
use serde::Deserialize;
use url::Url;

use crate::domain::Movie;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("movie not found")]
    MovieNotFound,
    #[error("downstream unavailable: {body}")]
    DownstreamUnavailable { body: String },
    #[error("unexpected response code: {status}")]
    UnrecognizedStatus { status: StatusCode },
    #[error("invalid box office figure: {value}")]
    InvalidBoxOffice { value: String },
    #[error("invalid endpoint url: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// The movie catalog.
#[async_trait]
pub trait MoviesService: Send + Sync {
    async fn get_movies(&self) -> Result<Vec<Movie>, CatalogError>;
    async fn get_movie(&self, id: i64) -> Result<Movie, CatalogError>;
}

pub struct CatalogClient {
    client: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    pub fn new(client: reqwest::Client, base_url: Url) -> Self {
        CatalogClient { client, base_url }
    }

    async fn get(&self, endpoint: &str) -> Result<reqwest::Response, CatalogError> {
        let url = self.base_url.join(endpoint)?;
        Ok(self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?)
    }
}

#[derive(Deserialize)]
struct MoviesEnvelope {
    data: Vec<WireMovie>,
}

#[derive(Deserialize)]
struct WireMovie {
    id: i64,
    title: String,
    release_date: String,
    // Decimal string on the wire.
    box_office: String,
    duration: i64,
    overview: String,
    phase: i64,
    saga: String,
    chronology: i64,
    post_credit_scenes: i64,
}

impl TryFrom<WireMovie> for Movie {
    type Error = CatalogError;

    fn try_from(wire: WireMovie) -> Result<Self, CatalogError> {
        let box_office = wire
            .box_office
            .parse::<i64>()
            .map_err(|_| CatalogError::InvalidBoxOffice {
                value: wire.box_office.clone(),
            })?;

        Ok(Movie {
            id: wire.id,
            title: wire.title,
            release_date: wire.release_date,
            box_office,
            duration_minutes: wire.duration,
            overview: wire.overview,
            phase: wire.phase,
            saga: wire.saga,
            chronology: wire.chronology,
            post_credit_scenes: wire.post_credit_scenes,
        })
    }
}

#[async_trait]
impl MoviesService for CatalogClient {
    async fn get_movies(&self) -> Result<Vec<Movie>, CatalogError> {
        let response = self.get("movies").await?;

        match response.status() {
            StatusCode::OK => {
                let envelope = response.json::<MoviesEnvelope>().await?;
                envelope.data.into_iter().map(Movie::try_from).collect()
            }
            status if status.is_server_error() => Err(CatalogError::DownstreamUnavailable {
                body: response.text().await?,
            }),
            status => Err(CatalogError::UnrecognizedStatus { status }),
        }
    }

    async fn get_movie(&self, id: i64) -> Result<Movie, CatalogError> {
        let response = self.get(&format!("movies/{id}")).await?;

        match response.status() {
            StatusCode::OK => {
                let wire = response.json::<WireMovie>().await?;
                Movie::try_from(wire)
            }
            StatusCode::NOT_FOUND => Err(CatalogError::MovieNotFound),
            status if status.is_server_error() => Err(CatalogError::DownstreamUnavailable {
                body: response.text().await?,
            }),
            status => Err(CatalogError::UnrecognizedStatus { status }),
        }
    }
}
