//! Movie catalog domain model and saga/phase grouping.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub release_date: String,
    pub box_office: i64,
    pub duration_minutes: i64,
    pub overview: String,
    pub phase: i64,
    pub saga: String,
    pub chronology: i64,
    pub post_credit_scenes: i64,
}

/// A saga aggregated from its movies, in catalog order: the start and
/// end dates are the release dates of the first and last movie as the
/// catalog lists them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Saga {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub total_box_office: i64,
    pub total_duration_minutes: i64,
    pub total_movies: usize,
    pub phases: Vec<Phase>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phase {
    pub number: i64,
    pub movies: Vec<Movie>,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("saga not found")]
pub struct SagaNotFound;

/// Groups movies into sagas ordered by start date.
pub fn group_by_saga(movies: &[Movie]) -> Vec<Saga> {
    let mut sagas: Vec<Saga> = grouped_by_saga(movies)
        .into_iter()
        .map(|(name, movies)| build_saga(name, &movies))
        .collect();

    sagas.sort_by(|a, b| a.start_date.cmp(&b.start_date));
    sagas
}

/// Looks a saga up by name, title-casing the input first so `infinity
/// saga` finds `Infinity Saga`.
pub fn get_saga(movies: &[Movie], name: &str) -> Result<Saga, SagaNotFound> {
    let wanted = title_case(name);
    let (name, movies) = grouped_by_saga(movies)
        .into_iter()
        .find(|(name, _)| *name == wanted)
        .ok_or(SagaNotFound)?;

    Ok(build_saga(name, &movies))
}

/// Groups movies into phases ordered by phase number.
pub fn group_by_phase(movies: &[Movie]) -> Vec<Phase> {
    let mut order: Vec<i64> = Vec::new();
    let mut grouped: HashMap<i64, Vec<Movie>> = HashMap::new();

    for movie in movies {
        if !grouped.contains_key(&movie.phase) {
            order.push(movie.phase);
        }
        grouped.entry(movie.phase).or_default().push(movie.clone());
    }

    let mut phases: Vec<Phase> = order
        .into_iter()
        .map(|number| Phase {
            number,
            movies: grouped.remove(&number).unwrap_or_default(),
        })
        .collect();

    phases.sort_by_key(|phase| phase.number);
    phases
}

// Groups into (saga name, movies) pairs preserving catalog order, both
// across sagas and within each saga.
fn grouped_by_saga(movies: &[Movie]) -> Vec<(String, Vec<Movie>)> {
    let mut order: Vec<String> = Vec::new();
    let mut grouped: HashMap<String, Vec<Movie>> = HashMap::new();

    for movie in movies {
        if !grouped.contains_key(&movie.saga) {
            order.push(movie.saga.clone());
        }
        grouped
            .entry(movie.saga.clone())
            .or_default()
            .push(movie.clone());
    }

    order
        .into_iter()
        .map(|name| {
            let movies = grouped.remove(&name).unwrap_or_default();
            (name, movies)
        })
        .collect()
}

fn build_saga(name: String, movies: &[Movie]) -> Saga {
    let total_box_office = movies.iter().map(|m| m.box_office).sum();
    let total_duration_minutes = movies.iter().map(|m| m.duration_minutes).sum();
    let start_date = movies.first().map(|m| m.release_date.clone()).unwrap_or_default();
    let end_date = movies.last().map(|m| m.release_date.clone()).unwrap_or_default();

    Saga {
        name,
        start_date,
        end_date,
        total_box_office,
        total_duration_minutes,
        total_movies: movies.len(),
        phases: group_by_phase(movies),
    }
}

fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
