//! Query HTTP Routes
//!
//! One GET route per query operation. Parameter names are part of the public
//! surface and stay in Spanish.
//!
//! - `GET /developer?desarrollador=<name>`
//! - `GET /userdata?user_id=<id>`
//! - `GET /UserForGenre?genero=<genre>`
//! - `GET /best_developer_year?year=<int>`
//! - `GET /developer_reviews_analysis?desarrolladora=<name>`

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::query::{
    self, DeveloperRank, DeveloperYear, GenrePlaytime, Operation, ReviewsAnalysis, UserData,
};

use super::errors::{ApiError, ApiResult};
use super::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DeveloperParams {
    pub desarrollador: String,
}

#[derive(Debug, Deserialize)]
pub struct UserDataParams {
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct GenreParams {
    pub genero: String,
}

#[derive(Debug, Deserialize)]
pub struct YearParams {
    pub year: i32,
}

#[derive(Debug, Deserialize)]
pub struct ReviewsParams {
    pub desarrolladora: String,
}

/// Create query routes
pub fn query_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/developer", get(developer_handler))
        .route("/userdata", get(userdata_handler))
        .route("/UserForGenre", get(user_for_genre_handler))
        .route("/best_developer_year", get(best_developer_year_handler))
        .route(
            "/developer_reviews_analysis",
            get(developer_reviews_analysis_handler),
        )
        .with_state(state)
}

/// Turn axum's plain-text rejection into the JSON error body.
fn params<T>(extracted: Result<Query<T>, QueryRejection>) -> ApiResult<T> {
    extracted
        .map(|Query(p)| p)
        .map_err(|rejection| ApiError::InvalidQueryParam(rejection.body_text()))
}

async fn developer_handler(
    State(state): State<Arc<AppState>>,
    extracted: Result<Query<DeveloperParams>, QueryRejection>,
) -> ApiResult<Json<Vec<DeveloperYear>>> {
    let p = params(extracted)?;
    state
        .answer(Operation::Developer, &p.desarrollador, |table| {
            Ok(query::developer(table, &p.desarrollador))
        })
        .map(Json)
}

async fn userdata_handler(
    State(state): State<Arc<AppState>>,
    extracted: Result<Query<UserDataParams>, QueryRejection>,
) -> ApiResult<Json<UserData>> {
    let p = params(extracted)?;
    state
        .answer(Operation::UserData, &p.user_id, |table| {
            Ok(query::userdata(table, &p.user_id))
        })
        .map(Json)
}

async fn user_for_genre_handler(
    State(state): State<Arc<AppState>>,
    extracted: Result<Query<GenreParams>, QueryRejection>,
) -> ApiResult<Json<GenrePlaytime>> {
    let p = params(extracted)?;
    state
        .answer(Operation::UserForGenre, &p.genero, |table| {
            query::user_for_genre(table, &p.genero)
        })
        .map(Json)
}

async fn best_developer_year_handler(
    State(state): State<Arc<AppState>>,
    extracted: Result<Query<YearParams>, QueryRejection>,
) -> ApiResult<Json<Vec<DeveloperRank>>> {
    let p = params(extracted)?;
    state
        .answer(Operation::BestDeveloperYear, &p.year.to_string(), |table| {
            Ok(query::best_developer_year(table, p.year))
        })
        .map(Json)
}

async fn developer_reviews_analysis_handler(
    State(state): State<Arc<AppState>>,
    extracted: Result<Query<ReviewsParams>, QueryRejection>,
) -> ApiResult<Json<ReviewsAnalysis>> {
    let p = params(extracted)?;
    state
        .answer(
            Operation::DeveloperReviewsAnalysis,
            &p.desarrolladora,
            |table| Ok(query::developer_reviews_analysis(table, &p.desarrolladora)),
        )
        .map(Json)
}
