use std::sync::Arc;

use axum::Json;
use axum::extract::{Form, Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Serialize;

use crate::catalog::CatalogRef;
use crate::catalog::movie::{
    CreateMovieInput, DeleteMovieInput, Movie, UpdateMovieInput, create_movie_schema,
    delete_movie_schema, update_movie_schema,
};
use crate::forms::pipeline;
use crate::forms::schema::RawForm;
use crate::http_server::error::Report;
use crate::http_server::state::AppState;

const MOVIES_PATH: &str = "/movies";

#[derive(Debug, Serialize)]
pub struct MoviesPage {
    pub movies: Vec<Movie>,
}

#[derive(Debug, Serialize)]
pub struct MovieFormPage {
    pub genres: Vec<CatalogRef>,
}

#[derive(Debug, Serialize)]
pub struct MovieUpdatePage {
    pub movie: Movie,
    pub genres: Vec<CatalogRef>,
}

// ---- Loaders ----

pub async fn list_loader(State(state): State<Arc<AppState>>) -> Result<Json<MoviesPage>, Report> {
    let movies = state.api.list_movies(&state.env).await?;
    Ok(Json(MoviesPage { movies }))
}

pub async fn add_loader(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MovieFormPage>, Report> {
    let genres = state.api.list_movie_genres(&state.env).await?;
    Ok(Json(MovieFormPage { genres }))
}

/// Pre-populates the update screen. An unknown id sends the client back to
/// the list view instead of erroring.
pub async fn update_loader(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, Report> {
    let Some(movie) = state.api.find_movie(&state.env, &id).await? else {
        log::debug!("Movie {id} not found, redirecting to list view");
        return Ok(Redirect::to(MOVIES_PATH).into_response());
    };
    let genres = state.api.list_movie_genres(&state.env).await?;
    Ok(Json(MovieUpdatePage { movie, genres }).into_response())
}

// ---- Actions ----

pub async fn create_action(
    State(state): State<Arc<AppState>>,
    Form(raw): Form<RawForm>,
) -> Response {
    let api = state.api.clone();
    let env = state.env.clone();

    pipeline::submit(&create_movie_schema(), &raw, MOVIES_PATH, move |record| async move {
        let input = CreateMovieInput::from_record(&record)?;
        api.create_movie(&env, input).await
    })
    .await
    .into_response()
}

pub async fn update_action(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(mut raw): Form<RawForm>,
) -> Response {
    // The form carries the id as a hidden field; the path segment wins when
    // the field is missing.
    raw.entry("id".to_string()).or_insert(id);

    let api = state.api.clone();
    let env = state.env.clone();

    pipeline::submit(&update_movie_schema(), &raw, MOVIES_PATH, move |record| async move {
        let input = UpdateMovieInput::from_record(&record)?;
        api.update_movie(&env, input).await
    })
    .await
    .into_response()
}

pub async fn delete_action(
    State(state): State<Arc<AppState>>,
    Form(raw): Form<RawForm>,
) -> Response {
    let api = state.api.clone();
    let env = state.env.clone();

    pipeline::submit(&delete_movie_schema(), &raw, MOVIES_PATH, move |record| async move {
        let input = DeleteMovieInput::from_record(&record)?;
        api.delete_movie(&env, input).await
    })
    .await
    .into_response()
}
