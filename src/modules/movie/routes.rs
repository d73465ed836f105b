//! HTTP routes for the movie catalog

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::app::App;
use crate::modules::movie::application::{
    CreateMovieCommand, GetMovieByIdQuery, ImportMoviesCommand, MovieResponse,
};
use crate::shared::application::{Query, UseCase};
use crate::shared::errors::AppError;
use crate::shared::http::{bad_request, outcome_response, with_request_deadline};

pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api/movies", post(create_movie))
        .route("/api/movies/import", post(import_movies))
        .route("/api/movies/{id}", get(get_movie))
}

fn movie_location(movie: &MovieResponse) -> String {
    format!("/api/movies/{}", movie.id)
}

async fn create_movie(
    State(app): State<Arc<App>>,
    body: Result<Json<CreateMovieCommand>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(command) = match body {
        Ok(body) => body,
        Err(rejection) => return Ok(bad_request(rejection.body_text())),
    };

    let outcome = with_request_deadline(app.request_timeout, "create movie", |cancel| async move {
        app.movies.create.execute(command, &cancel).await
    })
    .await?;

    Ok(outcome_response(outcome, |movie| {
        let location = movie_location(&movie);
        (
            StatusCode::CREATED,
            [(header::LOCATION, location)],
            Json(movie),
        )
            .into_response()
    }))
}

async fn get_movie(
    State(app): State<Arc<App>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => return Ok(bad_request(rejection.body_text())),
    };

    let outcome = with_request_deadline(app.request_timeout, "get movie", |cancel| async move {
        app.movies
            .get_by_id
            .execute(GetMovieByIdQuery::new(id), &cancel)
            .await
    })
    .await?;

    Ok(outcome_response(outcome, |movie| Json(movie).into_response()))
}

async fn import_movies(
    State(app): State<Arc<App>>,
    body: Result<Json<ImportMoviesCommand>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(command) = match body {
        Ok(body) => body,
        Err(rejection) => return Ok(bad_request(rejection.body_text())),
    };

    let outcome = with_request_deadline(app.request_timeout, "import movies", |cancel| async move {
        app.movies.import.execute(command, &cancel).await
    })
    .await?;

    Ok(outcome_response(outcome, |movies| Json(movies).into_response()))
}
