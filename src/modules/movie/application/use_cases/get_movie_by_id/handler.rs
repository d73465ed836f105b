use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::modules::movie::application::dto::MovieResponse;
use crate::modules::movie::domain::MovieRepository;
use crate::shared::application::{Outcome, Query};
use crate::shared::errors::AppResult;

use super::query::GetMovieByIdQuery;

pub struct GetMovieByIdHandler {
    movie_repository: Arc<dyn MovieRepository>,
}

impl GetMovieByIdHandler {
    pub fn new(movie_repository: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repository }
    }
}

#[async_trait]
impl Query<GetMovieByIdQuery, MovieResponse> for GetMovieByIdHandler {
    async fn execute(
        &self,
        query: GetMovieByIdQuery,
        cancel: &CancellationToken,
    ) -> AppResult<Outcome<MovieResponse>> {
        let movie = self.movie_repository.find_by_id(query.id, cancel).await?;

        Ok(match movie {
            Some(movie) => Outcome::success(MovieResponse::from(&movie)),
            None => Outcome::not_found(format!("Movie with id '{}' was not found.", query.id)),
        })
    }
}
