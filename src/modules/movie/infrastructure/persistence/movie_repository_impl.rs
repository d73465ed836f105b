use std::sync::Arc;

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use tokio::task;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::log_debug;
use crate::modules::movie::domain::{Movie, MovieRepository};
use crate::modules::movie::infrastructure::models::{MovieModel, NewMovie};
use crate::schema::movies;
use crate::shared::application::run_cancellable;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::Database;
use crate::shared::utils::logger::{LogContext, TimedOperation};

/// Postgres-backed movie store
pub struct MovieRepositoryImpl {
    db: Arc<Database>,
}

impl MovieRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovieRepository for MovieRepositoryImpl {
    async fn find_by_id(&self, id: Uuid, cancel: &CancellationToken) -> AppResult<Option<Movie>> {
        let db = Arc::clone(&self.db);
        LogContext::db_operation("find_by_id", "movies", None);
        let timer = TimedOperation::new("movies.find_by_id");

        let model = run_cancellable(cancel, "find movie by id", async move {
            task::spawn_blocking(move || -> AppResult<Option<MovieModel>> {
                let mut conn = db.get_connection()?;
                let m = movies::table
                    .filter(movies::id.eq(id))
                    .select(MovieModel::as_select())
                    .first::<MovieModel>(&mut conn)
                    .optional()?;
                Ok(m)
            })
            .await?
        })
        .await?;

        LogContext::db_operation("find_by_id", "movies", Some(timer.elapsed_ms()));
        Ok(model.map(MovieModel::into_entity))
    }

    async fn exists_by_title_and_year(
        &self,
        title: &str,
        year: i32,
        cancel: &CancellationToken,
    ) -> AppResult<bool> {
        let db = Arc::clone(&self.db);
        let title = title.to_string();

        run_cancellable(cancel, "check movie exists", async move {
            task::spawn_blocking(move || -> AppResult<bool> {
                let mut conn = db.get_connection()?;
                let found = diesel::select(exists(
                    movies::table
                        .filter(movies::title.eq(&title))
                        .filter(movies::year.eq(year)),
                ))
                .get_result::<bool>(&mut conn)?;
                Ok(found)
            })
            .await?
        })
        .await
    }

    async fn insert(&self, movie: &Movie, cancel: &CancellationToken) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let row = NewMovie::from(movie);
        let timer = TimedOperation::new("movies.insert");

        run_cancellable(cancel, "insert movie", async move {
            task::spawn_blocking(move || -> AppResult<()> {
                let mut conn = db.get_connection()?;
                // A (title, year) clash surfaces as AppError::DuplicateEntry
                diesel::insert_into(movies::table)
                    .values(&row)
                    .execute(&mut conn)?;
                Ok(())
            })
            .await?
        })
        .await?;

        log_debug!("Stored movie {}", movie.id());
        LogContext::db_operation("insert", "movies", Some(timer.elapsed_ms()));
        Ok(())
    }
}
