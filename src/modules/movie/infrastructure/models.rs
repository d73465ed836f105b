/// Diesel models for the movies table
use crate::modules::movie::domain::Movie;
use crate::schema::movies;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

/// Diesel model for inserting new movies; `created_at` is set by the database
#[derive(Insertable, Debug)]
#[diesel(table_name = movies)]
pub struct NewMovie {
    pub id: Uuid,
    pub title: String,
    pub year: i32,
    pub imdb_id: Option<String>,
}

impl From<&Movie> for NewMovie {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id(),
            title: movie.title().to_string(),
            year: movie.year(),
            imdb_id: movie.imdb_id().map(str::to_string),
        }
    }
}

/// Diesel model for querying stored movies
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = movies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MovieModel {
    pub id: Uuid,
    pub title: String,
    pub year: i32,
    pub imdb_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MovieModel {
    /// Convert to domain Movie
    pub fn into_entity(self) -> Movie {
        Movie::restore(self.id, self.title, self.year, self.imdb_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_movie_copies_entity_fields() {
        let movie = Movie::create("Inception", 2010, Some("tt1375666")).unwrap();
        let row = NewMovie::from(&movie);

        assert_eq!(row.id, movie.id());
        assert_eq!(row.title, "Inception");
        assert_eq!(row.year, 2010);
        assert_eq!(row.imdb_id.as_deref(), Some("tt1375666"));
    }

    #[test]
    fn test_model_restores_entity() {
        let id = Uuid::new_v4();
        let model = MovieModel {
            id,
            title: "Heat".to_string(),
            year: 1995,
            imdb_id: None,
            created_at: Utc::now(),
        };

        let movie = model.into_entity();
        assert_eq!(movie.id(), id);
        assert_eq!(movie.title(), "Heat");
        assert_eq!(movie.year(), 1995);
        assert_eq!(movie.imdb_id(), None);
    }
}
