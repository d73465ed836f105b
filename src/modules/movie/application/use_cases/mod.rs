pub mod create_movie;
pub mod get_movie_by_id;
pub mod import_movies;

pub use create_movie::{CreateMovieCommand, CreateMovieHandler};
pub use get_movie_by_id::{GetMovieByIdHandler, GetMovieByIdQuery};
pub use import_movies::{ImportMoviesCommand, ImportMoviesHandler};
