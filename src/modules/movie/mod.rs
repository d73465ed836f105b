pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod routes;

pub use application::{CatalogSearch, MovieResponse};
pub use domain::{Movie, MovieRepository};
pub use infrastructure::{MovieRepositoryImpl, OmdbClient};
