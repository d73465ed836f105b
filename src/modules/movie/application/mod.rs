pub mod dto;
pub mod ports;
pub mod use_cases;

pub use dto::MovieResponse;
pub use ports::{CatalogSearch, CatalogSearchResult};
pub use use_cases::{
    CreateMovieCommand, CreateMovieHandler, GetMovieByIdHandler, GetMovieByIdQuery,
    ImportMoviesCommand, ImportMoviesHandler,
};
