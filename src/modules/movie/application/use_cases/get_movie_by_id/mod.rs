mod handler;
mod query;

pub use handler::GetMovieByIdHandler;
pub use query::GetMovieByIdQuery;
