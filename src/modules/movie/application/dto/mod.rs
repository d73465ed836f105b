mod movie_response;

pub use movie_response::MovieResponse;
