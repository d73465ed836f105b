pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::{Movie, MovieError};
pub use repositories::MovieRepository;
