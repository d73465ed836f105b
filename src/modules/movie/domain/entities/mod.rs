pub mod movie;

pub use movie::{Movie, MovieError, MAX_TITLE_LENGTH};
