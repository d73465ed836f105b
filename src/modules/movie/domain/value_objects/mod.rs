pub mod imdb_id;
pub mod release_year;

pub use imdb_id::{is_valid_imdb_id, MAX_IMDB_ID_LENGTH};
pub use release_year::{
    is_valid_release_year, latest_release_year, EARLIEST_RELEASE_YEAR, FUTURE_RELEASE_WINDOW,
};
