pub mod external;
pub mod models;
pub mod persistence;

pub use external::OmdbClient;
pub use persistence::MovieRepositoryImpl;
