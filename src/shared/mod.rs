// Shared kernel used by every bounded context

pub mod application; // Outcome envelope, use case traits, cancellation
pub mod config;
pub mod errors;
pub mod http; // Outcome -> HTTP response mapping
pub mod infrastructure; // Database pool and migrations
pub mod utils;
pub mod validation;

pub use infrastructure::Database;
