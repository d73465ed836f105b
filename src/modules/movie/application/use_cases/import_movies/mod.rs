mod command;
mod handler;
mod validator;
mod year_parser;

pub use command::ImportMoviesCommand;
pub use handler::ImportMoviesHandler;
pub use year_parser::parse_release_year;
