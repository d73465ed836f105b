mod command;
mod handler;
mod validator;

pub use command::CreateMovieCommand;
pub use handler::CreateMovieHandler;
