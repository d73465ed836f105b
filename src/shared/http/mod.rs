pub mod deadline;
pub mod response;

pub use deadline::with_request_deadline;
pub use response::{bad_request, outcome_response, status_for, ProblemDetails};
