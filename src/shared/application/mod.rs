/// Shared application layer patterns
///
/// This module contains application-level abstractions used across
/// multiple bounded contexts.
pub mod cancellation;
pub mod outcome;
pub mod use_case;

pub use cancellation::{ensure_not_cancelled, run_cancellable};
pub use outcome::{Outcome, OutcomeKind, ValidationErrors};
pub use use_case::{Query, UseCase};
