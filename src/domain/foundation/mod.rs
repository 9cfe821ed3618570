//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the feat test domain.

mod duration_format;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use duration_format::{format_clock, format_long_clock};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CompletionId, FeatId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
