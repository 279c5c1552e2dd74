//! Foundation module - Shared domain primitives.
//!
//! Contains the identifier and timestamp value objects that form
//! the vocabulary of the survey scoring domain.

mod ids;
mod timestamp;

pub use ids::SubmissionId;
pub use timestamp::Timestamp;
