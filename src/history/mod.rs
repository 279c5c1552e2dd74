//! History - Read-side queries over a user's persisted survey results.

mod results;

pub use results::{LatestScore, ResultHistory};
