//! Scoring - Submission scoring, draft progress, and result records.
//!
//! `SurveyScorer` turns an `AnswerSheet` into a classified `SurveyScore`
//! (or a `DraftScore` for partial submissions); `SurveyResult` is the
//! persistent record built from a final score.

mod answers;
mod errors;
mod result;
mod scorer;

pub use answers::AnswerSheet;
pub use errors::ScoringError;
pub use result::{DraftScore, ScoredAnswer, SurveyResult, SurveyScore};
pub use scorer::SurveyScorer;
