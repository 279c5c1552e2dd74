//! Error types for survey scoring.

use thiserror::Error;

/// Failures when scoring a submission against a template.
///
/// All three are local-input validation failures surfaced to the immediate
/// caller. None may be defaulted away: guessing a zero score or an "Unknown"
/// band would corrupt persisted health records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// The answer set does not cover every question in the template.
    /// Raised only for final scoring, never for drafts.
    #[error("Survey '{survey_id}' submission is incomplete: {answered} of {expected} questions answered")]
    IncompleteSubmission {
        survey_id: String,
        answered: usize,
        expected: usize,
    },

    /// An answer references an option value absent from its question.
    /// Indicates a stale template or a corrupted answer payload.
    #[error("Survey '{survey_id}' question '{question_id}' has no option with value '{value}'")]
    UnknownOptionValue {
        survey_id: String,
        question_id: String,
        value: String,
    },

    /// The computed total matched no configured severity band.
    /// Indicates a template authoring defect (a gap in the band table);
    /// callers should treat it as non-recoverable without a template fix.
    #[error("Survey '{survey_id}' total score {total} matches no scoring band")]
    ScoreOutOfRange { survey_id: String, total: u32 },
}

impl ScoringError {
    /// Creates an incomplete submission error.
    pub fn incomplete_submission(
        survey_id: impl Into<String>,
        answered: usize,
        expected: usize,
    ) -> Self {
        ScoringError::IncompleteSubmission {
            survey_id: survey_id.into(),
            answered,
            expected,
        }
    }

    /// Creates an unknown option value error.
    pub fn unknown_option_value(
        survey_id: impl Into<String>,
        question_id: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        ScoringError::UnknownOptionValue {
            survey_id: survey_id.into(),
            question_id: question_id.into(),
            value: value.into(),
        }
    }

    /// Creates a score out of range error.
    pub fn score_out_of_range(survey_id: impl Into<String>, total: u32) -> Self {
        ScoringError::ScoreOutOfRange {
            survey_id: survey_id.into(),
            total,
        }
    }
}
