//! Scoring outputs and the persisted survey result record.

use serde::{Deserialize, Serialize};

use crate::foundation::{SubmissionId, Timestamp};
use crate::template::{SeverityBand, SurveyTemplate};

/// One answered question with its resolved score.
///
/// Serializes as `{questionId, answer, score}`, the element shape of the
/// `answers` array in persisted result documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredAnswer {
    pub question_id: String,
    pub answer: String,
    pub score: u32,
}

/// The outcome of final scoring: every answer resolved, the total, and the
/// severity band it landed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyScore {
    pub answers: Vec<ScoredAnswer>,
    pub total: u32,
    pub max_possible: u32,
    pub severity: SeverityBand,
}

/// A partial score over the answered subset, for in-progress display only.
///
/// Never persisted; the running total has no severity classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftScore {
    pub answers: Vec<ScoredAnswer>,
    pub running_total: u32,
    pub question_count: usize,
    pub max_possible: u32,
}

impl DraftScore {
    /// Returns the number of answered questions.
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Returns true when every question has an answer.
    pub fn is_complete(&self) -> bool {
        self.answers.len() == self.question_count
    }

    /// Returns the completion percentage (0-100).
    pub fn percent_complete(&self) -> u8 {
        if self.question_count == 0 {
            return 0;
        }
        ((self.answers.len() * 100) / self.question_count) as u8
    }
}

/// Immutable record of a completed survey submission.
///
/// Created once at submission time and never mutated; corrections require a
/// new submission. The serialized shape matches the historical result
/// documents (`surveyId`, `surveyType`, `date`, `answers`, `score`,
/// `maxPossibleScore`, `severityLabel`, `severityColor`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResult {
    pub id: SubmissionId,
    pub survey_id: String,
    /// Condition key of the template, used to group results.
    pub survey_type: String,
    #[serde(rename = "date")]
    pub submitted_at: Timestamp,
    pub answers: Vec<ScoredAnswer>,
    pub score: u32,
    pub max_possible_score: u32,
    pub severity_label: String,
    pub severity_color: String,
}

impl SurveyResult {
    /// Creates the record for a scored submission.
    ///
    /// Identity and submission time are supplied by the caller; scoring
    /// itself stays referentially transparent.
    pub fn new(
        id: SubmissionId,
        template: &SurveyTemplate,
        score: SurveyScore,
        submitted_at: Timestamp,
    ) -> Self {
        Self {
            id,
            survey_id: template.id.clone(),
            survey_type: template.condition.clone(),
            submitted_at,
            answers: score.answers,
            score: score.total,
            max_possible_score: score.max_possible,
            severity_label: score.severity.label,
            severity_color: score.severity.color,
        }
    }
}
