//! ResultHistory - Read-side queries over persisted survey results.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::foundation::Timestamp;
use crate::scoring::{ScoredAnswer, SurveyResult};

/// Per-condition summary of the most recent result, shaped like the
/// `latestScores.{condition}` entries in the persisted user document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestScore {
    pub score: u32,
    pub date: Timestamp,
    pub severity_label: String,
}

/// A user's survey results in storage (append) order.
///
/// Every query is computed on demand from the stored order; nothing here
/// mutates the results themselves. Results are immutable once recorded, so
/// the view never invalidates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultHistory {
    results: Vec<SurveyResult>,
}

impl ResultHistory {
    pub fn new(results: Vec<SurveyResult>) -> Self {
        Self { results }
    }

    /// Appends a newly persisted result.
    pub fn record(&mut self, result: SurveyResult) {
        self.results.push(result);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SurveyResult> {
        self.results.iter()
    }

    /// Results for one condition, in stored order.
    pub fn for_condition(&self, condition: &str) -> Vec<&SurveyResult> {
        self.results
            .iter()
            .filter(|result| result.survey_type == condition)
            .collect()
    }

    /// All results ordered by submission time, most recent first. The sort
    /// is stable, so results sharing a timestamp keep their stored order.
    pub fn newest_first(&self) -> Vec<&SurveyResult> {
        let mut ordered: Vec<&SurveyResult> = self.results.iter().collect();
        ordered.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        ordered
    }

    /// The most recently submitted result, if any.
    pub fn latest(&self) -> Option<&SurveyResult> {
        Self::most_recent(self.results.iter())
    }

    /// The most recently submitted result for one condition, if any.
    pub fn latest_for(&self, condition: &str) -> Option<&SurveyResult> {
        Self::most_recent(
            self.results
                .iter()
                .filter(|result| result.survey_type == condition),
        )
    }

    /// Per-condition summary of the most recent score, derived from the
    /// results rather than maintained as separate mutable state.
    pub fn latest_scores(&self) -> HashMap<String, LatestScore> {
        let mut scores: HashMap<String, LatestScore> = HashMap::new();

        for result in &self.results {
            let replace = match scores.get(&result.survey_type) {
                Some(existing) => !existing.date.is_after(&result.submitted_at),
                None => true,
            };
            if replace {
                scores.insert(
                    result.survey_type.clone(),
                    LatestScore {
                        score: result.score,
                        date: result.submitted_at,
                        severity_label: result.severity_label.clone(),
                    },
                );
            }
        }

        scores
    }

    /// The latest result's resolved answers for a condition, used to prefill
    /// a retaken survey.
    pub fn previous_answers(&self, condition: &str) -> Option<&[ScoredAnswer]> {
        self.latest_for(condition)
            .map(|result| result.answers.as_slice())
    }

    // When two results share a timestamp the later-stored one wins.
    fn most_recent<'a>(
        results: impl Iterator<Item = &'a SurveyResult>,
    ) -> Option<&'a SurveyResult> {
        results.fold(None, |latest, current| match latest {
            Some(latest) if latest.submitted_at.is_after(&current.submitted_at) => Some(latest),
            _ => Some(current),
        })
    }
}
