//! AnswerSheet value object - The answer map built during a survey session.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ScoredAnswer;

/// The `questionId → option value` map a user builds while taking a survey.
///
/// Selecting an answer for a question that already has one overwrites it:
/// last write per question wins. The sheet carries raw option values only;
/// scores are resolved against the template at scoring time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    answers: HashMap<String, String>,
}

impl AnswerSheet {
    /// Creates an empty answer sheet.
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
        }
    }

    /// Creates a sheet from an existing answer map.
    pub fn from_map(answers: HashMap<String, String>) -> Self {
        Self { answers }
    }

    /// Rebuilds a sheet from a previous result's resolved answers,
    /// for prefilling a retake of the same survey.
    pub fn from_previous(answers: &[ScoredAnswer]) -> Self {
        let mut sheet = Self::new();
        for answer in answers {
            sheet.select(&answer.question_id, &answer.answer);
        }
        sheet
    }

    /// Records the selected option value for a question, replacing any
    /// earlier selection for the same question.
    pub fn select(&mut self, question_id: impl Into<String>, value: impl Into<String>) {
        self.answers.insert(question_id.into(), value.into());
    }

    /// Returns the selected option value for a question, if any.
    pub fn value_for(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    /// Returns the number of answered questions.
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Returns true if no question has been answered.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterates over `(question_id, value)` entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.answers
            .iter()
            .map(|(id, value)| (id.as_str(), value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sheet_is_empty() {
        let sheet = AnswerSheet::new();
        assert!(sheet.is_empty());
        assert_eq!(sheet.answered_count(), 0);
    }

    #[test]
    fn select_records_value_for_question() {
        let mut sheet = AnswerSheet::new();
        sheet.select("q1", "2");

        assert_eq!(sheet.value_for("q1"), Some("2"));
        assert_eq!(sheet.answered_count(), 1);
    }

    #[test]
    fn reselecting_a_question_overwrites_earlier_answer() {
        let mut sheet = AnswerSheet::new();
        sheet.select("q1", "2");
        sheet.select("q1", "4");

        assert_eq!(sheet.value_for("q1"), Some("4"));
        assert_eq!(sheet.answered_count(), 1);
    }

    #[test]
    fn value_for_unanswered_question_is_none() {
        let sheet = AnswerSheet::new();
        assert_eq!(sheet.value_for("q1"), None);
    }

    #[test]
    fn from_map_preserves_entries() {
        let map: HashMap<_, _> = [("q1".to_string(), "0".to_string()), ("q2".to_string(), "3".to_string())]
            .into_iter()
            .collect();
        let sheet = AnswerSheet::from_map(map);

        assert_eq!(sheet.answered_count(), 2);
        assert_eq!(sheet.value_for("q2"), Some("3"));
    }

    #[test]
    fn from_previous_rebuilds_selections() {
        let previous = vec![
            ScoredAnswer {
                question_id: "q1".to_string(),
                answer: "2".to_string(),
                score: 2,
            },
            ScoredAnswer {
                question_id: "q2".to_string(),
                answer: "0".to_string(),
                score: 0,
            },
        ];

        let sheet = AnswerSheet::from_previous(&previous);
        assert_eq!(sheet.answered_count(), 2);
        assert_eq!(sheet.value_for("q1"), Some("2"));
        assert_eq!(sheet.value_for("q2"), Some("0"));
    }

    #[test]
    fn sheet_serializes_as_plain_object() {
        let mut sheet = AnswerSheet::new();
        sheet.select("q1", "2");

        let json = serde_json::to_string(&sheet).unwrap();
        assert_eq!(json, r#"{"q1":"2"}"#);
    }

    #[test]
    fn sheet_deserializes_from_plain_object() {
        let sheet: AnswerSheet = serde_json::from_str(r#"{"q1":"2","q2":"0"}"#).unwrap();
        assert_eq!(sheet.answered_count(), 2);
        assert_eq!(sheet.value_for("q1"), Some("2"));
    }
}
