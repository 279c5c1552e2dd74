//! Survey template data model.
//!
//! Templates are authored once and read many times. The serde shape matches
//! the camelCase documents the original content store holds (`maxScore`,
//! `scoringBands`, question text under the key `question`), so externally
//! fetched templates and the built-in catalog deserialize into the same types.

use serde::{Deserialize, Serialize};

use super::BandTable;

/// A selectable option on a question: a stable value, a display label,
/// and the score it contributes to the total.
///
/// Any inversion (for questions where frequent behavior is the healthy
/// answer) is baked into `score` at authoring time; the scorer never
/// applies condition-specific adjustments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub value: String,
    pub label: String,
    pub score: u32,
}

impl AnswerOption {
    /// Creates a new answer option.
    pub fn new(value: impl Into<String>, label: impl Into<String>, score: u32) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            score,
        }
    }
}

/// A single survey question with its scored options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Creates a new question.
    pub fn new(id: impl Into<String>, text: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            options,
        }
    }

    /// Finds the option matching a submitted value.
    pub fn option_for(&self, value: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.value == value)
    }

    /// Returns the highest score among this question's options.
    pub fn max_score(&self) -> u32 {
        self.options.iter().map(|option| option.score).max().unwrap_or(0)
    }

    /// Returns the lowest score among this question's options.
    pub fn min_score(&self) -> u32 {
        self.options.iter().map(|option| option.score).min().unwrap_or(0)
    }
}

/// The static definition of a health assessment: questions, scoring,
/// and severity bands.
///
/// # Invariants
///
/// Upheld by [`TemplateValidator`](super::TemplateValidator), not by
/// construction, since templates typically arrive via deserialization:
///
/// - at least one question; question ids unique
/// - at least one option per question; option values unique per question
/// - `scoring_bands` covers every achievable total, no inverted bands
/// - `max_score` equals the computed maximum achievable total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyTemplate {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub condition: String,
    pub max_score: u32,
    pub scoring_bands: BandTable,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub result_interpretation: String,
}

impl SurveyTemplate {
    /// Finds a question by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    /// Returns the number of questions.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Returns the highest total a submission can reach: the sum of each
    /// question's highest option score.
    pub fn max_achievable_score(&self) -> u32 {
        self.questions.iter().map(Question::max_score).sum()
    }

    /// Returns the lowest total a submission can reach: the sum of each
    /// question's lowest option score.
    pub fn min_achievable_score(&self) -> u32 {
        self.questions.iter().map(Question::min_score).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::SeverityBand;

    fn frequency_options() -> Vec<AnswerOption> {
        vec![
            AnswerOption::new("0", "No days", 0),
            AnswerOption::new("1", "1-2 days", 1),
            AnswerOption::new("2", "3-4 days", 2),
            AnswerOption::new("3", "5-6 days", 3),
            AnswerOption::new("4", "Every day", 4),
        ]
    }

    fn two_question_template() -> SurveyTemplate {
        SurveyTemplate {
            id: "itch-check".to_string(),
            title: "Itch Check".to_string(),
            description: "Weekly symptom check".to_string(),
            condition: "eczema".to_string(),
            max_score: 8,
            scoring_bands: BandTable::new(vec![
                SeverityBand::new(0, 3, "Low", "#4CAF50"),
                SeverityBand::new(4, 8, "High", "#F44336"),
            ]),
            questions: vec![
                Question::new("q1", "How many days was the skin itchy?", frequency_options()),
                Question::new("q2", "How many days was sleep disturbed?", frequency_options()),
            ],
            result_interpretation: String::new(),
        }
    }

    #[test]
    fn option_for_matches_by_value() {
        let question = Question::new("q1", "Itchy days?", frequency_options());
        let option = question.option_for("2").unwrap();
        assert_eq!(option.label, "3-4 days");
        assert_eq!(option.score, 2);
    }

    #[test]
    fn option_for_returns_none_for_unknown_value() {
        let question = Question::new("q1", "Itchy days?", frequency_options());
        assert!(question.option_for("5").is_none());
    }

    #[test]
    fn question_score_bounds_come_from_options() {
        let question = Question::new("q1", "Itchy days?", frequency_options());
        assert_eq!(question.min_score(), 0);
        assert_eq!(question.max_score(), 4);
    }

    #[test]
    fn question_score_bounds_are_zero_without_options() {
        let question = Question::new("q1", "Itchy days?", vec![]);
        assert_eq!(question.min_score(), 0);
        assert_eq!(question.max_score(), 0);
    }

    #[test]
    fn inversely_scored_options_keep_their_authored_scores() {
        let question = Question::new(
            "q1",
            "Days with fruits and vegetables?",
            vec![
                AnswerOption::new("4", "Every day", 0),
                AnswerOption::new("0", "No days", 4),
            ],
        );
        assert_eq!(question.option_for("4").unwrap().score, 0);
        assert_eq!(question.option_for("0").unwrap().score, 4);
    }

    #[test]
    fn template_finds_question_by_id() {
        let template = two_question_template();
        assert_eq!(template.question("q2").unwrap().text, "How many days was sleep disturbed?");
        assert!(template.question("q9").is_none());
    }

    #[test]
    fn achievable_score_range_sums_per_question_bounds() {
        let template = two_question_template();
        assert_eq!(template.min_achievable_score(), 0);
        assert_eq!(template.max_achievable_score(), 8);
    }

    #[test]
    fn template_deserializes_original_document_shape() {
        let json = r##"{
            "id": "eczema-poem",
            "title": "Eczema Severity Assessment (POEM)",
            "description": "Track the severity of eczema symptoms over the past week",
            "condition": "eczema",
            "maxScore": 4,
            "scoringBands": [
                { "min": 0, "max": 2, "label": "No eczema", "color": "#4CAF50" },
                { "min": 3, "max": 4, "label": "Mild eczema", "color": "#8BC34A" }
            ],
            "questions": [
                {
                    "id": "q1",
                    "question": "On how many days has the skin been itchy?",
                    "options": [
                        { "value": "0", "label": "No days", "score": 0 },
                        { "value": "4", "label": "Every day", "score": 4 }
                    ]
                }
            ],
            "resultInterpretation": "The POEM score helps track eczema severity."
        }"##;

        let template: SurveyTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(template.id, "eczema-poem");
        assert_eq!(template.condition, "eczema");
        assert_eq!(template.max_score, 4);
        assert_eq!(template.scoring_bands.len(), 2);
        assert_eq!(template.question_count(), 1);
        assert_eq!(template.questions[0].text, "On how many days has the skin been itchy?");
    }

    #[test]
    fn template_tolerates_missing_display_strings() {
        let json = r#"{
            "id": "minimal",
            "title": "Minimal",
            "condition": "eczema",
            "maxScore": 0,
            "scoringBands": [],
            "questions": []
        }"#;

        let template: SurveyTemplate = serde_json::from_str(json).unwrap();
        assert!(template.description.is_empty());
        assert!(template.result_interpretation.is_empty());
    }

    #[test]
    fn template_serializes_back_to_camel_case_keys() {
        let template = two_question_template();
        let json = serde_json::to_string(&template).unwrap();
        assert!(json.contains("\"maxScore\":8"));
        assert!(json.contains("\"scoringBands\""));
        assert!(json.contains("\"resultInterpretation\""));
        assert!(json.contains("\"question\":\"How many days was the skin itchy?\""));
    }
}
