//! Error types for template validation.

use thiserror::Error;

/// Structural defects in a survey template.
///
/// These indicate authoring mistakes in a template document. Validation
/// reports them rather than repairing the template or falling back to a
/// default, since a mis-banded template would silently corrupt persisted
/// health records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Survey template '{template_id}' has no questions")]
    NoQuestions { template_id: String },

    #[error("Survey template '{template_id}' declares question '{question_id}' more than once")]
    DuplicateQuestionId {
        template_id: String,
        question_id: String,
    },

    #[error("Question '{question_id}' in template '{template_id}' has no options")]
    QuestionWithoutOptions {
        template_id: String,
        question_id: String,
    },

    #[error("Question '{question_id}' in template '{template_id}' declares option value '{value}' more than once")]
    DuplicateOptionValue {
        template_id: String,
        question_id: String,
        value: String,
    },

    #[error("Survey template '{template_id}' has no scoring bands")]
    EmptyBandTable { template_id: String },

    #[error("Survey template '{template_id}' has a scoring band with min {min} greater than max {max}")]
    InvertedBand {
        template_id: String,
        min: u32,
        max: u32,
    },

    #[error("Survey template '{template_id}' scoring bands do not cover achievable total {total}")]
    BandGap { template_id: String, total: u32 },

    #[error("Survey template '{template_id}' declares max score {declared} but its questions can reach {computed}")]
    DeclaredMaxMismatch {
        template_id: String,
        declared: u32,
        computed: u32,
    },
}

impl TemplateError {
    /// Creates a no-questions error.
    pub fn no_questions(template_id: impl Into<String>) -> Self {
        TemplateError::NoQuestions {
            template_id: template_id.into(),
        }
    }

    /// Creates a duplicate question id error.
    pub fn duplicate_question_id(
        template_id: impl Into<String>,
        question_id: impl Into<String>,
    ) -> Self {
        TemplateError::DuplicateQuestionId {
            template_id: template_id.into(),
            question_id: question_id.into(),
        }
    }

    /// Creates a question-without-options error.
    pub fn question_without_options(
        template_id: impl Into<String>,
        question_id: impl Into<String>,
    ) -> Self {
        TemplateError::QuestionWithoutOptions {
            template_id: template_id.into(),
            question_id: question_id.into(),
        }
    }

    /// Creates a duplicate option value error.
    pub fn duplicate_option_value(
        template_id: impl Into<String>,
        question_id: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        TemplateError::DuplicateOptionValue {
            template_id: template_id.into(),
            question_id: question_id.into(),
            value: value.into(),
        }
    }

    /// Creates an empty band table error.
    pub fn empty_band_table(template_id: impl Into<String>) -> Self {
        TemplateError::EmptyBandTable {
            template_id: template_id.into(),
        }
    }

    /// Creates an inverted band error.
    pub fn inverted_band(template_id: impl Into<String>, min: u32, max: u32) -> Self {
        TemplateError::InvertedBand {
            template_id: template_id.into(),
            min,
            max,
        }
    }

    /// Creates a band gap error.
    pub fn band_gap(template_id: impl Into<String>, total: u32) -> Self {
        TemplateError::BandGap {
            template_id: template_id.into(),
            total,
        }
    }

    /// Creates a declared max mismatch error.
    pub fn declared_max_mismatch(
        template_id: impl Into<String>,
        declared: u32,
        computed: u32,
    ) -> Self {
        TemplateError::DeclaredMaxMismatch {
            template_id: template_id.into(),
            declared,
            computed,
        }
    }
}
