//! Structural validation for survey templates.

use std::collections::HashSet;

use super::{SurveyTemplate, TemplateError};

/// Validator for survey template structure.
///
/// Templates arrive via deserialization, so their invariants cannot be
/// enforced at construction. Callers validate once after loading a template
/// and before scoring against it; a template that passes cannot produce
/// `ScoreOutOfRange` for any complete submission.
pub struct TemplateValidator;

impl TemplateValidator {
    /// Validates a template, failing fast on the first defect found.
    ///
    /// # Errors
    ///
    /// One [`TemplateError`] variant per structural defect: missing or
    /// duplicate questions, missing or duplicate options, an empty or
    /// inverted band table, a coverage gap, or a declared max score that
    /// disagrees with the questions.
    pub fn validate(template: &SurveyTemplate) -> Result<(), TemplateError> {
        Self::validate_questions(template)?;
        Self::validate_bands(template)?;
        Self::validate_coverage(template)?;
        Self::validate_declared_max(template)?;
        Ok(())
    }

    fn validate_questions(template: &SurveyTemplate) -> Result<(), TemplateError> {
        if template.questions.is_empty() {
            return Err(TemplateError::no_questions(&template.id));
        }

        let mut seen_ids = HashSet::new();
        for question in &template.questions {
            if !seen_ids.insert(question.id.as_str()) {
                return Err(TemplateError::duplicate_question_id(
                    &template.id,
                    &question.id,
                ));
            }

            if question.options.is_empty() {
                return Err(TemplateError::question_without_options(
                    &template.id,
                    &question.id,
                ));
            }

            let mut seen_values = HashSet::new();
            for option in &question.options {
                if !seen_values.insert(option.value.as_str()) {
                    return Err(TemplateError::duplicate_option_value(
                        &template.id,
                        &question.id,
                        &option.value,
                    ));
                }
            }
        }

        Ok(())
    }

    fn validate_bands(template: &SurveyTemplate) -> Result<(), TemplateError> {
        if template.scoring_bands.is_empty() {
            return Err(TemplateError::empty_band_table(&template.id));
        }

        for band in template.scoring_bands.bands() {
            if band.min > band.max {
                return Err(TemplateError::inverted_band(&template.id, band.min, band.max));
            }
        }

        Ok(())
    }

    /// Every achievable total must resolve to some band. Overlaps are legal
    /// (first match in listed order wins); only gaps are defects.
    fn validate_coverage(template: &SurveyTemplate) -> Result<(), TemplateError> {
        let min = template.min_achievable_score();
        let max = template.max_achievable_score();

        for total in min..=max {
            if template.scoring_bands.resolve(total).is_none() {
                return Err(TemplateError::band_gap(&template.id, total));
            }
        }

        Ok(())
    }

    fn validate_declared_max(template: &SurveyTemplate) -> Result<(), TemplateError> {
        let computed = template.max_achievable_score();
        if template.max_score != computed {
            return Err(TemplateError::declared_max_mismatch(
                &template.id,
                template.max_score,
                computed,
            ));
        }
        Ok(())
    }
}
