//! Built-in survey template catalog.
//!
//! The two condition assessments ship embedded in the crate as JSON
//! documents, parsed once on first access. Callers that load templates from
//! a content store instead deserialize into the same `SurveyTemplate` type;
//! these are the fallbacks the app uses when no stored template exists.

use once_cell::sync::Lazy;
use tracing::debug;

use crate::template::{BandTable, SeverityBand, SurveyTemplate};

const ECZEMA_POEM_JSON: &str = include_str!("data/eczema_poem.json");
const OBESITY_ASSESSMENT_JSON: &str = include_str!("data/obesity_assessment.json");

static BUILTIN_TEMPLATES: Lazy<Vec<SurveyTemplate>> = Lazy::new(|| {
    [ECZEMA_POEM_JSON, OBESITY_ASSESSMENT_JSON]
        .iter()
        .map(|document| {
            let template: SurveyTemplate = serde_json::from_str(document)
                .expect("built-in template document is valid JSON");
            debug!(template_id = %template.id, "Loaded built-in survey template");
            template
        })
        .collect()
});

// Severity of a single 0-4 question score. A distinct table from the
// survey-level bands: one band per option score, resolved with the same
// first-match algorithm as survey totals.
static QUESTION_SEVERITY_BANDS: Lazy<BandTable> = Lazy::new(|| {
    BandTable::new(vec![
        SeverityBand::new(0, 0, "None", "#4CAF50"),
        SeverityBand::new(1, 1, "Low", "#8BC34A"),
        SeverityBand::new(2, 2, "Moderate", "#FFC107"),
        SeverityBand::new(3, 3, "High", "#FF9800"),
        SeverityBand::new(4, 4, "Very high", "#F44336"),
    ])
});

/// All built-in templates.
pub fn all() -> &'static [SurveyTemplate] {
    &BUILTIN_TEMPLATES
}

/// The built-in template for a condition key, e.g. `"eczema"`.
pub fn for_condition(condition: &str) -> Option<&'static SurveyTemplate> {
    BUILTIN_TEMPLATES
        .iter()
        .find(|template| template.condition == condition)
}

/// The built-in template with the given id, e.g. `"eczema-poem"`.
pub fn by_id(id: &str) -> Option<&'static SurveyTemplate> {
    BUILTIN_TEMPLATES.iter().find(|template| template.id == id)
}

/// The band table for per-question severity display.
pub fn question_severity_bands() -> &'static BandTable {
    &QUESTION_SEVERITY_BANDS
}
