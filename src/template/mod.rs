//! Template module - Survey definitions, severity bands, and validation.
//!
//! A survey template pairs ordered, scored questions with the band table
//! that classifies totals. Templates deserialize from the same camelCase
//! documents the content store holds.

mod bands;
mod errors;
mod survey;
mod validation;

pub use bands::{BandTable, SeverityBand};
pub use errors::TemplateError;
pub use survey::{AnswerOption, Question, SurveyTemplate};
pub use validation::TemplateValidator;
