//! HealthTrack Scoring - Survey Scoring and Severity Classification
//!
//! This crate implements scoring for condition check-in assessments: survey
//! templates with scored options, final and draft submission scoring with
//! severity band resolution, structural template validation, the built-in
//! condition templates, and read-side queries over persisted results.

pub mod catalog;
pub mod foundation;
pub mod history;
pub mod scoring;
pub mod template;
