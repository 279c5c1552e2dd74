//! SurveyScorer - Scoring and severity classification of submissions.

use crate::template::SurveyTemplate;

use super::{AnswerSheet, DraftScore, ScoredAnswer, ScoringError, SurveyScore};

/// Scorer for survey submissions.
///
/// A pure, deterministic mapping from (template, answers) to (total score,
/// severity classification). It performs no I/O and holds no state, so
/// identical inputs always produce identical output and concurrent calls
/// need no coordination. Identity and submission time belong to the result
/// record, which the caller builds afterwards.
pub struct SurveyScorer;

impl SurveyScorer {
    /// Scores a final submission.
    ///
    /// Iterates the template's questions, resolves each answer to its scored
    /// option, sums the option scores, and classifies the total against the
    /// template's band table. The template drives iteration, so answer
    /// entries matching no template question are ignored and completeness is
    /// judged against the template's questions only.
    ///
    /// # Errors
    ///
    /// - `IncompleteSubmission` if any question lacks an answer
    /// - `UnknownOptionValue` if an answer matches none of its question's
    ///   options; never coerced to a zero score
    /// - `ScoreOutOfRange` if no band covers the total (a template defect)
    ///
    /// # Edge Cases
    /// - Overlapping bands: the first band in listed order wins
    /// - Answer insertion order: totals are sums, so order never matters
    pub fn score(
        template: &SurveyTemplate,
        answers: &AnswerSheet,
    ) -> Result<SurveyScore, ScoringError> {
        let answered = Self::answered_count(template, answers);
        let expected = template.question_count();
        if answered < expected {
            return Err(ScoringError::incomplete_submission(
                &template.id,
                answered,
                expected,
            ));
        }

        let scored = Self::resolve_answers(template, answers)?;
        let total = scored.iter().map(|answer| answer.score).sum();

        let severity = template
            .scoring_bands
            .resolve(total)
            .ok_or_else(|| ScoringError::score_out_of_range(&template.id, total))?
            .clone();

        Ok(SurveyScore {
            answers: scored,
            total,
            max_possible: template.max_score,
            severity,
        })
    }

    /// Scores the answered subset for in-progress display.
    ///
    /// Unanswered questions are skipped rather than failing, so a draft
    /// never raises `IncompleteSubmission`. A stale option value is still an
    /// error: progress display must not mask a corrupted payload.
    ///
    /// # Errors
    ///
    /// - `UnknownOptionValue` if an answer matches none of its question's
    ///   options
    pub fn draft(
        template: &SurveyTemplate,
        answers: &AnswerSheet,
    ) -> Result<DraftScore, ScoringError> {
        let scored = Self::resolve_answers(template, answers)?;
        let running_total = scored.iter().map(|answer| answer.score).sum();

        Ok(DraftScore {
            answers: scored,
            running_total,
            question_count: template.question_count(),
            max_possible: template.max_score,
        })
    }

    fn answered_count(template: &SurveyTemplate, answers: &AnswerSheet) -> usize {
        template
            .questions
            .iter()
            .filter(|question| answers.value_for(&question.id).is_some())
            .count()
    }

    /// Resolves each answered question to its scored option, in template
    /// order. Unanswered questions are skipped.
    fn resolve_answers(
        template: &SurveyTemplate,
        answers: &AnswerSheet,
    ) -> Result<Vec<ScoredAnswer>, ScoringError> {
        let mut scored = Vec::with_capacity(template.question_count());

        for question in &template.questions {
            let value = match answers.value_for(&question.id) {
                Some(value) => value,
                None => continue,
            };

            let option = question.option_for(value).ok_or_else(|| {
                ScoringError::unknown_option_value(&template.id, &question.id, value)
            })?;

            scored.push(ScoredAnswer {
                question_id: question.id.clone(),
                answer: value.to_string(),
                score: option.score,
            });
        }

        Ok(scored)
    }
}
