use apest_core::format::format_decimal;
use apest_core::mapping::question::question_weight;
use apest_core::models::dimension::{ApestDimension, DimensionScores};
use apest_core::models::question::AssessmentQuestionRow;
use apest_core::models::response::AssessmentResponseRow;
use apest_core::models::user_assessment::UserAssessmentPatch;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ScoringError;
use crate::metrics::{confidence_level, response_consistency};
use crate::scoring::ScoreRange;

/// One question paired with the user's answer to it, reduced to what the
/// engine needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    pub question_id: Uuid,
    pub dimension: Option<ApestDimension>,
    pub weight: f64,
    pub reverse_scored: bool,
    /// `None` when the question was not answered or the answer was free text.
    pub value: Option<f64>,
    pub skipped: bool,
    pub confidence: Option<u8>,
}

impl ScoredItem {
    /// Pair a question row with its answer, if there is one.
    pub fn from_rows(
        question: &AssessmentQuestionRow,
        response: Option<&AssessmentResponseRow>,
    ) -> Result<Self, ScoringError> {
        if let Some(r) = response
            && r.question_id != question.id
        {
            return Err(ScoringError::MismatchedResponse {
                question_id: question.id,
                response_id: r.id,
            });
        }

        Ok(Self {
            question_id: question.id,
            dimension: question.apest_dimension,
            weight: question_weight(question)?,
            reverse_scored: question.reverse_scored,
            value: response.and_then(|r| r.response_value).map(f64::from),
            skipped: response.is_some_and(|r| r.skipped),
            confidence: response.and_then(|r| r.confidence),
        })
    }

    /// The numeric answer, unless the item was skipped.
    pub fn answered_value(&self) -> Option<f64> {
        if self.skipped { None } else { self.value }
    }
}

/// Everything the engine derives from one attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoringResult {
    /// Weighted, reversal-adjusted sums per dimension.
    pub raw_scores: DimensionScores,
    /// `raw / max_per_dimension * 100`, rounded; 0 for untagged dimensions.
    pub normalized_scores: DimensionScores,
    pub max_per_dimension: DimensionScores,
    /// Plain sum of answered values, unweighted and unreversed.
    pub total_score: f64,
    /// `question_count * range.max`.
    pub max_possible_score: f64,
    pub primary_gift: Option<ApestDimension>,
    pub secondary_gift: Option<ApestDimension>,
    pub apostolic_score: f64,
    pub prophetic_score: f64,
    pub evangelistic_score: f64,
    pub shepherding_score: f64,
    pub teaching_score: f64,
    pub answered_count: u32,
    pub skipped_count: u32,
    pub response_consistency: Option<f64>,
    pub confidence_level: Option<u8>,
}

impl ScoringResult {
    /// The patch that finalises an attempt with this result.
    pub fn completion_patch(
        &self,
        completed_at: Timestamp,
        completion_time: Option<u32>,
    ) -> UserAssessmentPatch {
        let mut patch = UserAssessmentPatch::empty(completed_at);
        patch.completed_at = Some(Some(completed_at));
        patch.raw_scores = Some(Some(self.raw_scores));
        patch.total_score = Some(Some(self.total_score));
        patch.max_possible_score = Some(Some(self.max_possible_score));
        patch.apostolic_score = Some(Some(self.apostolic_score));
        patch.prophetic_score = Some(Some(self.prophetic_score));
        patch.evangelistic_score = Some(Some(self.evangelistic_score));
        patch.shepherding_score = Some(Some(self.shepherding_score));
        patch.teaching_score = Some(Some(self.teaching_score));
        patch.normalized_scores = Some(Some(self.normalized_scores));
        patch.primary_gift = Some(self.primary_gift);
        patch.secondary_gift = Some(self.secondary_gift);
        patch.response_consistency = Some(self.response_consistency.map(format_decimal));
        patch.confidence_level = Some(self.confidence_level);
        patch.completion_time = Some(completion_time);
        patch
    }
}

/// Aggregates answers into dimension scores for one answer scale.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine {
    range: ScoreRange,
    priority: [ApestDimension; 5],
}

impl ScoringEngine {
    pub fn new(range: ScoreRange) -> Self {
        Self {
            range,
            priority: ApestDimension::ALL,
        }
    }

    /// Order used to break ties between equally scored dimensions.
    pub fn with_priority(mut self, priority: [ApestDimension; 5]) -> Self {
        self.priority = priority;
        self
    }

    pub fn range(&self) -> ScoreRange {
        self.range
    }

    /// The value an answer contributes before weighting.
    pub fn effective_value(&self, raw: f64, reverse_scored: bool) -> f64 {
        if reverse_scored {
            self.range.reverse(raw)
        } else {
            raw
        }
    }

    pub fn score(&self, items: &[ScoredItem]) -> ScoringResult {
        let mut raw_scores = DimensionScores::default();
        let mut max_per_dimension = DimensionScores::default();
        let mut total_score = 0.0;
        let mut answered_count = 0;
        let mut skipped_count = 0;

        for item in items {
            if item.skipped {
                skipped_count += 1;
            }
            if let Some(dimension) = item.dimension {
                *max_per_dimension.get_mut(dimension) += self.range.max * item.weight;
            }

            let Some(value) = item.answered_value() else {
                continue;
            };
            answered_count += 1;
            total_score += value;

            if let Some(dimension) = item.dimension {
                let contribution = self.effective_value(value, item.reverse_scored) * item.weight;
                *raw_scores.get_mut(dimension) += contribution;
            }
        }

        let mut normalized_scores = DimensionScores::default();
        for (dimension, max) in max_per_dimension.iter() {
            // Untagged dimensions have nothing to normalise against.
            if max > 0.0 {
                *normalized_scores.get_mut(dimension) =
                    (raw_scores.get(dimension) / max * 100.0).round();
            }
        }

        let has_dimensions = items.iter().any(|i| i.dimension.is_some());
        let (primary_gift, secondary_gift) = if has_dimensions {
            let ranked = self.rank(&normalized_scores);
            (Some(ranked[0]), Some(ranked[1]))
        } else {
            (None, None)
        };

        ScoringResult {
            raw_scores,
            normalized_scores,
            max_per_dimension,
            total_score,
            max_possible_score: items.len() as f64 * self.range.max,
            primary_gift,
            secondary_gift,
            apostolic_score: raw_scores.apostolic,
            prophetic_score: raw_scores.prophetic,
            evangelistic_score: raw_scores.evangelistic,
            shepherding_score: raw_scores.shepherding,
            teaching_score: raw_scores.teaching,
            answered_count,
            skipped_count,
            response_consistency: response_consistency(self, items),
            confidence_level: confidence_level(items),
        }
    }

    /// Dimensions ordered by score, highest first. Equal scores keep the
    /// engine's priority order.
    pub fn rank(&self, scores: &DimensionScores) -> [ApestDimension; 5] {
        let mut ranked = self.priority;
        // `sort_by` is stable, so ties stay in priority order.
        ranked.sort_by(|a, b| scores.get(*b).total_cmp(&scores.get(*a)));
        ranked
    }
}
