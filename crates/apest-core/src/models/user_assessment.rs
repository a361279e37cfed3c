use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::assessment::AssessmentSummary;
use super::dimension::{ApestDimension, DimensionScores};
use crate::serde_ext::present;

/// Where a user is in an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CompletionStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// One user's attempt at an assessment.
///
/// Created when the user starts; the scoring columns stay `None` until the
/// attempt is completed and scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAssessmentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub assessment_id: Uuid,
    pub started_at: Timestamp,
    pub completed_at: Option<Timestamp>,
    /// 0-100.
    pub completion_percentage: u8,
    pub raw_scores: Option<DimensionScores>,
    pub total_score: Option<f64>,
    pub max_possible_score: Option<f64>,
    pub apostolic_score: Option<f64>,
    pub prophetic_score: Option<f64>,
    pub evangelistic_score: Option<f64>,
    pub shepherding_score: Option<f64>,
    pub teaching_score: Option<f64>,
    pub normalized_scores: Option<DimensionScores>,
    pub primary_gift: Option<ApestDimension>,
    pub secondary_gift: Option<ApestDimension>,
    /// Decimal column in `[0, 1]`.
    pub response_consistency: Option<String>,
    /// Minutes between start and completion.
    pub completion_time: Option<u32>,
    /// Mean self-rated confidence, 1-5.
    pub confidence_level: Option<u8>,
    pub ai_insights: Option<String>,
    pub personalized_recommendations: Option<Vec<String>>,
    pub complementary_gifts: Option<Vec<ApestDimension>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUserAssessmentRow {
    pub user_id: Uuid,
    pub assessment_id: Uuid,
    pub started_at: Timestamp,
    pub completion_percentage: u8,
}

impl NewUserAssessmentRow {
    pub fn into_row(self, id: Uuid, now: Timestamp) -> UserAssessmentRow {
        UserAssessmentRow {
            id,
            user_id: self.user_id,
            assessment_id: self.assessment_id,
            started_at: self.started_at,
            completed_at: None,
            completion_percentage: self.completion_percentage,
            raw_scores: None,
            total_score: None,
            max_possible_score: None,
            apostolic_score: None,
            prophetic_score: None,
            evangelistic_score: None,
            shepherding_score: None,
            teaching_score: None,
            normalized_scores: None,
            primary_gift: None,
            secondary_gift: None,
            response_consistency: None,
            completion_time: None,
            confidence_level: None,
            ai_insights: None,
            personalized_recommendations: None,
            complementary_gifts: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserAssessmentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Option<Timestamp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_percentage: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_scores: Option<Option<DimensionScores>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_possible_score: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apostolic_score: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prophetic_score: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evangelistic_score: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shepherding_score: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teaching_score: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_scores: Option<Option<DimensionScores>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_gift: Option<Option<ApestDimension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_gift: Option<Option<ApestDimension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_consistency: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_level: Option<Option<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_insights: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personalized_recommendations: Option<Option<Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complementary_gifts: Option<Option<Vec<ApestDimension>>>,
    pub updated_at: Timestamp,
}

impl UserAssessmentPatch {
    /// A patch that only stamps `updated_at`.
    pub fn empty(updated_at: Timestamp) -> Self {
        Self {
            completed_at: None,
            completion_percentage: None,
            raw_scores: None,
            total_score: None,
            max_possible_score: None,
            apostolic_score: None,
            prophetic_score: None,
            evangelistic_score: None,
            shepherding_score: None,
            teaching_score: None,
            normalized_scores: None,
            primary_gift: None,
            secondary_gift: None,
            response_consistency: None,
            completion_time: None,
            confidence_level: None,
            ai_insights: None,
            personalized_recommendations: None,
            complementary_gifts: None,
            updated_at,
        }
    }
}

impl UserAssessmentRow {
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    pub fn apply(&mut self, patch: UserAssessmentPatch) {
        if let Some(v) = patch.completed_at {
            self.completed_at = v;
        }
        if let Some(v) = patch.completion_percentage {
            self.completion_percentage = v;
        }
        if let Some(v) = patch.raw_scores {
            self.raw_scores = v;
        }
        if let Some(v) = patch.total_score {
            self.total_score = v;
        }
        if let Some(v) = patch.max_possible_score {
            self.max_possible_score = v;
        }
        if let Some(v) = patch.apostolic_score {
            self.apostolic_score = v;
        }
        if let Some(v) = patch.prophetic_score {
            self.prophetic_score = v;
        }
        if let Some(v) = patch.evangelistic_score {
            self.evangelistic_score = v;
        }
        if let Some(v) = patch.shepherding_score {
            self.shepherding_score = v;
        }
        if let Some(v) = patch.teaching_score {
            self.teaching_score = v;
        }
        if let Some(v) = patch.normalized_scores {
            self.normalized_scores = v;
        }
        if let Some(v) = patch.primary_gift {
            self.primary_gift = v;
        }
        if let Some(v) = patch.secondary_gift {
            self.secondary_gift = v;
        }
        if let Some(v) = patch.response_consistency {
            self.response_consistency = v;
        }
        if let Some(v) = patch.completion_time {
            self.completion_time = v;
        }
        if let Some(v) = patch.confidence_level {
            self.confidence_level = v;
        }
        if let Some(v) = patch.ai_insights {
            self.ai_insights = v;
        }
        if let Some(v) = patch.personalized_recommendations {
            self.personalized_recommendations = v;
        }
        if let Some(v) = patch.complementary_gifts {
            self.complementary_gifts = v;
        }
        self.updated_at = patch.updated_at;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserAssessmentResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub assessment_id: Uuid,
    pub started_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    pub completion_percentage: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_scores: Option<DimensionScores>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_possible_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apostolic_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prophetic_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evangelistic_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shepherding_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teaching_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_scores: Option<DimensionScores>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_gift: Option<ApestDimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_gift: Option<ApestDimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_consistency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_insights: Option<String>,
    pub personalized_recommendations: Vec<String>,
    pub complementary_gifts: Vec<ApestDimension>,
    pub created_at: String,
    pub updated_at: String,

    // Computed
    pub is_completed: bool,
    pub is_in_progress: bool,
    pub completion_status: CompletionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_percentage: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_time_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<AssessmentSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateUserAssessment {
    pub user_id: Uuid,
    pub assessment_id: Uuid,
    /// ISO-8601. Defaults to now.
    #[serde(default)]
    pub started_at: Option<String>,
}

/// Administrative edits to an attempt. Scores are written by the scoring
/// engine through [`UserAssessmentPatch`], not through this input.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserAssessment {
    pub completion_percentage: Option<u8>,
    #[serde(default, deserialize_with = "present")]
    pub completed_at: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub ai_insights: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub personalized_recommendations: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "present")]
    pub complementary_gifts: Option<Option<Vec<ApestDimension>>>,
}
