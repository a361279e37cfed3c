use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::question::QuestionSummary;
use crate::serde_ext::present;

/// One answer to one question within a user's attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResponseRow {
    pub id: Uuid,
    pub user_assessment_id: Uuid,
    pub question_id: Uuid,
    pub response_value: Option<i32>,
    pub response_text: Option<String>,
    /// Seconds spent on the question.
    pub response_time: Option<u32>,
    /// Self-rated confidence, 1-5.
    pub confidence: Option<u8>,
    pub skipped: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AssessmentResponseRow {
    pub fn has_answer(&self) -> bool {
        !self.skipped && (self.response_value.is_some() || self.response_text.is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAssessmentResponseRow {
    pub user_assessment_id: Uuid,
    pub question_id: Uuid,
    pub response_value: Option<i32>,
    pub response_text: Option<String>,
    pub response_time: Option<u32>,
    pub confidence: Option<u8>,
    pub skipped: bool,
}

impl NewAssessmentResponseRow {
    pub fn into_row(self, id: Uuid, now: Timestamp) -> AssessmentResponseRow {
        AssessmentResponseRow {
            id,
            user_assessment_id: self.user_assessment_id,
            question_id: self.question_id,
            response_value: self.response_value,
            response_text: self.response_text,
            response_time: self.response_time,
            confidence: self.confidence,
            skipped: self.skipped,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResponsePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_value: Option<Option<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_text: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Option<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<bool>,
    pub updated_at: Timestamp,
}

impl AssessmentResponseRow {
    pub fn apply(&mut self, patch: AssessmentResponsePatch) {
        if let Some(v) = patch.response_value {
            self.response_value = v;
        }
        if let Some(v) = patch.response_text {
            self.response_text = v;
        }
        if let Some(v) = patch.response_time {
            self.response_time = v;
        }
        if let Some(v) = patch.confidence {
            self.confidence = v;
        }
        if let Some(v) = patch.skipped {
            self.skipped = v;
        }
        self.updated_at = patch.updated_at;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentAnswerResponse {
    pub id: Uuid,
    pub user_assessment_id: Uuid,
    pub question_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_value: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
    pub skipped: bool,
    pub has_answer: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionSummary>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateAssessmentAnswer {
    pub user_assessment_id: Uuid,
    pub question_id: Uuid,
    #[serde(default)]
    pub response_value: Option<i32>,
    #[serde(default)]
    pub response_text: Option<String>,
    #[serde(default)]
    pub response_time: Option<u32>,
    #[serde(default)]
    pub confidence: Option<u8>,
    #[serde(default)]
    pub skipped: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssessmentAnswer {
    #[serde(default, deserialize_with = "present")]
    pub response_value: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present")]
    pub response_text: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub response_time: Option<Option<u32>>,
    #[serde(default, deserialize_with = "present")]
    pub confidence: Option<Option<u8>>,
    pub skipped: Option<bool>,
}
