use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::assessment::AssessmentSummary;
use super::dimension::ApestDimension;
use crate::serde_ext::present;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionType {
    #[default]
    Likert,
    MultipleChoice,
    Text,
    Binary,
}

/// One selectable answer. Stored inside the `answer_options` jsonb column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub value: i32,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentQuestionRow {
    pub id: Uuid,
    pub assessment_id: Uuid,
    pub question_text: String,
    pub question_type: QuestionType,
    pub order_index: u32,
    pub is_required: bool,
    pub category: Option<String>,
    /// Decimal multiplier. `None` means the column default of 1.0.
    pub weight: Option<String>,
    pub reverse_scored: bool,
    pub apest_dimension: Option<ApestDimension>,
    pub answer_options: Option<Vec<AnswerOption>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAssessmentQuestionRow {
    pub assessment_id: Uuid,
    pub question_text: String,
    pub question_type: QuestionType,
    pub order_index: u32,
    pub is_required: bool,
    pub category: Option<String>,
    pub weight: Option<String>,
    pub reverse_scored: bool,
    pub apest_dimension: Option<ApestDimension>,
    pub answer_options: Option<Vec<AnswerOption>>,
}

impl NewAssessmentQuestionRow {
    pub fn into_row(self, id: Uuid, now: Timestamp) -> AssessmentQuestionRow {
        AssessmentQuestionRow {
            id,
            assessment_id: self.assessment_id,
            question_text: self.question_text,
            question_type: self.question_type,
            order_index: self.order_index,
            is_required: self.is_required,
            category: self.category,
            weight: self.weight,
            reverse_scored: self.reverse_scored,
            apest_dimension: self.apest_dimension,
            answer_options: self.answer_options,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentQuestionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_type: Option<QuestionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_scored: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apest_dimension: Option<Option<ApestDimension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_options: Option<Option<Vec<AnswerOption>>>,
    pub updated_at: Timestamp,
}

impl AssessmentQuestionRow {
    pub fn apply(&mut self, patch: AssessmentQuestionPatch) {
        if let Some(v) = patch.question_text {
            self.question_text = v;
        }
        if let Some(v) = patch.question_type {
            self.question_type = v;
        }
        if let Some(v) = patch.order_index {
            self.order_index = v;
        }
        if let Some(v) = patch.is_required {
            self.is_required = v;
        }
        if let Some(v) = patch.category {
            self.category = v;
        }
        if let Some(v) = patch.weight {
            self.weight = v;
        }
        if let Some(v) = patch.reverse_scored {
            self.reverse_scored = v;
        }
        if let Some(v) = patch.apest_dimension {
            self.apest_dimension = v;
        }
        if let Some(v) = patch.answer_options {
            self.answer_options = v;
        }
        self.updated_at = patch.updated_at;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuestionSummary {
    pub id: Uuid,
    pub question_text: String,
    pub question_type: QuestionType,
    pub order_index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apest_dimension: Option<ApestDimension>,
}

impl From<&AssessmentQuestionRow> for QuestionSummary {
    fn from(row: &AssessmentQuestionRow) -> Self {
        Self {
            id: row.id,
            question_text: row.question_text.clone(),
            question_type: row.question_type,
            order_index: row.order_index,
            apest_dimension: row.apest_dimension,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentQuestionResponse {
    pub id: Uuid,
    pub assessment_id: Uuid,
    pub question_text: String,
    pub question_type: QuestionType,
    pub order_index: u32,
    pub is_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub weight: f64,
    pub reverse_scored: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apest_dimension: Option<ApestDimension>,
    pub answer_options: Vec<AnswerOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<AssessmentSummary>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateAssessmentQuestion {
    pub assessment_id: Uuid,
    pub question_text: String,
    #[serde(default)]
    pub question_type: QuestionType,
    pub order_index: u32,
    #[serde(default = "default_required")]
    pub is_required: bool,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub reverse_scored: bool,
    #[serde(default)]
    pub apest_dimension: Option<ApestDimension>,
    #[serde(default)]
    pub answer_options: Option<Vec<AnswerOption>>,
}

fn default_required() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssessmentQuestion {
    pub question_text: Option<String>,
    pub question_type: Option<QuestionType>,
    pub order_index: Option<u32>,
    pub is_required: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub weight: Option<Option<f64>>,
    pub reverse_scored: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    pub apest_dimension: Option<Option<ApestDimension>>,
    #[serde(default, deserialize_with = "present")]
    pub answer_options: Option<Option<Vec<AnswerOption>>>,
}
