use jiff::Timestamp;

use super::patch_decimal;
use crate::error::CoreError;
use crate::format::{format_decimal, parse_optional_decimal, to_iso};
use crate::models::assessment::AssessmentSummary;
use crate::models::question::{
    AssessmentQuestionPatch, AssessmentQuestionResponse, AssessmentQuestionRow,
    CreateAssessmentQuestion, NewAssessmentQuestionRow, UpdateAssessmentQuestion,
};

/// Column default for `assessment_questions.weight`.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Effective weight of a question row, falling back to the column default.
pub fn question_weight(row: &AssessmentQuestionRow) -> Result<f64, CoreError> {
    Ok(parse_optional_decimal("weight", row.weight.as_deref())?.unwrap_or(DEFAULT_WEIGHT))
}

pub fn to_question_response(
    row: &AssessmentQuestionRow,
    assessment: Option<AssessmentSummary>,
) -> Result<AssessmentQuestionResponse, CoreError> {
    Ok(AssessmentQuestionResponse {
        id: row.id,
        assessment_id: row.assessment_id,
        question_text: row.question_text.clone(),
        question_type: row.question_type,
        order_index: row.order_index,
        is_required: row.is_required,
        category: row.category.clone(),
        weight: question_weight(row)?,
        reverse_scored: row.reverse_scored,
        apest_dimension: row.apest_dimension,
        answer_options: row.answer_options.clone().unwrap_or_default(),
        assessment,
        created_at: to_iso(&row.created_at),
        updated_at: to_iso(&row.updated_at),
    })
}

pub fn from_create_question(input: CreateAssessmentQuestion) -> NewAssessmentQuestionRow {
    NewAssessmentQuestionRow {
        assessment_id: input.assessment_id,
        question_text: input.question_text,
        question_type: input.question_type,
        order_index: input.order_index,
        is_required: input.is_required,
        category: input.category,
        weight: Some(format_decimal(input.weight.unwrap_or(DEFAULT_WEIGHT))),
        reverse_scored: input.reverse_scored,
        apest_dimension: input.apest_dimension,
        answer_options: input.answer_options,
    }
}

pub fn from_update_question(input: UpdateAssessmentQuestion) -> AssessmentQuestionPatch {
    AssessmentQuestionPatch {
        question_text: input.question_text,
        question_type: input.question_type,
        order_index: input.order_index,
        is_required: input.is_required,
        category: input.category,
        weight: patch_decimal(input.weight),
        reverse_scored: input.reverse_scored,
        apest_dimension: input.apest_dimension,
        answer_options: input.answer_options,
        updated_at: Timestamp::now(),
    }
}
