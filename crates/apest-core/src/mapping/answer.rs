use jiff::Timestamp;

use crate::format::{format_response_time, to_iso};
use crate::models::question::QuestionSummary;
use crate::models::response::{
    AssessmentAnswerResponse, AssessmentResponsePatch, AssessmentResponseRow,
    CreateAssessmentAnswer, NewAssessmentResponseRow, UpdateAssessmentAnswer,
};

pub fn to_answer_response(
    row: &AssessmentResponseRow,
    question: Option<QuestionSummary>,
) -> AssessmentAnswerResponse {
    AssessmentAnswerResponse {
        id: row.id,
        user_assessment_id: row.user_assessment_id,
        question_id: row.question_id,
        response_value: row.response_value,
        response_text: row.response_text.clone(),
        response_time: row.response_time,
        response_time_text: format_response_time(row.response_time),
        confidence: row.confidence,
        skipped: row.skipped,
        has_answer: row.has_answer(),
        question,
        created_at: to_iso(&row.created_at),
        updated_at: to_iso(&row.updated_at),
    }
}

pub fn from_create_answer(input: CreateAssessmentAnswer) -> NewAssessmentResponseRow {
    NewAssessmentResponseRow {
        user_assessment_id: input.user_assessment_id,
        question_id: input.question_id,
        response_value: input.response_value,
        response_text: input.response_text,
        response_time: input.response_time,
        confidence: input.confidence,
        skipped: input.skipped,
    }
}

pub fn from_update_answer(input: UpdateAssessmentAnswer) -> AssessmentResponsePatch {
    AssessmentResponsePatch {
        response_value: input.response_value,
        response_text: input.response_text,
        response_time: input.response_time,
        confidence: input.confidence,
        skipped: input.skipped,
        updated_at: Timestamp::now(),
    }
}
