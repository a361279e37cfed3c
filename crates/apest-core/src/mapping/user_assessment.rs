use jiff::Timestamp;

use super::patch_timestamp;
use crate::error::CoreError;
use crate::format::{
    calculate_score_percentage, format_duration, parse_optional_decimal,
    parse_optional_timestamp, to_iso,
};
use crate::models::assessment::AssessmentSummary;
use crate::models::user_assessment::{
    CompletionStatus, CreateUserAssessment, NewUserAssessmentRow, UpdateUserAssessment,
    UserAssessmentPatch, UserAssessmentResponse, UserAssessmentRow,
};

pub fn completion_status(row: &UserAssessmentRow) -> CompletionStatus {
    if row.completed_at.is_some() {
        CompletionStatus::Completed
    } else if row.completion_percentage > 0 {
        CompletionStatus::InProgress
    } else {
        CompletionStatus::NotStarted
    }
}

pub fn to_user_assessment_response(
    row: &UserAssessmentRow,
    assessment: Option<AssessmentSummary>,
) -> Result<UserAssessmentResponse, CoreError> {
    let status = completion_status(row);

    Ok(UserAssessmentResponse {
        id: row.id,
        user_id: row.user_id,
        assessment_id: row.assessment_id,
        started_at: to_iso(&row.started_at),
        completed_at: row.completed_at.as_ref().map(to_iso),
        completion_percentage: row.completion_percentage,
        raw_scores: row.raw_scores,
        total_score: row.total_score,
        max_possible_score: row.max_possible_score,
        apostolic_score: row.apostolic_score,
        prophetic_score: row.prophetic_score,
        evangelistic_score: row.evangelistic_score,
        shepherding_score: row.shepherding_score,
        teaching_score: row.teaching_score,
        normalized_scores: row.normalized_scores,
        primary_gift: row.primary_gift,
        secondary_gift: row.secondary_gift,
        response_consistency: parse_optional_decimal(
            "response_consistency",
            row.response_consistency.as_deref(),
        )?,
        completion_time: row.completion_time,
        confidence_level: row.confidence_level,
        ai_insights: row.ai_insights.clone(),
        personalized_recommendations: row.personalized_recommendations.clone().unwrap_or_default(),
        complementary_gifts: row.complementary_gifts.clone().unwrap_or_default(),
        created_at: to_iso(&row.created_at),
        updated_at: to_iso(&row.updated_at),
        is_completed: status == CompletionStatus::Completed,
        is_in_progress: status == CompletionStatus::InProgress,
        completion_status: status,
        score_percentage: calculate_score_percentage(row.total_score, row.max_possible_score),
        completion_time_text: format_duration(row.completion_time),
        assessment,
    })
}

pub fn from_create_user_assessment(
    input: CreateUserAssessment,
) -> Result<NewUserAssessmentRow, CoreError> {
    let started_at = parse_optional_timestamp("started_at", input.started_at.as_deref())?
        .unwrap_or_else(Timestamp::now);

    Ok(NewUserAssessmentRow {
        user_id: input.user_id,
        assessment_id: input.assessment_id,
        started_at,
        completion_percentage: 0,
    })
}

pub fn from_update_user_assessment(
    input: UpdateUserAssessment,
) -> Result<UserAssessmentPatch, CoreError> {
    let mut patch = UserAssessmentPatch::empty(Timestamp::now());
    patch.completion_percentage = input.completion_percentage;
    patch.completed_at = patch_timestamp("completed_at", input.completed_at)?;
    patch.ai_insights = input.ai_insights;
    patch.personalized_recommendations = input.personalized_recommendations;
    patch.complementary_gifts = input.complementary_gifts;
    Ok(patch)
}
