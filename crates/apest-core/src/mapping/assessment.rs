use jiff::Timestamp;

use super::{patch_decimal, patch_timestamp};
use crate::error::CoreError;
use crate::format::{
    format_decimal, format_duration, parse_optional_decimal, parse_optional_timestamp, to_iso,
};
use crate::models::assessment::{
    AssessmentPatch, AssessmentResponse, AssessmentRow, AssessmentStatus, CreateAssessment,
    NewAssessmentRow, UpdateAssessment,
};

pub fn to_assessment_response(row: &AssessmentRow) -> Result<AssessmentResponse, CoreError> {
    Ok(AssessmentResponse {
        id: row.id,
        name: row.name.clone(),
        slug: row.slug.clone(),
        description: row.description.clone(),
        assessment_type: row.assessment_type,
        questions_count: row.questions_count,
        estimated_duration: row.estimated_duration,
        duration_text: format_duration(row.estimated_duration),
        version: row.version.clone(),
        language: row.language.clone(),
        research_backed: row.research_backed,
        validity_score: parse_optional_decimal("validity_score", row.validity_score.as_deref())?,
        reliability_score: parse_optional_decimal(
            "reliability_score",
            row.reliability_score.as_deref(),
        )?,
        instructions: row.instructions.clone(),
        scoring_method: row.scoring_method,
        status: row.status,
        is_published: row.status == AssessmentStatus::Active,
        created_at: to_iso(&row.created_at),
        updated_at: to_iso(&row.updated_at),
        published_at: row.published_at.as_ref().map(to_iso),
    })
}

pub fn from_create_assessment(input: CreateAssessment) -> Result<NewAssessmentRow, CoreError> {
    let published_at = parse_optional_timestamp("published_at", input.published_at.as_deref())?;

    Ok(NewAssessmentRow {
        name: input.name,
        slug: input.slug,
        description: input.description,
        assessment_type: input.assessment_type,
        questions_count: input.questions_count,
        estimated_duration: input.estimated_duration,
        version: input.version,
        language: input.language,
        research_backed: input.research_backed,
        validity_score: input.validity_score.map(format_decimal),
        reliability_score: input.reliability_score.map(format_decimal),
        instructions: input.instructions,
        scoring_method: input.scoring_method,
        status: input.status,
        published_at,
    })
}

pub fn from_update_assessment(input: UpdateAssessment) -> Result<AssessmentPatch, CoreError> {
    Ok(AssessmentPatch {
        name: input.name,
        slug: input.slug,
        description: input.description,
        assessment_type: input.assessment_type,
        questions_count: input.questions_count,
        estimated_duration: input.estimated_duration,
        version: input.version,
        language: input.language,
        research_backed: input.research_backed,
        validity_score: patch_decimal(input.validity_score),
        reliability_score: patch_decimal(input.reliability_score),
        instructions: input.instructions,
        scoring_method: input.scoring_method,
        status: input.status,
        published_at: patch_timestamp("published_at", input.published_at)?,
        updated_at: Timestamp::now(),
    })
}
