use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::serde_ext::present;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentType {
    Apest,
    Mdna,
    Cultural,
    Leadership,
    SpiritualGifts,
}

/// How answers are collected, and therefore which numeric scale applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ScoringMethod {
    #[default]
    #[serde(rename = "likert_5")]
    Likert5,
    #[serde(rename = "likert_7")]
    Likert7,
    #[serde(rename = "binary")]
    Binary,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentStatus {
    #[default]
    Draft,
    Active,
    Archived,
}

/// An `assessments` row as the database returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub assessment_type: AssessmentType,
    pub questions_count: u32,
    /// Minutes.
    pub estimated_duration: Option<u32>,
    pub version: String,
    pub language: String,
    pub research_backed: bool,
    /// Decimal column, e.g. `"0.85"`.
    pub validity_score: Option<String>,
    /// Decimal column, e.g. `"0.92"`.
    pub reliability_score: Option<String>,
    pub instructions: Option<String>,
    pub scoring_method: ScoringMethod,
    pub status: AssessmentStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub published_at: Option<Timestamp>,
}

/// Insert shape: the row minus everything the database generates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAssessmentRow {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub assessment_type: AssessmentType,
    pub questions_count: u32,
    pub estimated_duration: Option<u32>,
    pub version: String,
    pub language: String,
    pub research_backed: bool,
    pub validity_score: Option<String>,
    pub reliability_score: Option<String>,
    pub instructions: Option<String>,
    pub scoring_method: ScoringMethod,
    pub status: AssessmentStatus,
    pub published_at: Option<Timestamp>,
}

impl NewAssessmentRow {
    pub fn into_row(self, id: Uuid, now: Timestamp) -> AssessmentRow {
        AssessmentRow {
            id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            assessment_type: self.assessment_type,
            questions_count: self.questions_count,
            estimated_duration: self.estimated_duration,
            version: self.version,
            language: self.language,
            research_backed: self.research_backed,
            validity_score: self.validity_score,
            reliability_score: self.reliability_score,
            instructions: self.instructions,
            scoring_method: self.scoring_method,
            status: self.status,
            created_at: now,
            updated_at: now,
            published_at: self.published_at,
        }
    }
}

/// Partial update. Absent fields are left untouched; `Some(None)` clears a
/// nullable column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment_type: Option<AssessmentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub research_backed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_score: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reliability_score: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoring_method: Option<ScoringMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AssessmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Option<Timestamp>>,
    pub updated_at: Timestamp,
}

impl AssessmentRow {
    /// Apply a patch the way an `UPDATE ... SET` of only the present columns would.
    pub fn apply(&mut self, patch: AssessmentPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.slug {
            self.slug = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.assessment_type {
            self.assessment_type = v;
        }
        if let Some(v) = patch.questions_count {
            self.questions_count = v;
        }
        if let Some(v) = patch.estimated_duration {
            self.estimated_duration = v;
        }
        if let Some(v) = patch.version {
            self.version = v;
        }
        if let Some(v) = patch.language {
            self.language = v;
        }
        if let Some(v) = patch.research_backed {
            self.research_backed = v;
        }
        if let Some(v) = patch.validity_score {
            self.validity_score = v;
        }
        if let Some(v) = patch.reliability_score {
            self.reliability_score = v;
        }
        if let Some(v) = patch.instructions {
            self.instructions = v;
        }
        if let Some(v) = patch.scoring_method {
            self.scoring_method = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.published_at {
            self.published_at = v;
        }
        self.updated_at = patch.updated_at;
    }
}

/// Compact assessment reference embedded in other DTOs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentSummary {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub assessment_type: AssessmentType,
}

impl From<&AssessmentRow> for AssessmentSummary {
    fn from(row: &AssessmentRow) -> Self {
        Self {
            id: row.id,
            name: row.name.clone(),
            slug: row.slug.clone(),
            assessment_type: row.assessment_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub assessment_type: AssessmentType,
    pub questions_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_text: Option<String>,
    pub version: String,
    pub language: String,
    pub research_backed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reliability_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    pub scoring_method: ScoringMethod,
    pub status: AssessmentStatus,
    pub is_published: bool,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateAssessment {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub assessment_type: AssessmentType,
    #[serde(default)]
    pub questions_count: u32,
    #[serde(default)]
    pub estimated_duration: Option<u32>,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub research_backed: bool,
    #[serde(default)]
    pub validity_score: Option<f64>,
    #[serde(default)]
    pub reliability_score: Option<f64>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub scoring_method: ScoringMethod,
    #[serde(default)]
    pub status: AssessmentStatus,
    /// ISO-8601.
    #[serde(default)]
    pub published_at: Option<String>,
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssessment {
    pub name: Option<String>,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    pub assessment_type: Option<AssessmentType>,
    pub questions_count: Option<u32>,
    #[serde(default, deserialize_with = "present")]
    pub estimated_duration: Option<Option<u32>>,
    pub version: Option<String>,
    pub language: Option<String>,
    pub research_backed: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    pub validity_score: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub reliability_score: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub instructions: Option<Option<String>>,
    pub scoring_method: Option<ScoringMethod>,
    pub status: Option<AssessmentStatus>,
    #[serde(default, deserialize_with = "present")]
    pub published_at: Option<Option<String>>,
}
