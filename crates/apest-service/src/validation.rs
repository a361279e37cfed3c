//! Input schemas applied before any mapping or store access.

use apest_core::format::parse_timestamp;
use apest_core::models::assessment::{CreateAssessment, UpdateAssessment};
use apest_core::models::question::CreateAssessmentQuestion;
use apest_core::models::response::CreateAssessmentAnswer;
use apest_core::models::user_assessment::CreateUserAssessment;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("validation failed: {}", summarize(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            violations: vec![FieldViolation {
                field: field.into(),
                message: message.into(),
            }],
        }
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// The input rules a service enforces. Supplied by the caller when the
/// service is built.
pub trait Schemas: Send + Sync {
    fn create_assessment(&self, input: &CreateAssessment) -> Result<(), ValidationError>;

    fn update_assessment(&self, input: &UpdateAssessment) -> Result<(), ValidationError>;

    fn create_question(&self, input: &CreateAssessmentQuestion) -> Result<(), ValidationError>;

    fn create_user_assessment(&self, input: &CreateUserAssessment)
    -> Result<(), ValidationError>;

    fn create_answer(&self, input: &CreateAssessmentAnswer) -> Result<(), ValidationError>;
}

/// Field rules for the assessment tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSchemas;

#[derive(Default)]
struct Violations(Vec<FieldViolation>);

impl Violations {
    fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.0.push(FieldViolation {
                field: field.to_string(),
                message: message.to_string(),
            });
        }
    }

    fn name(&mut self, field: &str, value: &str) {
        self.check(!value.trim().is_empty(), field, "must not be empty");
    }

    fn slug(&mut self, value: &str) {
        self.check(!value.is_empty(), "slug", "must not be empty");
        self.check(
            value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "slug",
            "may only contain lowercase letters, digits and hyphens",
        );
    }

    fn unit_interval(&mut self, field: &str, value: Option<f64>) {
        if let Some(v) = value {
            self.check((0.0..=1.0).contains(&v), field, "must be between 0 and 1");
        }
    }

    fn timestamp(&mut self, field: &'static str, value: Option<&str>) {
        if let Some(v) = value {
            self.check(
                parse_timestamp(field, v).is_ok(),
                field,
                "must be an ISO-8601 timestamp",
            );
        }
    }

    fn finish(self) -> Result<(), ValidationError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations: self.0 })
        }
    }
}

impl Schemas for DefaultSchemas {
    fn create_assessment(&self, input: &CreateAssessment) -> Result<(), ValidationError> {
        let mut v = Violations::default();
        v.name("name", &input.name);
        v.slug(&input.slug);
        v.unit_interval("validityScore", input.validity_score);
        v.unit_interval("reliabilityScore", input.reliability_score);
        v.timestamp("publishedAt", input.published_at.as_deref());
        v.finish()
    }

    fn update_assessment(&self, input: &UpdateAssessment) -> Result<(), ValidationError> {
        let mut v = Violations::default();
        if let Some(name) = &input.name {
            v.name("name", name);
        }
        if let Some(slug) = &input.slug {
            v.slug(slug);
        }
        v.unit_interval("validityScore", input.validity_score.flatten());
        v.unit_interval("reliabilityScore", input.reliability_score.flatten());
        v.timestamp(
            "publishedAt",
            input.published_at.as_ref().and_then(|p| p.as_deref()),
        );
        v.finish()
    }

    fn create_question(&self, input: &CreateAssessmentQuestion) -> Result<(), ValidationError> {
        let mut v = Violations::default();
        v.name("questionText", &input.question_text);
        if let Some(weight) = input.weight {
            v.check(
                weight.is_finite() && weight > 0.0,
                "weight",
                "must be greater than 0",
            );
        }
        v.finish()
    }

    fn create_user_assessment(
        &self,
        input: &CreateUserAssessment,
    ) -> Result<(), ValidationError> {
        let mut v = Violations::default();
        v.timestamp("startedAt", input.started_at.as_deref());
        v.finish()
    }

    fn create_answer(&self, input: &CreateAssessmentAnswer) -> Result<(), ValidationError> {
        let mut v = Violations::default();
        if let Some(confidence) = input.confidence {
            v.check(
                (1..=5).contains(&confidence),
                "confidence",
                "must be between 1 and 5",
            );
        }
        if input.skipped {
            v.check(
                input.response_value.is_none() && input.response_text.is_none(),
                "skipped",
                "a skipped question carries no answer",
            );
        } else {
            v.check(
                input.response_value.is_some() != input.response_text.is_some(),
                "responseValue",
                "exactly one of responseValue or responseText is required",
            );
        }
        v.finish()
    }
}
