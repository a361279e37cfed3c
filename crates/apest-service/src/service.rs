use apest_core::mapping::{
    from_create_answer, from_create_assessment, from_create_question,
    from_create_user_assessment, from_update_answer, from_update_assessment, to_answer_response,
    to_assessment_response, to_question_response, to_user_assessment_response,
};
use apest_core::models::assessment::{
    AssessmentResponse, AssessmentRow, AssessmentStatus, AssessmentSummary, CreateAssessment,
    UpdateAssessment,
};
use apest_core::models::dimension::ApestDimension;
use apest_core::models::question::{
    AssessmentQuestionResponse, AssessmentQuestionRow, CreateAssessmentQuestion, QuestionSummary,
};
use apest_core::models::response::{
    AssessmentAnswerResponse, AssessmentResponseRow, CreateAssessmentAnswer,
    UpdateAssessmentAnswer,
};
use apest_core::models::user_assessment::{
    CreateUserAssessment, UserAssessmentPatch, UserAssessmentResponse, UserAssessmentRow,
};
use apest_scoring::engine::ScoredItem;
use apest_scoring::instrument_for;
use jiff::Timestamp;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::audit::AuditEvent;
use crate::config::{ConfigError, ServiceConfig};
use crate::error::ServiceError;
use crate::store::AssessmentStore;
use crate::validation::{FieldViolation, Schemas, ValidationError};

/// Assessment lifecycle on top of a row store: authoring, attempts,
/// answers and scoring.
pub struct AssessmentService<S, V> {
    store: S,
    schemas: V,
    priority: [ApestDimension; 5],
    required_completion_percentage: u8,
}

impl<S: AssessmentStore, V: Schemas> AssessmentService<S, V> {
    pub fn new(store: S, schemas: V, config: &ServiceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            store,
            schemas,
            priority: config.priority()?,
            required_completion_percentage: config.required_completion_percentage,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn create_assessment(
        &self,
        input: CreateAssessment,
    ) -> Result<AssessmentResponse, ServiceError> {
        self.schemas.create_assessment(&input)?;
        let row = self.store.insert_assessment(from_create_assessment(input)?)?;

        AuditEvent::new("assessment.created", "assessment", row.id)
            .with_details(serde_json::json!({ "slug": row.slug }))
            .emit();
        Ok(to_assessment_response(&row)?)
    }

    pub fn update_assessment(
        &self,
        id: Uuid,
        input: UpdateAssessment,
    ) -> Result<AssessmentResponse, ServiceError> {
        self.schemas.update_assessment(&input)?;
        let patch = from_update_assessment(input)?;
        let row = self
            .store
            .update_assessment(id, patch)?
            .ok_or_else(|| ServiceError::not_found("assessment", id))?;
        debug!(assessment_id = %id, "assessment updated");
        Ok(to_assessment_response(&row)?)
    }

    pub fn get_assessment(&self, id: Uuid) -> Result<AssessmentResponse, ServiceError> {
        Ok(to_assessment_response(&self.load_assessment(id)?)?)
    }

    /// Add a question and keep the assessment's `questions_count` in step.
    pub fn add_question(
        &self,
        input: CreateAssessmentQuestion,
    ) -> Result<AssessmentQuestionResponse, ServiceError> {
        self.schemas.create_question(&input)?;
        let assessment = self.load_assessment(input.assessment_id)?;
        check_options(&assessment, &input)?;

        let row = self.store.insert_question(from_create_question(input))?;
        let count = self.store.list_questions(assessment.id)?.len() as u32;
        let patch = from_update_assessment(UpdateAssessment {
            questions_count: Some(count),
            ..Default::default()
        })?;
        let assessment = self
            .store
            .update_assessment(assessment.id, patch)?
            .ok_or_else(|| ServiceError::not_found("assessment", assessment.id))?;

        Ok(to_question_response(
            &row,
            Some(AssessmentSummary::from(&assessment)),
        )?)
    }

    pub fn list_questions(
        &self,
        assessment_id: Uuid,
    ) -> Result<Vec<AssessmentQuestionResponse>, ServiceError> {
        self.load_assessment(assessment_id)?;
        self.store
            .list_questions(assessment_id)?
            .iter()
            .map(|q| to_question_response(q, None).map_err(ServiceError::from))
            .collect()
    }

    /// Open a new attempt. Only active assessments can be taken.
    pub fn start_assessment(
        &self,
        input: CreateUserAssessment,
    ) -> Result<UserAssessmentResponse, ServiceError> {
        self.schemas.create_user_assessment(&input)?;
        let assessment = self.load_assessment(input.assessment_id)?;
        if assessment.status != AssessmentStatus::Active {
            return Err(ServiceError::Conflict(format!(
                "assessment {} is not active",
                assessment.slug
            )));
        }

        let row = self
            .store
            .insert_user_assessment(from_create_user_assessment(input)?)?;

        AuditEvent::new("assessment.started", "user_assessment", row.id)
            .by(row.user_id)
            .with_details(serde_json::json!({ "assessment_id": assessment.id }))
            .emit();
        Ok(to_user_assessment_response(
            &row,
            Some(AssessmentSummary::from(&assessment)),
        )?)
    }

    pub fn get_user_assessment(&self, id: Uuid) -> Result<UserAssessmentResponse, ServiceError> {
        let row = self.load_attempt(id)?;
        let assessment = self.store.get_assessment(row.assessment_id)?;
        Ok(to_user_assessment_response(
            &row,
            assessment.as_ref().map(AssessmentSummary::from),
        )?)
    }

    /// Record one answer. Answering the same question again replaces the
    /// earlier answer.
    pub fn record_response(
        &self,
        input: CreateAssessmentAnswer,
    ) -> Result<AssessmentAnswerResponse, ServiceError> {
        self.schemas.create_answer(&input)?;
        let attempt = self.load_attempt(input.user_assessment_id)?;
        if attempt.is_completed() {
            return Err(ServiceError::Conflict(format!(
                "attempt {} is already completed",
                attempt.id
            )));
        }

        let assessment = self.load_assessment(attempt.assessment_id)?;
        let questions = self.store.list_questions(assessment.id)?;
        let question = questions
            .iter()
            .find(|q| q.id == input.question_id)
            .ok_or_else(|| {
                ValidationError::single("questionId", "question does not belong to this assessment")
            })?;
        if let Some(value) = input.response_value {
            check_answer(&assessment, question, value)?;
        }

        let existing = self
            .store
            .list_responses(attempt.id)?
            .into_iter()
            .find(|r| r.question_id == question.id);
        let row = match existing {
            Some(previous) => {
                let patch = from_update_answer(UpdateAssessmentAnswer {
                    response_value: Some(input.response_value),
                    response_text: Some(input.response_text),
                    response_time: Some(input.response_time),
                    confidence: Some(input.confidence),
                    skipped: Some(input.skipped),
                });
                self.store
                    .update_response(previous.id, patch)?
                    .ok_or_else(|| ServiceError::not_found("response", previous.id))?
            }
            None => self.store.insert_response(from_create_answer(input))?,
        };

        let responses = self.store.list_responses(attempt.id)?;
        let percentage = completion_percentage(&questions, &responses);
        let patch = UserAssessmentPatch {
            completion_percentage: Some(percentage),
            ..UserAssessmentPatch::empty(Timestamp::now())
        };
        self.store.update_user_assessment(attempt.id, patch)?;

        AuditEvent::new("response.recorded", "assessment_response", row.id)
            .by(attempt.user_id)
            .with_details(serde_json::json!({
                "question_id": question.id,
                "completion_percentage": percentage,
            }))
            .emit();
        Ok(to_answer_response(&row, Some(QuestionSummary::from(question))))
    }

    pub fn list_responses(
        &self,
        user_assessment_id: Uuid,
    ) -> Result<Vec<AssessmentAnswerResponse>, ServiceError> {
        let attempt = self.load_attempt(user_assessment_id)?;
        let questions = self.store.list_questions(attempt.assessment_id)?;
        Ok(self
            .store
            .list_responses(attempt.id)?
            .iter()
            .map(|r| {
                let question = questions.iter().find(|q| q.id == r.question_id);
                to_answer_response(r, question.map(QuestionSummary::from))
            })
            .collect())
    }

    /// Score the attempt and stamp the result onto it.
    pub fn complete_assessment(
        &self,
        user_assessment_id: Uuid,
    ) -> Result<UserAssessmentResponse, ServiceError> {
        let attempt = self.load_attempt(user_assessment_id)?;
        if attempt.is_completed() {
            return Err(ServiceError::Conflict(format!(
                "attempt {} is already completed",
                attempt.id
            )));
        }

        let assessment = self.load_assessment(attempt.assessment_id)?;
        let questions = self.store.list_questions(assessment.id)?;
        let responses = self.store.list_responses(attempt.id)?;

        // Questions added after the last answer lower the stored figure.
        let percentage = completion_percentage(&questions, &responses);
        if percentage < self.required_completion_percentage {
            return Err(ServiceError::Conflict(format!(
                "attempt {} is {}% complete, {}% required",
                attempt.id, percentage, self.required_completion_percentage
            )));
        }
        let items = questions
            .iter()
            .map(|q| {
                let response = responses.iter().find(|r| r.question_id == q.id);
                ScoredItem::from_rows(q, response)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let instrument = instrument_for(assessment.scoring_method);
        let out_of_range = instrument.validate_responses(&items);
        if !out_of_range.is_empty() {
            warn!(attempt_id = %attempt.id, count = out_of_range.len(), "stored answers out of range");
            return Err(ValidationError {
                violations: out_of_range
                    .into_iter()
                    .map(|e| FieldViolation {
                        field: format!("responses.{}", e.question_id),
                        message: e.message,
                    })
                    .collect(),
            }
            .into());
        }

        let result = instrument.engine().with_priority(self.priority).score(&items);
        let completed_at = Timestamp::now();
        let mut patch = result.completion_patch(
            completed_at,
            Some(elapsed_minutes(attempt.started_at, completed_at)),
        );
        patch.completion_percentage = Some(percentage);
        let row = self
            .store
            .update_user_assessment(attempt.id, patch)?
            .ok_or_else(|| ServiceError::not_found("user_assessment", attempt.id))?;

        info!(
            attempt_id = %row.id,
            answered = result.answered_count,
            skipped = result.skipped_count,
            primary = ?result.primary_gift,
            "attempt scored"
        );
        AuditEvent::new("assessment.completed", "user_assessment", row.id)
            .by(row.user_id)
            .with_details(serde_json::json!({
                "primary_gift": result.primary_gift,
                "secondary_gift": result.secondary_gift,
                "total_score": result.total_score,
            }))
            .emit();
        Ok(to_user_assessment_response(
            &row,
            Some(AssessmentSummary::from(&assessment)),
        )?)
    }

    fn load_assessment(&self, id: Uuid) -> Result<AssessmentRow, ServiceError> {
        self.store
            .get_assessment(id)?
            .ok_or_else(|| ServiceError::not_found("assessment", id))
    }

    fn load_attempt(&self, id: Uuid) -> Result<UserAssessmentRow, ServiceError> {
        self.store
            .get_user_assessment(id)?
            .ok_or_else(|| ServiceError::not_found("user_assessment", id))
    }
}

/// Every listed option must be a value the assessment's scale can score.
fn check_options(
    assessment: &AssessmentRow,
    input: &CreateAssessmentQuestion,
) -> Result<(), ValidationError> {
    let range = instrument_for(assessment.scoring_method).range();
    let violations: Vec<FieldViolation> = input
        .answer_options
        .iter()
        .flatten()
        .filter(|o| !range.contains(f64::from(o.value)))
        .map(|o| FieldViolation {
            field: "answerOptions".to_string(),
            message: format!(
                "option {} is outside the scale [{}, {}]",
                o.value, range.min, range.max
            ),
        })
        .collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { violations })
    }
}

/// Listed options narrow the answer set; the assessment's scale always
/// applies.
fn check_answer(
    assessment: &AssessmentRow,
    question: &AssessmentQuestionRow,
    value: i32,
) -> Result<(), ValidationError> {
    if let Some(options) = &question.answer_options
        && !options.is_empty()
        && !options.iter().any(|o| o.value == value)
    {
        return Err(ValidationError::single(
            "responseValue",
            format!("{value} is not one of the question's options"),
        ));
    }

    instrument_for(assessment.scoring_method)
        .check_value(question.id, f64::from(value))
        .map_err(|e| ValidationError::single("responseValue", e.message))
}

/// Share of questions with an answer or an explicit skip, rounded.
fn completion_percentage(
    questions: &[AssessmentQuestionRow],
    responses: &[AssessmentResponseRow],
) -> u8 {
    if questions.is_empty() {
        return 0;
    }
    let addressed = questions
        .iter()
        .filter(|q| {
            responses
                .iter()
                .any(|r| r.question_id == q.id && (r.skipped || r.has_answer()))
        })
        .count();
    ((addressed * 100) as f64 / questions.len() as f64).round() as u8
}

fn elapsed_minutes(started_at: Timestamp, completed_at: Timestamp) -> u32 {
    let seconds = completed_at.duration_since(started_at).as_secs().max(0);
    u32::try_from((seconds + 30) / 60).unwrap_or(u32::MAX)
}
