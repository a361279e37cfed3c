use apest_core::error::CoreError;
use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("question row is malformed: {0}")]
    MalformedQuestion(#[from] CoreError),

    #[error("response {response_id} does not answer question {question_id}")]
    MismatchedResponse {
        question_id: uuid::Uuid,
        response_id: uuid::Uuid,
    },
}
