use apest_core::error::CoreError;
use apest_scoring::error::ScoringError;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::store::StoreError;
use crate::validation::ValidationError;

/// Unified error type for every service operation.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("mapping error: {0}")]
    Mapping(#[from] CoreError),

    #[error("scoring error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("store error: {0}")]
    Store(StoreError),
}

/// The body a transport layer would send for a [`ServiceError`].
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<crate::validation::FieldViolation>,
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        ServiceError::NotFound { entity, id }
    }

    /// HTTP-equivalent status for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 400,
            ServiceError::NotFound { .. } => 404,
            ServiceError::Conflict(_) => 409,
            ServiceError::Mapping(_) | ServiceError::Scoring(_) | ServiceError::Store(_) => 500,
        }
    }

    /// Internal failures are logged and replaced with a generic message.
    pub fn to_body(&self) -> ErrorBody {
        match self {
            ServiceError::Validation(e) => ErrorBody {
                error: e.to_string(),
                violations: e.violations.clone(),
            },
            ServiceError::NotFound { .. } | ServiceError::Conflict(_) => ErrorBody {
                error: self.to_string(),
                violations: Vec::new(),
            },
            other => {
                tracing::error!("internal error: {other}");
                ErrorBody {
                    error: "internal server error".to_string(),
                    violations: Vec::new(),
                }
            }
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Duplicate { entity, key } => {
                ServiceError::Conflict(format!("{entity} already exists: {key}"))
            }
            other => ServiceError::Store(other),
        }
    }
}
