use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;
use uuid::Uuid;

/// Defines the valid range for an answer value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }

    /// Mirror a value across the scale: `min + max - value`.
    /// On a 1-5 scale that is `6 - value`.
    pub fn reverse(&self, value: f64) -> f64 {
        self.min + self.max - value
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// An answer value that falls outside its instrument's range.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub question_id: Uuid,
    pub value: f64,
    pub expected_range: ScoreRange,
    pub message: String,
}
