//! apest-scoring
//!
//! Turns a user's answers into APEST dimension scores. Pure computation, no
//! I/O: callers hand in question/answer pairs and get a [`ScoringResult`]
//! back, ready to be written onto the attempt row.

pub mod engine;
pub mod error;
pub mod instruments;
pub mod metrics;
pub mod scoring;

use apest_core::models::assessment::ScoringMethod;
use uuid::Uuid;

use engine::{ScoredItem, ScoringEngine};
use scoring::{ScoreRange, ValidationError};

pub use engine::ScoringResult;

/// A response scale an assessment can be answered on.
pub trait Instrument: Send + Sync {
    /// Unique identifier, matching the `scoring_method` column (e.g. "likert_5").
    fn id(&self) -> &str;

    /// Human-readable name (e.g. "5-point Likert").
    fn name(&self) -> &str;

    fn method(&self) -> ScoringMethod;

    /// The values a single answer may take.
    fn range(&self) -> ScoreRange;

    /// A scoring engine configured for this scale.
    fn engine(&self) -> ScoringEngine {
        ScoringEngine::new(self.range())
    }

    /// Check one answer value against the scale.
    fn check_value(&self, question_id: Uuid, value: f64) -> Result<(), ValidationError> {
        let range = self.range();
        if range.contains(value) {
            return Ok(());
        }
        Err(ValidationError {
            question_id,
            value,
            expected_range: range,
            message: format!(
                "{}: answer {} to question {} is outside range [{}, {}]",
                self.name(),
                value,
                question_id,
                range.min,
                range.max,
            ),
        })
    }

    /// Validate every answered item against the scale.
    fn validate_responses(&self, items: &[ScoredItem]) -> Vec<ValidationError> {
        items
            .iter()
            .filter_map(|item| {
                let value = item.answered_value()?;
                self.check_value(item.question_id, value).err()
            })
            .collect()
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::likert::Likert5),
        Box::new(instruments::likert::Likert7),
        Box::new(instruments::binary::Binary),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// The instrument that scores a given scoring method.
pub fn instrument_for(method: ScoringMethod) -> Box<dyn Instrument> {
    match method {
        ScoringMethod::Likert5 => Box::new(instruments::likert::Likert5),
        ScoringMethod::Likert7 => Box::new(instruments::likert::Likert7),
        ScoringMethod::Binary => Box::new(instruments::binary::Binary),
    }
}
