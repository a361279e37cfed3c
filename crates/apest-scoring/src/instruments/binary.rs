use apest_core::models::assessment::ScoringMethod;

use crate::Instrument;
use crate::scoring::ScoreRange;

/// Yes/no items scored 0 or 1. Reversal flips 0 and 1.
pub struct Binary;

impl Instrument for Binary {
    fn id(&self) -> &str {
        "binary"
    }

    fn name(&self) -> &str {
        "Yes/No"
    }

    fn method(&self) -> ScoringMethod {
        ScoringMethod::Binary
    }

    fn range(&self) -> ScoreRange {
        ScoreRange {
            min: 0.0,
            max: 1.0,
            step: Some(1.0),
        }
    }
}
