use apest_core::models::assessment::ScoringMethod;

use crate::Instrument;
use crate::scoring::ScoreRange;

/// 5-point Likert: 1 (strongly disagree) to 5 (strongly agree).
/// The default scale for APEST surveys.
pub struct Likert5;

impl Instrument for Likert5 {
    fn id(&self) -> &str {
        "likert_5"
    }

    fn name(&self) -> &str {
        "5-point Likert"
    }

    fn method(&self) -> ScoringMethod {
        ScoringMethod::Likert5
    }

    fn range(&self) -> ScoreRange {
        ScoreRange {
            min: 1.0,
            max: 5.0,
            step: Some(1.0),
        }
    }
}

/// 7-point Likert, 1 to 7.
pub struct Likert7;

impl Instrument for Likert7 {
    fn id(&self) -> &str {
        "likert_7"
    }

    fn name(&self) -> &str {
        "7-point Likert"
    }

    fn method(&self) -> ScoringMethod {
        ScoringMethod::Likert7
    }

    fn range(&self) -> ScoreRange {
        ScoreRange {
            min: 1.0,
            max: 7.0,
            step: Some(1.0),
        }
    }
}
