//! Secondary metrics reported alongside the dimension scores.

use apest_core::models::dimension::ApestDimension;

use crate::engine::{ScoredItem, ScoringEngine};

/// How consistently the user answered items within the same dimension.
///
/// For each dimension with at least two answered items, take the population
/// standard deviation of the reversal-adjusted values. The mean deviation is
/// scaled by half the answer range (the largest possible deviation) and
/// subtracted from 1, so 1.0 means every dimension was answered uniformly.
/// Rounded to two decimals; `None` if no dimension has two answers.
pub fn response_consistency(engine: &ScoringEngine, items: &[ScoredItem]) -> Option<f64> {
    let half_span = engine.range().span() / 2.0;
    if half_span <= 0.0 {
        return None;
    }

    let deviations: Vec<f64> = ApestDimension::ALL
        .into_iter()
        .filter_map(|dimension| {
            let values: Vec<f64> = items
                .iter()
                .filter(|i| i.dimension == Some(dimension))
                .filter_map(|i| {
                    i.answered_value()
                        .map(|v| engine.effective_value(v, i.reverse_scored))
                })
                .collect();
            std_dev(&values)
        })
        .collect();

    if deviations.is_empty() {
        return None;
    }

    let mean_deviation = deviations.iter().sum::<f64>() / deviations.len() as f64;
    let consistency = (1.0 - mean_deviation / half_span).clamp(0.0, 1.0);
    Some((consistency * 100.0).round() / 100.0)
}

/// Rounded mean of the 1-5 self-ratings on answered items.
pub fn confidence_level(items: &[ScoredItem]) -> Option<u8> {
    let ratings: Vec<f64> = items
        .iter()
        .filter(|i| !i.skipped)
        .filter_map(|i| i.confidence)
        .map(f64::from)
        .collect();

    if ratings.is_empty() {
        return None;
    }
    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
    Some(mean.round() as u8)
}

fn std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Some(variance.sqrt())
}
