use apest_core::models::dimension::ApestDimension::{
    self, Apostolic, Evangelistic, Prophetic, Shepherding, Teaching,
};
use apest_core::models::user_assessment::NewUserAssessmentRow;
use apest_scoring::engine::{ScoredItem, ScoringEngine};
use apest_scoring::instruments::binary::Binary;
use apest_scoring::instruments::likert::{Likert5, Likert7};
use apest_scoring::Instrument;
use jiff::Timestamp;
use uuid::Uuid;

fn item(dimension: Option<ApestDimension>, weight: f64, reverse: bool, value: i32) -> ScoredItem {
    ScoredItem {
        question_id: Uuid::new_v4(),
        dimension,
        weight,
        reverse_scored: reverse,
        value: Some(f64::from(value)),
        skipped: false,
        confidence: None,
    }
}

fn likert5() -> ScoringEngine {
    Likert5.engine()
}

#[test]
fn two_question_apostolic_scenario() {
    let items = vec![
        item(Some(Apostolic), 1.0, false, 5),
        item(Some(Apostolic), 1.0, true, 2),
    ];

    let result = likert5().score(&items);
    assert_eq!(result.raw_scores.apostolic, 9.0);
    assert_eq!(result.apostolic_score, 9.0);
    assert_eq!(result.max_per_dimension.apostolic, 10.0);
    assert_eq!(result.normalized_scores.apostolic, 90.0);
    assert_eq!(result.max_possible_score, 10.0);
    assert_eq!(result.primary_gift, Some(Apostolic));
    assert_eq!(result.answered_count, 2);
}

#[test]
fn reverse_scored_contributes_six_minus_value_times_weight() {
    let engine = likert5();
    for value in 1..=5 {
        for weight in [0.5, 1.0, 1.5, 2.0] {
            let result = engine.score(&[item(Some(Prophetic), weight, true, value)]);
            let expected = f64::from(6 - value) * weight;
            assert_eq!(
                result.raw_scores.prophetic, expected,
                "value {value} weight {weight}"
            );
        }
    }
}

#[test]
fn total_score_is_unweighted_and_unreversed() {
    let items = vec![
        item(Some(Teaching), 2.0, true, 1),
        item(Some(Teaching), 1.0, false, 4),
    ];

    let result = likert5().score(&items);
    assert_eq!(result.total_score, 5.0);
    assert_eq!(result.raw_scores.teaching, 2.0 * 5.0 + 4.0);
    assert!(result.total_score <= result.max_possible_score);
}

#[test]
fn skipped_and_unanswered_items_do_not_contribute() {
    let mut skipped = item(Some(Evangelistic), 1.0, false, 5);
    skipped.skipped = true;
    let mut unanswered = item(Some(Evangelistic), 1.0, false, 0);
    unanswered.value = None;
    let answered = item(Some(Evangelistic), 1.0, false, 3);

    let result = likert5().score(&[skipped, unanswered, answered]);
    assert_eq!(result.raw_scores.evangelistic, 3.0);
    assert_eq!(result.total_score, 3.0);
    assert_eq!(result.answered_count, 1);
    assert_eq!(result.skipped_count, 1);
    // All three tagged questions count toward the achievable maximum.
    assert_eq!(result.max_per_dimension.evangelistic, 15.0);
    assert_eq!(result.normalized_scores.evangelistic, 20.0);
}

#[test]
fn untagged_questions_only_affect_the_total() {
    let items = vec![item(None, 1.0, false, 4), item(Some(Shepherding), 1.0, false, 5)];

    let result = likert5().score(&items);
    assert_eq!(result.total_score, 9.0);
    assert_eq!(result.max_possible_score, 10.0);
    assert_eq!(result.raw_scores.shepherding, 5.0);
    assert_eq!(result.normalized_scores.shepherding, 100.0);
    assert_eq!(result.primary_gift, Some(Shepherding));
}

#[test]
fn no_dimension_tags_yields_zero_scores_and_no_gifts() {
    let items = vec![item(None, 1.0, false, 4), item(None, 1.0, true, 2)];

    let result = likert5().score(&items);
    for (_, score) in result.raw_scores.iter() {
        assert_eq!(score, 0.0);
    }
    for (_, score) in result.normalized_scores.iter() {
        assert_eq!(score, 0.0);
        assert!(!score.is_nan());
    }
    assert_eq!(result.primary_gift, None);
    assert_eq!(result.secondary_gift, None);
    assert_eq!(result.total_score, 6.0);
}

#[test]
fn empty_attempt_scores_to_zero() {
    let result = likert5().score(&[]);
    assert_eq!(result.total_score, 0.0);
    assert_eq!(result.max_possible_score, 0.0);
    assert_eq!(result.primary_gift, None);
    assert_eq!(result.response_consistency, None);
    assert_eq!(result.confidence_level, None);
}

#[test]
fn gifts_rank_by_normalized_not_raw_score() {
    let items = vec![
        item(Some(Apostolic), 1.0, false, 4),
        item(Some(Apostolic), 1.0, false, 4),
        item(Some(Prophetic), 1.0, false, 5),
        item(Some(Teaching), 1.0, false, 3),
    ];

    let result = likert5().score(&items);
    assert_eq!(result.raw_scores.apostolic, 8.0);
    assert_eq!(result.normalized_scores.apostolic, 80.0);
    assert_eq!(result.normalized_scores.prophetic, 100.0);
    assert_eq!(result.primary_gift, Some(Prophetic));
    assert_eq!(result.secondary_gift, Some(Apostolic));
}

#[test]
fn ties_fall_back_to_priority_order() {
    let items = vec![
        item(Some(Teaching), 1.0, false, 5),
        item(Some(Evangelistic), 1.0, false, 5),
    ];

    let result = likert5().score(&items);
    assert_eq!(result.primary_gift, Some(Evangelistic));
    assert_eq!(result.secondary_gift, Some(Teaching));

    let engine = likert5().with_priority([Teaching, Shepherding, Evangelistic, Prophetic, Apostolic]);
    let result = engine.score(&items);
    assert_eq!(result.primary_gift, Some(Teaching));
    assert_eq!(result.secondary_gift, Some(Evangelistic));
}

#[test]
fn seven_point_scale_reverses_around_eight() {
    let result = Likert7.engine().score(&[item(Some(Apostolic), 1.0, true, 2)]);
    assert_eq!(result.raw_scores.apostolic, 6.0);
    assert_eq!(result.max_possible_score, 7.0);
    assert_eq!(result.normalized_scores.apostolic, 86.0);
}

#[test]
fn binary_scale_flips_zero_and_one() {
    let items = vec![
        item(Some(Prophetic), 1.0, true, 1),
        item(Some(Prophetic), 1.0, true, 0),
        item(Some(Prophetic), 1.0, false, 1),
    ];
    let result = Binary.engine().score(&items);
    assert_eq!(result.raw_scores.prophetic, 2.0);
    assert_eq!(result.max_per_dimension.prophetic, 3.0);
    assert_eq!(result.normalized_scores.prophetic, 67.0);
}

#[test]
fn consistency_is_one_for_uniform_answers() {
    let items = vec![
        item(Some(Apostolic), 1.0, false, 4),
        item(Some(Apostolic), 1.0, true, 2),
        item(Some(Teaching), 1.0, false, 3),
        item(Some(Teaching), 1.0, false, 3),
    ];
    assert_eq!(likert5().score(&items).response_consistency, Some(1.0));
}

#[test]
fn consistency_is_zero_for_opposite_answers() {
    let items = vec![
        item(Some(Apostolic), 1.0, false, 1),
        item(Some(Apostolic), 1.0, false, 5),
    ];
    assert_eq!(likert5().score(&items).response_consistency, Some(0.0));
}

#[test]
fn consistency_needs_two_answers_in_a_dimension() {
    let items = vec![
        item(Some(Apostolic), 1.0, false, 1),
        item(Some(Prophetic), 1.0, false, 5),
    ];
    assert_eq!(likert5().score(&items).response_consistency, None);
}

#[test]
fn confidence_level_averages_ratings_on_answered_items() {
    let mut a = item(Some(Apostolic), 1.0, false, 3);
    a.confidence = Some(4);
    let mut b = item(Some(Apostolic), 1.0, false, 3);
    b.confidence = Some(5);
    let mut c = item(Some(Apostolic), 1.0, false, 3);
    c.confidence = Some(3);
    let mut skipped = item(Some(Apostolic), 1.0, false, 3);
    skipped.skipped = true;
    skipped.confidence = Some(1);

    assert_eq!(likert5().score(&[a, b, c, skipped]).confidence_level, Some(4));
}

#[test]
fn completion_patch_finalises_the_attempt() {
    let items = vec![
        item(Some(Apostolic), 1.0, false, 5),
        item(Some(Apostolic), 1.0, false, 5),
        item(Some(Shepherding), 1.0, false, 3),
    ];
    let result = likert5().score(&items);

    let mut row = NewUserAssessmentRow {
        user_id: Uuid::new_v4(),
        assessment_id: Uuid::new_v4(),
        started_at: "2024-02-01T09:00:00Z".parse().unwrap(),
        completion_percentage: 100,
    }
    .into_row(Uuid::new_v4(), "2024-02-01T09:00:00Z".parse().unwrap());

    let completed_at: Timestamp = "2024-02-01T09:12:00Z".parse().unwrap();
    row.apply(result.completion_patch(completed_at, Some(12)));

    assert!(row.is_completed());
    assert_eq!(row.completed_at, Some(completed_at));
    assert_eq!(row.updated_at, completed_at);
    assert_eq!(row.total_score, Some(13.0));
    assert_eq!(row.max_possible_score, Some(15.0));
    assert_eq!(row.apostolic_score, Some(10.0));
    assert_eq!(row.shepherding_score, Some(3.0));
    assert_eq!(row.primary_gift, Some(Apostolic));
    assert_eq!(row.secondary_gift, Some(Shepherding));
    assert_eq!(row.response_consistency.as_deref(), Some("1.00"));
    assert_eq!(row.completion_time, Some(12));
    assert_eq!(row.completion_percentage, 100);
}

#[test]
fn result_serializes_all_five_dimensions() {
    let result = likert5().score(&[item(Some(Apostolic), 1.0, false, 5)]);
    let json = serde_json::to_value(&result).unwrap();

    let raw = json["rawScores"].as_object().unwrap();
    let mut keys: Vec<_> = raw.keys().cloned().collect();
    keys.sort();
    assert_eq!(
        keys,
        vec!["apostolic", "evangelistic", "prophetic", "shepherding", "teaching"]
    );
    assert_eq!(json["primaryGift"], "apostolic");
}
