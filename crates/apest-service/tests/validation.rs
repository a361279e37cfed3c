use apest_core::models::assessment::{CreateAssessment, UpdateAssessment};
use apest_core::models::question::CreateAssessmentQuestion;
use apest_core::models::response::CreateAssessmentAnswer;
use apest_core::models::user_assessment::CreateUserAssessment;
use apest_service::validation::{DefaultSchemas, Schemas};
use serde_json::json;
use uuid::Uuid;

fn assessment(overrides: serde_json::Value) -> CreateAssessment {
    let mut base = json!({
        "name": "APEST Inventory",
        "slug": "apest-inventory",
        "assessmentType": "apest",
    });
    if let (Some(base), Some(extra)) = (base.as_object_mut(), overrides.as_object()) {
        base.extend(extra.clone());
    }
    serde_json::from_value(base).unwrap()
}

fn answer() -> CreateAssessmentAnswer {
    CreateAssessmentAnswer {
        user_assessment_id: Uuid::new_v4(),
        question_id: Uuid::new_v4(),
        response_value: Some(3),
        response_text: None,
        response_time: None,
        confidence: None,
        skipped: false,
    }
}

#[test]
fn valid_assessment_passes() {
    assert!(DefaultSchemas.create_assessment(&assessment(json!({}))).is_ok());
}

#[test]
fn assessment_violations_are_collected() {
    let err = DefaultSchemas
        .create_assessment(&assessment(json!({
            "name": "  ",
            "slug": "APEST Inventory",
            "validityScore": 1.5,
            "publishedAt": "yesterday",
        })))
        .unwrap_err();

    for field in ["name", "slug", "validityScore", "publishedAt"] {
        assert!(err.has_field(field), "missing violation for {field}");
    }
    assert!(!err.has_field("reliabilityScore"));
    assert!(err.to_string().starts_with("validation failed: name:"));
}

#[test]
fn update_checks_only_present_fields() {
    assert!(DefaultSchemas.update_assessment(&UpdateAssessment::default()).is_ok());

    let input: UpdateAssessment = serde_json::from_value(json!({
        "slug": "bad slug",
        "reliabilityScore": null
    }))
    .unwrap();
    let err = DefaultSchemas.update_assessment(&input).unwrap_err();
    assert_eq!(err.violations.len(), 1);
    assert_eq!(err.violations[0].field, "slug");
}

#[test]
fn question_weight_must_be_positive() {
    let mut input = CreateAssessmentQuestion {
        assessment_id: Uuid::new_v4(),
        question_text: "I start new things".to_string(),
        question_type: Default::default(),
        order_index: 1,
        is_required: true,
        category: None,
        weight: Some(0.0),
        reverse_scored: false,
        apest_dimension: None,
        answer_options: None,
    };
    assert!(DefaultSchemas.create_question(&input).unwrap_err().has_field("weight"));

    input.weight = Some(1.5);
    assert!(DefaultSchemas.create_question(&input).is_ok());
}

#[test]
fn start_time_must_parse() {
    let input = CreateUserAssessment {
        user_id: Uuid::new_v4(),
        assessment_id: Uuid::new_v4(),
        started_at: Some("not a time".to_string()),
    };
    assert!(
        DefaultSchemas
            .create_user_assessment(&input)
            .unwrap_err()
            .has_field("startedAt")
    );
}

#[test]
fn confidence_is_one_to_five() {
    let mut input = answer();
    input.confidence = Some(0);
    assert!(DefaultSchemas.create_answer(&input).unwrap_err().has_field("confidence"));

    input.confidence = Some(5);
    assert!(DefaultSchemas.create_answer(&input).is_ok());
}

#[test]
fn answers_carry_exactly_one_of_value_or_text() {
    let mut input = answer();
    input.response_text = Some("both".to_string());
    assert!(DefaultSchemas.create_answer(&input).unwrap_err().has_field("responseValue"));

    input.response_value = None;
    assert!(DefaultSchemas.create_answer(&input).is_ok());

    input.response_text = None;
    assert!(DefaultSchemas.create_answer(&input).is_err());
}

#[test]
fn skipped_answers_carry_nothing() {
    let mut input = answer();
    input.skipped = true;
    assert!(DefaultSchemas.create_answer(&input).unwrap_err().has_field("skipped"));

    input.response_value = None;
    assert!(DefaultSchemas.create_answer(&input).is_ok());
}
