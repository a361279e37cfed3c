use apest_core::models::assessment::{AssessmentResponse, CreateAssessment, UpdateAssessment};
use apest_core::models::dimension::ApestDimension;
use apest_core::models::question::{
    AnswerOption, AssessmentQuestionResponse, CreateAssessmentQuestion, QuestionType,
};
use apest_core::models::response::CreateAssessmentAnswer;
use apest_core::models::user_assessment::{CompletionStatus, CreateUserAssessment};
use apest_service::config::ServiceConfig;
use apest_service::store::{AssessmentStore, InMemoryStore};
use apest_service::validation::DefaultSchemas;
use apest_service::{AssessmentService, ServiceError};
use serde_json::json;
use uuid::Uuid;

type Service = AssessmentService<InMemoryStore, DefaultSchemas>;

fn service_with(config: ServiceConfig) -> Service {
    AssessmentService::new(InMemoryStore::new(), DefaultSchemas, &config).unwrap()
}

fn service() -> Service {
    service_with(ServiceConfig::default())
}

fn assessment_input(slug: &str, status: &str) -> CreateAssessment {
    serde_json::from_value(json!({
        "name": "APEST Inventory",
        "slug": slug,
        "assessmentType": "apest",
        "status": status,
    }))
    .unwrap()
}

fn question(
    service: &Service,
    assessment_id: Uuid,
    order: u32,
    dimension: ApestDimension,
    reverse: bool,
) -> AssessmentQuestionResponse {
    service
        .add_question(CreateAssessmentQuestion {
            assessment_id,
            question_text: format!("Statement {order}"),
            question_type: Default::default(),
            order_index: order,
            is_required: true,
            category: None,
            weight: None,
            reverse_scored: reverse,
            apest_dimension: Some(dimension),
            answer_options: None,
        })
        .unwrap()
}

fn question_with_options(
    service: &Service,
    assessment_id: Uuid,
    values: &[i32],
) -> Result<AssessmentQuestionResponse, ServiceError> {
    service.add_question(CreateAssessmentQuestion {
        assessment_id,
        question_text: "Which best describes you?".to_string(),
        question_type: QuestionType::MultipleChoice,
        order_index: 1,
        is_required: true,
        category: None,
        weight: None,
        reverse_scored: false,
        apest_dimension: Some(ApestDimension::Apostolic),
        answer_options: Some(
            values
                .iter()
                .map(|&value| AnswerOption {
                    value,
                    label: format!("Option {value}"),
                    description: None,
                })
                .collect(),
        ),
    })
}

fn answer(user_assessment_id: Uuid, question_id: Uuid, value: i32) -> CreateAssessmentAnswer {
    CreateAssessmentAnswer {
        user_assessment_id,
        question_id,
        response_value: Some(value),
        response_text: None,
        response_time: Some(12),
        confidence: Some(4),
        skipped: false,
    }
}

fn start(service: &Service, assessment: &AssessmentResponse) -> Uuid {
    service
        .start_assessment(CreateUserAssessment {
            user_id: Uuid::new_v4(),
            assessment_id: assessment.id,
            started_at: None,
        })
        .unwrap()
        .id
}

/// An active assessment with two apostolic items (one reversed) and one
/// teaching item.
fn seeded(service: &Service) -> (AssessmentResponse, Vec<AssessmentQuestionResponse>) {
    let assessment = service
        .create_assessment(assessment_input("apest-inventory", "active"))
        .unwrap();
    let questions = vec![
        question(service, assessment.id, 1, ApestDimension::Apostolic, false),
        question(service, assessment.id, 2, ApestDimension::Apostolic, true),
        question(service, assessment.id, 3, ApestDimension::Teaching, false),
    ];
    (assessment, questions)
}

#[test]
fn full_attempt_is_scored_and_completed() {
    let service = service();
    let (assessment, questions) = seeded(&service);
    let attempt = start(&service, &assessment);

    let first = service
        .record_response(answer(attempt, questions[0].id, 5))
        .unwrap();
    assert!(first.has_answer);
    assert_eq!(first.response_time_text.as_deref(), Some("12 seconds"));
    assert_eq!(
        service.get_user_assessment(attempt).unwrap().completion_percentage,
        33
    );

    service
        .record_response(answer(attempt, questions[1].id, 1))
        .unwrap();
    service
        .record_response(answer(attempt, questions[2].id, 3))
        .unwrap();
    let in_progress = service.get_user_assessment(attempt).unwrap();
    assert_eq!(in_progress.completion_percentage, 100);
    assert_eq!(in_progress.completion_status, CompletionStatus::InProgress);

    let done = service.complete_assessment(attempt).unwrap();
    assert!(done.is_completed);
    assert_eq!(done.completion_status, CompletionStatus::Completed);
    assert_eq!(done.apostolic_score, Some(10.0));
    assert_eq!(done.teaching_score, Some(3.0));
    assert_eq!(done.total_score, Some(9.0));
    assert_eq!(done.max_possible_score, Some(15.0));
    assert_eq!(done.score_percentage, Some(60));
    assert_eq!(done.primary_gift, Some(ApestDimension::Apostolic));
    assert_eq!(done.secondary_gift, Some(ApestDimension::Teaching));
    assert_eq!(done.response_consistency, Some(1.0));
    assert_eq!(done.confidence_level, Some(4));
    assert_eq!(done.completion_time, Some(0));
    assert_eq!(done.assessment.unwrap().slug, "apest-inventory");

    let normalized = done.normalized_scores.unwrap();
    assert_eq!(normalized.apostolic, 100.0);
    assert_eq!(normalized.teaching, 60.0);
}

#[test]
fn adding_questions_tracks_the_count() {
    let service = service();
    let (assessment, questions) = seeded(&service);

    assert_eq!(questions[0].weight, 1.0);
    assert_eq!(questions[2].assessment.as_ref().unwrap().id, assessment.id);
    assert_eq!(service.get_assessment(assessment.id).unwrap().questions_count, 3);

    let listed = service.list_questions(assessment.id).unwrap();
    let order: Vec<u32> = listed.iter().map(|q| q.order_index).collect();
    assert_eq!(order, vec![1, 2, 3]);
}

#[test]
fn update_assessment_is_partial() {
    let service = service();
    let created = service
        .create_assessment(assessment_input("mdna-check", "draft"))
        .unwrap();

    let input: UpdateAssessment = serde_json::from_value(json!({
        "status": "active",
        "validityScore": 0.82
    }))
    .unwrap();
    let updated = service.update_assessment(created.id, input).unwrap();

    assert!(updated.is_published);
    assert_eq!(updated.validity_score, Some(0.82));
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.slug, created.slug);
}

#[test]
fn duplicate_slug_is_a_conflict() {
    let service = service();
    service
        .create_assessment(assessment_input("apest-inventory", "active"))
        .unwrap();
    let err = service
        .create_assessment(assessment_input("apest-inventory", "draft"))
        .unwrap_err();

    assert!(matches!(err, ServiceError::Conflict(_)));
    assert_eq!(err.status_code(), 409);
}

#[test]
fn draft_assessments_cannot_be_started() {
    let service = service();
    let draft = service
        .create_assessment(assessment_input("draft-one", "draft"))
        .unwrap();

    let err = service
        .start_assessment(CreateUserAssessment {
            user_id: Uuid::new_v4(),
            assessment_id: draft.id,
            started_at: None,
        })
        .unwrap_err();
    assert_eq!(err.status_code(), 409);
}

#[test]
fn explicit_start_time_is_kept() {
    let service = service();
    let (assessment, _) = seeded(&service);
    let started = service
        .start_assessment(CreateUserAssessment {
            user_id: Uuid::new_v4(),
            assessment_id: assessment.id,
            started_at: Some("2024-03-01T12:00:00Z".to_string()),
        })
        .unwrap();

    assert_eq!(started.started_at, "2024-03-01T12:00:00.000Z");
    assert_eq!(started.completion_status, CompletionStatus::NotStarted);
    assert!(!started.is_in_progress);
}

#[test]
fn out_of_range_answers_are_rejected() {
    let service = service();
    let (assessment, questions) = seeded(&service);
    let attempt = start(&service, &assessment);

    let err = service
        .record_response(answer(attempt, questions[0].id, 6))
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
    match err {
        ServiceError::Validation(v) => assert!(v.has_field("responseValue")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn answers_must_belong_to_the_attempts_assessment() {
    let service = service();
    let (assessment, _) = seeded(&service);
    let other = service
        .create_assessment(assessment_input("other", "active"))
        .unwrap();
    let foreign = question(&service, other.id, 1, ApestDimension::Prophetic, false);
    let attempt = start(&service, &assessment);

    let err = service
        .record_response(answer(attempt, foreign.id, 3))
        .unwrap_err();
    match err {
        ServiceError::Validation(v) => assert!(v.has_field("questionId")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn re_answering_replaces_the_previous_answer() {
    let service = service();
    let (assessment, questions) = seeded(&service);
    let attempt = start(&service, &assessment);

    let first = service
        .record_response(answer(attempt, questions[2].id, 3))
        .unwrap();
    let second = service
        .record_response(answer(attempt, questions[2].id, 4))
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.response_value, Some(4));
    let responses = service.list_responses(attempt).unwrap();
    assert_eq!(responses.len(), 1);
    assert_eq!(
        responses[0].question.as_ref().unwrap().apest_dimension,
        Some(ApestDimension::Teaching)
    );
    assert_eq!(
        service.get_user_assessment(attempt).unwrap().completion_percentage,
        33
    );
}

#[test]
fn skipped_questions_count_toward_completion_but_not_scores() {
    let service = service();
    let (assessment, questions) = seeded(&service);
    let attempt = start(&service, &assessment);

    service
        .record_response(answer(attempt, questions[0].id, 4))
        .unwrap();
    service
        .record_response(answer(attempt, questions[1].id, 2))
        .unwrap();
    let skipped = service
        .record_response(CreateAssessmentAnswer {
            user_assessment_id: attempt,
            question_id: questions[2].id,
            response_value: None,
            response_text: None,
            response_time: None,
            confidence: None,
            skipped: true,
        })
        .unwrap();
    assert!(!skipped.has_answer);

    let done = service.complete_assessment(attempt).unwrap();
    assert_eq!(done.apostolic_score, Some(8.0));
    assert_eq!(done.teaching_score, Some(0.0));
    assert_eq!(done.total_score, Some(6.0));
    assert_eq!(done.primary_gift, Some(ApestDimension::Apostolic));
}

#[test]
fn incomplete_attempts_are_refused_below_the_threshold() {
    let service = service();
    let (assessment, questions) = seeded(&service);
    let attempt = start(&service, &assessment);
    service
        .record_response(answer(attempt, questions[0].id, 5))
        .unwrap();

    let err = service.complete_assessment(attempt).unwrap_err();
    assert_eq!(err.status_code(), 409);
    assert!(err.to_string().contains("33%"));
}

#[test]
fn lenient_threshold_scores_partial_attempts() {
    let service = service_with(ServiceConfig {
        required_completion_percentage: 0,
        ..ServiceConfig::default()
    });
    let (assessment, questions) = seeded(&service);
    let attempt = start(&service, &assessment);
    service
        .record_response(answer(attempt, questions[2].id, 5))
        .unwrap();

    let done = service.complete_assessment(attempt).unwrap();
    // The unanswered apostolic items still count toward the maximum.
    assert_eq!(done.normalized_scores.unwrap().apostolic, 0.0);
    assert_eq!(done.normalized_scores.unwrap().teaching, 100.0);
    assert_eq!(done.primary_gift, Some(ApestDimension::Teaching));
    assert_eq!(done.secondary_gift, Some(ApestDimension::Apostolic));
    assert_eq!(done.max_possible_score, Some(15.0));
}

#[test]
fn completed_attempts_are_frozen() {
    let service = service();
    let (assessment, questions) = seeded(&service);
    let attempt = start(&service, &assessment);
    for (q, v) in questions.iter().zip([3, 3, 3]) {
        service.record_response(answer(attempt, q.id, v)).unwrap();
    }
    service.complete_assessment(attempt).unwrap();

    let again = service.complete_assessment(attempt).unwrap_err();
    assert_eq!(again.status_code(), 409);

    let late = service
        .record_response(answer(attempt, questions[0].id, 5))
        .unwrap_err();
    assert_eq!(late.status_code(), 409);
    assert_eq!(
        service.store().list_responses(attempt).unwrap()[0].response_value,
        Some(3)
    );
}

#[test]
fn unknown_ids_are_not_found() {
    let service = service();
    let missing = Uuid::new_v4();

    for err in [
        service.get_assessment(missing).unwrap_err(),
        service.get_user_assessment(missing).unwrap_err(),
        service.complete_assessment(missing).unwrap_err(),
        service
            .record_response(answer(missing, Uuid::new_v4(), 3))
            .unwrap_err(),
    ] {
        assert!(matches!(err, ServiceError::NotFound { .. }), "{err:?}");
        assert_eq!(err.status_code(), 404);
    }
}

#[test]
fn custom_priority_breaks_ties() {
    let service = service_with(ServiceConfig {
        dimension_priority: vec![
            ApestDimension::Teaching,
            ApestDimension::Shepherding,
            ApestDimension::Evangelistic,
            ApestDimension::Prophetic,
            ApestDimension::Apostolic,
        ],
        ..ServiceConfig::default()
    });
    let assessment = service
        .create_assessment(assessment_input("ties", "active"))
        .unwrap();
    let a = question(&service, assessment.id, 1, ApestDimension::Apostolic, false);
    let t = question(&service, assessment.id, 2, ApestDimension::Teaching, false);
    let attempt = start(&service, &assessment);
    service.record_response(answer(attempt, a.id, 4)).unwrap();
    service.record_response(answer(attempt, t.id, 4)).unwrap();

    let done = service.complete_assessment(attempt).unwrap();
    assert_eq!(done.primary_gift, Some(ApestDimension::Teaching));
    assert_eq!(done.secondary_gift, Some(ApestDimension::Apostolic));
}

#[test]
fn internal_errors_are_not_leaked() {
    let body = ServiceError::Store(apest_service::store::StoreError::Poisoned).to_body();
    assert_eq!(body.error, "internal server error");
    assert!(body.violations.is_empty());

    let body = ServiceError::not_found("assessment", Uuid::nil()).to_body();
    assert!(body.error.starts_with("assessment not found"));
}

#[test]
fn questions_added_after_full_completion_reopen_the_gate() {
    let service = service();
    let (assessment, questions) = seeded(&service);
    let attempt = start(&service, &assessment);
    for q in &questions {
        service.record_response(answer(attempt, q.id, 4)).unwrap();
    }
    assert_eq!(
        service.get_user_assessment(attempt).unwrap().completion_percentage,
        100
    );

    let late = question(&service, assessment.id, 4, ApestDimension::Prophetic, false);
    let err = service.complete_assessment(attempt).unwrap_err();
    assert_eq!(err.status_code(), 409);
    assert!(err.to_string().contains("75%"), "{err}");

    service.record_response(answer(attempt, late.id, 2)).unwrap();
    let done = service.complete_assessment(attempt).unwrap();
    assert_eq!(done.completion_percentage, 100);
    assert_eq!(done.prophetic_score, Some(2.0));
}

#[test]
fn options_outside_the_scale_are_rejected_when_authoring() {
    let service = service();
    let assessment = service
        .create_assessment(assessment_input("options-scale", "active"))
        .unwrap();

    let err = question_with_options(&service, assessment.id, &[0, 1, 2, 3, 4]).unwrap_err();
    assert_eq!(err.status_code(), 400);
    match err {
        ServiceError::Validation(v) => {
            assert!(v.has_field("answerOptions"));
            assert_eq!(v.violations.len(), 1);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(service.get_assessment(assessment.id).unwrap().questions_count, 0);
}

#[test]
fn answers_outside_the_option_list_are_rejected() {
    let service = service();
    let assessment = service
        .create_assessment(assessment_input("options-reject", "active"))
        .unwrap();
    let q = question_with_options(&service, assessment.id, &[1, 3, 5]).unwrap();
    let attempt = start(&service, &assessment);

    let err = service.record_response(answer(attempt, q.id, 2)).unwrap_err();
    match err {
        ServiceError::Validation(v) => assert!(v.has_field("responseValue")),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(service.list_responses(attempt).unwrap().is_empty());
}

#[test]
fn listed_option_answers_are_scored() {
    let service = service();
    let assessment = service
        .create_assessment(assessment_input("options-accept", "active"))
        .unwrap();
    let q = question_with_options(&service, assessment.id, &[1, 3, 5]).unwrap();
    assert_eq!(q.answer_options.len(), 3);
    let attempt = start(&service, &assessment);

    service.record_response(answer(attempt, q.id, 3)).unwrap();
    let done = service.complete_assessment(attempt).unwrap();
    assert_eq!(done.apostolic_score, Some(3.0));
    assert_eq!(done.normalized_scores.unwrap().apostolic, 60.0);
    assert_eq!(done.primary_gift, Some(ApestDimension::Apostolic));
}
