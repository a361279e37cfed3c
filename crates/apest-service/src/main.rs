use std::env;
use std::path::Path;

use apest_core::models::assessment::AssessmentRow;
use apest_core::models::question::AssessmentQuestionRow;
use apest_core::models::response::AssessmentResponseRow;
use apest_core::models::user_assessment::UserAssessmentRow;
use apest_service::config::{ServiceConfig, load_config};
use apest_service::store::InMemoryStore;
use apest_service::validation::DefaultSchemas;
use apest_service::{AssessmentService, telemetry};
use serde::Deserialize;

/// Exported rows for one attempt.
#[derive(Deserialize)]
struct Fixture {
    assessment: AssessmentRow,
    questions: Vec<AssessmentQuestionRow>,
    attempt: UserAssessmentRow,
    #[serde(default)]
    responses: Vec<AssessmentResponseRow>,
}

fn main() -> eyre::Result<()> {
    let config = match env::var("APEST_CONFIG") {
        Ok(path) => load_config(Path::new(&path))?,
        Err(_) => ServiceConfig::default(),
    };
    telemetry::init_tracing(config.log_format);

    let fixture_path = env::args()
        .nth(1)
        .ok_or_else(|| eyre::eyre!("usage: apest-score <fixture.json>"))?;
    let contents = std::fs::read_to_string(&fixture_path)
        .map_err(|e| eyre::eyre!("failed to read fixture at {fixture_path}: {e}"))?;
    let fixture: Fixture = serde_json::from_str(&contents)?;
    let attempt_id = fixture.attempt.id;

    let store = InMemoryStore::new();
    store.seed(
        vec![fixture.assessment],
        fixture.questions,
        vec![fixture.attempt],
        fixture.responses,
    )?;

    let service = AssessmentService::new(store, DefaultSchemas, &config)?;
    let scored = service.complete_assessment(attempt_id)?;
    println!("{}", serde_json::to_string_pretty(&scored)?);
    Ok(())
}
