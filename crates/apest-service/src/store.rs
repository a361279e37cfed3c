use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use apest_core::models::assessment::{AssessmentPatch, AssessmentRow, NewAssessmentRow};
use apest_core::models::question::{AssessmentQuestionRow, NewAssessmentQuestionRow};
use apest_core::models::response::{
    AssessmentResponsePatch, AssessmentResponseRow, NewAssessmentResponseRow,
};
use apest_core::models::user_assessment::{
    NewUserAssessmentRow, UserAssessmentPatch, UserAssessmentRow,
};
use jiff::Timestamp;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} already exists: {key}")]
    Duplicate { entity: &'static str, key: String },

    #[error("store lock poisoned")]
    Poisoned,
}

/// Row storage for the assessment tables.
///
/// Updates return `None` when the row does not exist. Lists come back in a
/// stable order: questions by `order_index`, responses by `created_at`.
pub trait AssessmentStore: Send + Sync {
    fn get_assessment(&self, id: Uuid) -> Result<Option<AssessmentRow>, StoreError>;

    fn insert_assessment(&self, row: NewAssessmentRow) -> Result<AssessmentRow, StoreError>;

    fn update_assessment(
        &self,
        id: Uuid,
        patch: AssessmentPatch,
    ) -> Result<Option<AssessmentRow>, StoreError>;

    fn list_questions(&self, assessment_id: Uuid)
    -> Result<Vec<AssessmentQuestionRow>, StoreError>;

    fn insert_question(
        &self,
        row: NewAssessmentQuestionRow,
    ) -> Result<AssessmentQuestionRow, StoreError>;

    fn get_user_assessment(&self, id: Uuid) -> Result<Option<UserAssessmentRow>, StoreError>;

    fn insert_user_assessment(
        &self,
        row: NewUserAssessmentRow,
    ) -> Result<UserAssessmentRow, StoreError>;

    fn update_user_assessment(
        &self,
        id: Uuid,
        patch: UserAssessmentPatch,
    ) -> Result<Option<UserAssessmentRow>, StoreError>;

    fn list_responses(
        &self,
        user_assessment_id: Uuid,
    ) -> Result<Vec<AssessmentResponseRow>, StoreError>;

    fn insert_response(
        &self,
        row: NewAssessmentResponseRow,
    ) -> Result<AssessmentResponseRow, StoreError>;

    fn update_response(
        &self,
        id: Uuid,
        patch: AssessmentResponsePatch,
    ) -> Result<Option<AssessmentResponseRow>, StoreError>;
}

#[derive(Debug, Default)]
struct Tables {
    assessments: HashMap<Uuid, AssessmentRow>,
    questions: HashMap<Uuid, AssessmentQuestionRow>,
    user_assessments: HashMap<Uuid, UserAssessmentRow>,
    responses: HashMap<Uuid, AssessmentResponseRow>,
}

/// A process-local store. Enforces the unique keys a database schema
/// would: assessment slug, and one response per question per attempt.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, StoreError> {
        self.tables.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Load complete rows as they were exported, ids and timestamps included.
    pub fn seed(
        &self,
        assessments: Vec<AssessmentRow>,
        questions: Vec<AssessmentQuestionRow>,
        user_assessments: Vec<UserAssessmentRow>,
        responses: Vec<AssessmentResponseRow>,
    ) -> Result<(), StoreError> {
        let mut tables = self.lock()?;
        tables
            .assessments
            .extend(assessments.into_iter().map(|r| (r.id, r)));
        tables
            .questions
            .extend(questions.into_iter().map(|r| (r.id, r)));
        tables
            .user_assessments
            .extend(user_assessments.into_iter().map(|r| (r.id, r)));
        tables
            .responses
            .extend(responses.into_iter().map(|r| (r.id, r)));
        Ok(())
    }
}

impl AssessmentStore for InMemoryStore {
    fn get_assessment(&self, id: Uuid) -> Result<Option<AssessmentRow>, StoreError> {
        Ok(self.lock()?.assessments.get(&id).cloned())
    }

    fn insert_assessment(&self, row: NewAssessmentRow) -> Result<AssessmentRow, StoreError> {
        let mut tables = self.lock()?;
        if tables.assessments.values().any(|a| a.slug == row.slug) {
            return Err(StoreError::Duplicate {
                entity: "assessment",
                key: row.slug,
            });
        }
        let row = row.into_row(Uuid::new_v4(), Timestamp::now());
        tables.assessments.insert(row.id, row.clone());
        Ok(row)
    }

    fn update_assessment(
        &self,
        id: Uuid,
        patch: AssessmentPatch,
    ) -> Result<Option<AssessmentRow>, StoreError> {
        let mut tables = self.lock()?;
        if let Some(slug) = &patch.slug
            && tables
                .assessments
                .values()
                .any(|a| a.id != id && &a.slug == slug)
        {
            return Err(StoreError::Duplicate {
                entity: "assessment",
                key: slug.clone(),
            });
        }
        Ok(tables.assessments.get_mut(&id).map(|row| {
            row.apply(patch);
            row.clone()
        }))
    }

    fn list_questions(
        &self,
        assessment_id: Uuid,
    ) -> Result<Vec<AssessmentQuestionRow>, StoreError> {
        let tables = self.lock()?;
        let mut questions: Vec<_> = tables
            .questions
            .values()
            .filter(|q| q.assessment_id == assessment_id)
            .cloned()
            .collect();
        questions.sort_by_key(|q| (q.order_index, q.created_at));
        Ok(questions)
    }

    fn insert_question(
        &self,
        row: NewAssessmentQuestionRow,
    ) -> Result<AssessmentQuestionRow, StoreError> {
        let mut tables = self.lock()?;
        let row = row.into_row(Uuid::new_v4(), Timestamp::now());
        tables.questions.insert(row.id, row.clone());
        Ok(row)
    }

    fn get_user_assessment(&self, id: Uuid) -> Result<Option<UserAssessmentRow>, StoreError> {
        Ok(self.lock()?.user_assessments.get(&id).cloned())
    }

    fn insert_user_assessment(
        &self,
        row: NewUserAssessmentRow,
    ) -> Result<UserAssessmentRow, StoreError> {
        let mut tables = self.lock()?;
        let row = row.into_row(Uuid::new_v4(), Timestamp::now());
        tables.user_assessments.insert(row.id, row.clone());
        Ok(row)
    }

    fn update_user_assessment(
        &self,
        id: Uuid,
        patch: UserAssessmentPatch,
    ) -> Result<Option<UserAssessmentRow>, StoreError> {
        let mut tables = self.lock()?;
        Ok(tables.user_assessments.get_mut(&id).map(|row| {
            row.apply(patch);
            row.clone()
        }))
    }

    fn list_responses(
        &self,
        user_assessment_id: Uuid,
    ) -> Result<Vec<AssessmentResponseRow>, StoreError> {
        let tables = self.lock()?;
        let mut responses: Vec<_> = tables
            .responses
            .values()
            .filter(|r| r.user_assessment_id == user_assessment_id)
            .cloned()
            .collect();
        responses.sort_by_key(|r| r.created_at);
        Ok(responses)
    }

    fn insert_response(
        &self,
        row: NewAssessmentResponseRow,
    ) -> Result<AssessmentResponseRow, StoreError> {
        let mut tables = self.lock()?;
        if tables.responses.values().any(|r| {
            r.user_assessment_id == row.user_assessment_id && r.question_id == row.question_id
        }) {
            return Err(StoreError::Duplicate {
                entity: "response",
                key: format!("{}/{}", row.user_assessment_id, row.question_id),
            });
        }
        let row = row.into_row(Uuid::new_v4(), Timestamp::now());
        tables.responses.insert(row.id, row.clone());
        Ok(row)
    }

    fn update_response(
        &self,
        id: Uuid,
        patch: AssessmentResponsePatch,
    ) -> Result<Option<AssessmentResponseRow>, StoreError> {
        let mut tables = self.lock()?;
        Ok(tables.responses.get_mut(&id).map(|row| {
            row.apply(patch);
            row.clone()
        }))
    }
}
