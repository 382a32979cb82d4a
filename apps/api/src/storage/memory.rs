//! In-memory `ResumeStore` for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::dsl::model::ResumeDsl;
use crate::errors::AppError;
use crate::models::resume::{ResumeContent, ResumeRow};
use crate::storage::{ResumeStore, StoredResume};

#[derive(Default)]
pub struct InMemoryResumeStore {
    resumes: Mutex<HashMap<Uuid, StoredResume>>,
    saved: Mutex<Vec<(Uuid, ResumeDsl)>>,
}

impl InMemoryResumeStore {
    /// Inserts a resume and returns its id.
    pub fn insert(
        &self,
        user_id: Uuid,
        slug: Option<&str>,
        is_public: bool,
        dsl: Value,
        content: ResumeContent,
    ) -> Uuid {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let resume = ResumeRow {
            id,
            user_id,
            title: "Test resume".to_string(),
            slug: slug.map(String::from),
            is_public,
            dsl,
            created_at: now,
            updated_at: now,
        };
        self.resumes
            .lock()
            .unwrap()
            .insert(id, StoredResume { resume, content });
        id
    }

    pub fn saved(&self) -> Vec<(Uuid, ResumeDsl)> {
        self.saved.lock().unwrap().clone()
    }

    pub fn stored_dsl(&self, id: Uuid) -> Option<Value> {
        self.resumes
            .lock()
            .unwrap()
            .get(&id)
            .map(|s| s.resume.dsl.clone())
    }
}

#[async_trait]
impl ResumeStore for InMemoryResumeStore {
    async fn fetch_owned(&self, resume_id: Uuid, user_id: Uuid) -> Result<StoredResume, AppError> {
        let stored = self
            .resumes
            .lock()
            .unwrap()
            .get(&resume_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;
        if stored.resume.user_id != user_id {
            return Err(AppError::Forbidden);
        }
        Ok(stored)
    }

    async fn fetch_public(&self, slug: &str) -> Result<StoredResume, AppError> {
        self.resumes
            .lock()
            .unwrap()
            .values()
            .find(|s| s.resume.slug.as_deref() == Some(slug) && s.resume.is_public)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Public resume '{slug}' not found")))
    }

    async fn save_dsl(&self, resume_id: Uuid, dsl: &ResumeDsl) -> Result<(), AppError> {
        let document = serde_json::to_value(dsl).unwrap();
        if let Some(stored) = self.resumes.lock().unwrap().get_mut(&resume_id) {
            stored.resume.dsl = document;
        }
        self.saved.lock().unwrap().push((resume_id, dsl.clone()));
        Ok(())
    }
}
