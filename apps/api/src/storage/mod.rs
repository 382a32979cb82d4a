//! Storage collaborator. The only I/O the compiler pipeline performs.
//!
//! `ResumeStore` is carried in the compiler as `Arc<dyn ResumeStore>`.
//! Production uses `PgResumeStore`; tests use `InMemoryResumeStore`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::dsl::model::ResumeDsl;
use crate::errors::AppError;
use crate::models::resume::{ResumeContent, ResumeRow};

pub mod postgres;

#[cfg(test)]
pub mod memory;

pub use postgres::PgResumeStore;

/// A persisted resume with every sub-entity a section can compile from.
#[derive(Debug, Clone)]
pub struct StoredResume {
    pub resume: ResumeRow,
    pub content: ResumeContent,
}

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Loads a resume owned by `user_id`.
    ///
    /// `NotFound` when the resume does not exist, `Forbidden` when it belongs to someone else.
    async fn fetch_owned(&self, resume_id: Uuid, user_id: Uuid) -> Result<StoredResume, AppError>;

    /// Loads a public resume by slug. Private or missing resumes are `NotFound`.
    async fn fetch_public(&self, slug: &str) -> Result<StoredResume, AppError>;

    /// Replaces the stored DSL document of a resume.
    async fn save_dsl(&self, resume_id: Uuid, dsl: &ResumeDsl) -> Result<(), AppError>;
}
