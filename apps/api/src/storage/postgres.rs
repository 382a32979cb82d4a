use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::dsl::model::ResumeDsl;
use crate::errors::AppError;
use crate::models::resume::{
    AwardRecord, CertificationRecord, EducationRecord, ExperienceRecord, InterestRecord,
    LanguageRecord, ProjectRecord, RecommendationRecord, ResumeContent, ResumeRow, SkillRecord,
};
use crate::storage::{ResumeStore, StoredResume};

/// Postgres-backed resume storage.
///
/// Sub-entity tables carry a `resume_id` foreign key and a `position` column
/// giving the owner's stored ordering.
#[derive(Clone)]
pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_content(&self, resume_id: Uuid) -> Result<ResumeContent, AppError> {
        let pool = &self.pool;

        let experiences = sqlx::query_as::<_, ExperienceRecord>(
            r#"
            SELECT id, title, company, location, start_date, end_date, is_current,
                   description, achievements, skills
            FROM resume_experiences
            WHERE resume_id = $1
            ORDER BY position
            "#,
        )
        .bind(resume_id)
        .fetch_all(pool)
        .await?;

        let education = sqlx::query_as::<_, EducationRecord>(
            r#"
            SELECT id, institution, degree, field_of_study, location, start_date, end_date,
                   is_current, description, activities
            FROM resume_education
            WHERE resume_id = $1
            ORDER BY position
            "#,
        )
        .bind(resume_id)
        .fetch_all(pool)
        .await?;

        let skills = sqlx::query_as::<_, SkillRecord>(
            "SELECT id, name, level, category FROM resume_skills WHERE resume_id = $1 ORDER BY position",
        )
        .bind(resume_id)
        .fetch_all(pool)
        .await?;

        let languages = sqlx::query_as::<_, LanguageRecord>(
            "SELECT id, name, proficiency FROM resume_languages WHERE resume_id = $1 ORDER BY position",
        )
        .bind(resume_id)
        .fetch_all(pool)
        .await?;

        let projects = sqlx::query_as::<_, ProjectRecord>(
            r#"
            SELECT id, name, role, url, start_date, end_date, is_current,
                   description, highlights, technologies
            FROM resume_projects
            WHERE resume_id = $1
            ORDER BY position
            "#,
        )
        .bind(resume_id)
        .fetch_all(pool)
        .await?;

        let certifications = sqlx::query_as::<_, CertificationRecord>(
            "SELECT id, name, issuer, issue_date, url FROM resume_certifications WHERE resume_id = $1 ORDER BY position",
        )
        .bind(resume_id)
        .fetch_all(pool)
        .await?;

        let awards = sqlx::query_as::<_, AwardRecord>(
            "SELECT id, title, issuer, date, description FROM resume_awards WHERE resume_id = $1 ORDER BY position",
        )
        .bind(resume_id)
        .fetch_all(pool)
        .await?;

        let interests = sqlx::query_as::<_, InterestRecord>(
            "SELECT id, name, description FROM resume_interests WHERE resume_id = $1 ORDER BY position",
        )
        .bind(resume_id)
        .fetch_all(pool)
        .await?;

        let recommendations = sqlx::query_as::<_, RecommendationRecord>(
            "SELECT id, author, author_role, company FROM resume_recommendations WHERE resume_id = $1 ORDER BY position",
        )
        .bind(resume_id)
        .fetch_all(pool)
        .await?;

        Ok(ResumeContent {
            experiences,
            education,
            skills,
            languages,
            projects,
            certifications,
            awards,
            interests,
            recommendations,
        })
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn fetch_owned(&self, resume_id: Uuid, user_id: Uuid) -> Result<StoredResume, AppError> {
        let resume = sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
            .bind(resume_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

        if resume.user_id != user_id {
            return Err(AppError::Forbidden);
        }

        let content = self.load_content(resume.id).await?;
        Ok(StoredResume { resume, content })
    }

    async fn fetch_public(&self, slug: &str) -> Result<StoredResume, AppError> {
        let resume = sqlx::query_as::<_, ResumeRow>(
            "SELECT * FROM resumes WHERE slug = $1 AND is_public = TRUE",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Public resume '{slug}' not found")))?;

        let content = self.load_content(resume.id).await?;
        Ok(StoredResume { resume, content })
    }

    async fn save_dsl(&self, resume_id: Uuid, dsl: &ResumeDsl) -> Result<(), AppError> {
        let document = serde_json::to_value(dsl).map_err(|e| AppError::Internal(e.into()))?;
        sqlx::query("UPDATE resumes SET dsl = $1, updated_at = NOW() WHERE id = $2")
            .bind(document)
            .bind(resume_id)
            .execute(&self.pool)
            .await?;

        info!("Persisted DSL v{} for resume {resume_id}", dsl.version);
        Ok(())
    }
}
