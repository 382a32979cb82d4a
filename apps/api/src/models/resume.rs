use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted resume. `dsl` is stored as an opaque JSON document.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub slug: Option<String>,
    pub is_public: bool,
    pub dsl: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExperienceRecord {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub description: Option<String>,
    pub achievements: Vec<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EducationRecord {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub description: Option<String>,
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectRecord {
    pub id: Uuid,
    pub name: String,
    pub role: Option<String>,
    pub url: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub description: Option<String>,
    pub highlights: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillRecord {
    pub id: Uuid,
    pub name: String,
    /// Self-rated 1–5. Values above 5 are treated as 5.
    pub level: Option<i32>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LanguageRecord {
    pub id: Uuid,
    pub name: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CertificationRecord {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    pub issue_date: NaiveDate,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AwardRecord {
    pub id: Uuid,
    pub title: String,
    pub issuer: String,
    pub date: NaiveDate,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterestRecord {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecommendationRecord {
    pub id: Uuid,
    pub author: String,
    pub author_role: String,
    pub company: Option<String>,
}

/// Every sub-entity of a resume that a section can be compiled from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeContent {
    pub experiences: Vec<ExperienceRecord>,
    pub education: Vec<EducationRecord>,
    pub skills: Vec<SkillRecord>,
    pub languages: Vec<LanguageRecord>,
    pub projects: Vec<ProjectRecord>,
    pub certifications: Vec<CertificationRecord>,
    pub awards: Vec<AwardRecord>,
    pub interests: Vec<InterestRecord>,
    pub recommendations: Vec<RecommendationRecord>,
}
