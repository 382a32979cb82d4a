//! Canonical item shapes produced by the section compilers.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub date_range: DateRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub achievements: Vec<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub id: String,
    pub institution: String,
    pub degree: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub date_range: DateRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub highlights: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkillRank {
    Beginner,
    Elementary,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillItem {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<SkillRank>,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageItem {
    pub id: String,
    pub name: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificationItem {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AwardItem {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterestItem {
    pub id: String,
    pub name: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceItem {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

/// Compiled section payload, tagged by section kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SectionContent {
    Summary { text: String },
    Objective { text: String },
    Experience { items: Vec<ExperienceItem> },
    Education { items: Vec<EducationItem> },
    Skills { items: Vec<SkillItem> },
    Languages { items: Vec<LanguageItem> },
    Projects { items: Vec<ProjectItem> },
    Certifications { items: Vec<CertificationItem> },
    Awards { items: Vec<AwardItem> },
    Interests { items: Vec<InterestItem> },
    References { items: Vec<ReferenceItem> },
    Custom { items: Vec<Value> },
}

impl SectionContent {
    /// Number of rendered items; text blocks count as one when non-empty.
    pub fn item_count(&self) -> usize {
        match self {
            SectionContent::Summary { text } | SectionContent::Objective { text } => {
                usize::from(!text.is_empty())
            }
            SectionContent::Experience { items } => items.len(),
            SectionContent::Education { items } => items.len(),
            SectionContent::Skills { items } => items.len(),
            SectionContent::Languages { items } => items.len(),
            SectionContent::Projects { items } => items.len(),
            SectionContent::Certifications { items } => items.len(),
            SectionContent::Awards { items } => items.len(),
            SectionContent::Interests { items } => items.len(),
            SectionContent::References { items } => items.len(),
            SectionContent::Custom { items } => items.len(),
        }
    }
}

/// Items addressable by an `ItemOverride`.
pub trait Identified {
    fn item_id(&self) -> &str;
}

macro_rules! identified {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Identified for $ty {
                fn item_id(&self) -> &str {
                    &self.id
                }
            }
        )+
    };
}

identified!(
    ExperienceItem,
    EducationItem,
    ProjectItem,
    SkillItem,
    LanguageItem,
    CertificationItem,
    AwardItem,
    InterestItem,
    ReferenceItem,
);
