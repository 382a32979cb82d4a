//! Section compilers — one pure mapping per section kind.
//!
//! Each compiler turns stored records into canonical items, then applies the
//! section's item overrides. Kinds with no record source (summary, objective,
//! custom ids) compile to a typed empty shape.

use chrono::NaiveDate;

use crate::dsl::model::{ItemOverride, SectionKind};
use crate::models::resume::{
    AwardRecord, CertificationRecord, EducationRecord, ExperienceRecord, InterestRecord,
    LanguageRecord, ProjectRecord, RecommendationRecord, ResumeContent, SkillRecord,
};
use crate::sections::items::{
    AwardItem, CertificationItem, DateRange, EducationItem, ExperienceItem, InterestItem,
    LanguageItem, Location, ProjectItem, ReferenceItem, SectionContent, SkillItem, SkillRank,
};
use crate::sections::overrides::apply_overrides;

const DEFAULT_SKILL_CATEGORY: &str = "General";

/// Compiles one section of the given kind from the resume's records.
pub fn compile_section(
    kind: SectionKind,
    content: &ResumeContent,
    overrides: &[ItemOverride],
) -> SectionContent {
    match kind {
        SectionKind::Experience => SectionContent::Experience {
            items: apply_overrides(content.experiences.iter().map(experience_item).collect(), overrides),
        },
        SectionKind::Education => SectionContent::Education {
            items: apply_overrides(content.education.iter().map(education_item).collect(), overrides),
        },
        SectionKind::Projects => SectionContent::Projects {
            items: apply_overrides(content.projects.iter().map(project_item).collect(), overrides),
        },
        SectionKind::Skills => SectionContent::Skills {
            items: apply_overrides(content.skills.iter().map(skill_item).collect(), overrides),
        },
        SectionKind::Languages => SectionContent::Languages {
            items: apply_overrides(content.languages.iter().map(language_item).collect(), overrides),
        },
        SectionKind::Certifications => SectionContent::Certifications {
            items: apply_overrides(
                content.certifications.iter().map(certification_item).collect(),
                overrides,
            ),
        },
        SectionKind::Awards => SectionContent::Awards {
            items: apply_overrides(content.awards.iter().map(award_item).collect(), overrides),
        },
        SectionKind::Interests => SectionContent::Interests {
            items: apply_overrides(content.interests.iter().map(interest_item).collect(), overrides),
        },
        SectionKind::References => SectionContent::References {
            items: apply_overrides(
                content.recommendations.iter().map(reference_item).collect(),
                overrides,
            ),
        },
        SectionKind::Summary | SectionKind::Objective | SectionKind::Custom => placeholder(kind),
    }
}

/// The empty shape a section of `kind` renders as when it has no data.
pub fn placeholder(kind: SectionKind) -> SectionContent {
    match kind {
        SectionKind::Summary => SectionContent::Summary {
            text: String::new(),
        },
        SectionKind::Objective => SectionContent::Objective {
            text: String::new(),
        },
        SectionKind::Experience => SectionContent::Experience { items: vec![] },
        SectionKind::Education => SectionContent::Education { items: vec![] },
        SectionKind::Skills => SectionContent::Skills { items: vec![] },
        SectionKind::Languages => SectionContent::Languages { items: vec![] },
        SectionKind::Projects => SectionContent::Projects { items: vec![] },
        SectionKind::Certifications => SectionContent::Certifications { items: vec![] },
        SectionKind::Awards => SectionContent::Awards { items: vec![] },
        SectionKind::Interests => SectionContent::Interests { items: vec![] },
        SectionKind::References => SectionContent::References { items: vec![] },
        SectionKind::Custom => SectionContent::Custom { items: vec![] },
    }
}

/// Buckets a numeric self-rating into a display rank. `None` renders no rank.
pub fn skill_rank(level: Option<i32>) -> Option<SkillRank> {
    let level = level?;
    Some(match level {
        l if l >= 5 => SkillRank::Expert,
        4 => SkillRank::Advanced,
        3 => SkillRank::Intermediate,
        2 => SkillRank::Elementary,
        _ => SkillRank::Beginner,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Record → item mappings
// ────────────────────────────────────────────────────────────────────────────

fn date_range(start: NaiveDate, end: Option<NaiveDate>, is_current: bool) -> DateRange {
    DateRange {
        start_date: start,
        end_date: if is_current { None } else { end },
        is_current,
    }
}

fn location(city: &Option<String>) -> Option<Location> {
    non_blank(city).map(|city| Location { city })
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn experience_item(r: &ExperienceRecord) -> ExperienceItem {
    ExperienceItem {
        id: r.id.to_string(),
        title: r.title.clone(),
        company: r.company.clone(),
        location: location(&r.location),
        date_range: date_range(r.start_date, r.end_date, r.is_current),
        description: non_blank(&r.description),
        achievements: r.achievements.clone(),
        skills: r.skills.clone(),
    }
}

fn education_item(r: &EducationRecord) -> EducationItem {
    EducationItem {
        id: r.id.to_string(),
        institution: r.institution.clone(),
        degree: r.degree.clone(),
        field_of_study: non_blank(&r.field_of_study),
        location: location(&r.location),
        date_range: date_range(r.start_date, r.end_date, r.is_current),
        description: non_blank(&r.description),
        activities: r.activities.clone(),
    }
}

fn project_item(r: &ProjectRecord) -> ProjectItem {
    ProjectItem {
        id: r.id.to_string(),
        title: r.name.clone(),
        role: non_blank(&r.role),
        url: non_blank(&r.url),
        date_range: r
            .start_date
            .map(|start| date_range(start, r.end_date, r.is_current)),
        description: non_blank(&r.description),
        highlights: r.highlights.clone(),
        technologies: r.technologies.clone(),
    }
}

fn skill_item(r: &SkillRecord) -> SkillItem {
    SkillItem {
        id: r.id.to_string(),
        name: r.name.clone(),
        level: skill_rank(r.level),
        category: non_blank(&r.category).unwrap_or_else(|| DEFAULT_SKILL_CATEGORY.to_string()),
    }
}

fn language_item(r: &LanguageRecord) -> LanguageItem {
    LanguageItem {
        id: r.id.to_string(),
        name: r.name.clone(),
        proficiency: r.proficiency.clone(),
    }
}

fn certification_item(r: &CertificationRecord) -> CertificationItem {
    CertificationItem {
        id: r.id.to_string(),
        name: r.name.clone(),
        issuer: r.issuer.clone(),
        date: r.issue_date,
        url: non_blank(&r.url),
    }
}

fn award_item(r: &AwardRecord) -> AwardItem {
    AwardItem {
        id: r.id.to_string(),
        title: r.title.clone(),
        issuer: r.issuer.clone(),
        date: r.date,
        description: non_blank(&r.description),
    }
}

fn interest_item(r: &InterestRecord) -> InterestItem {
    InterestItem {
        id: r.id.to_string(),
        name: r.name.clone(),
        keywords: non_blank(&r.description).into_iter().collect(),
    }
}

fn reference_item(r: &RecommendationRecord) -> ReferenceItem {
    ReferenceItem {
        id: r.id.to_string(),
        name: r.author.clone(),
        role: r.author_role.clone(),
        company: non_blank(&r.company),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn experience(title: &str, is_current: bool) -> ExperienceRecord {
        ExperienceRecord {
            id: Uuid::new_v4(),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: Some("Berlin".to_string()),
            start_date: date(2020, 1, 1),
            end_date: Some(date(2022, 6, 30)),
            is_current,
            description: Some("  ".to_string()),
            achievements: vec!["Cut p99 latency by 40%".to_string()],
            skills: vec!["Rust".to_string()],
        }
    }

    fn skill(name: &str, level: Option<i32>) -> SkillRecord {
        SkillRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            level,
            category: None,
        }
    }

    #[test]
    fn test_skill_rank_buckets() {
        assert_eq!(skill_rank(Some(5)), Some(SkillRank::Expert));
        assert_eq!(skill_rank(Some(7)), Some(SkillRank::Expert));
        assert_eq!(skill_rank(Some(4)), Some(SkillRank::Advanced));
        assert_eq!(skill_rank(Some(3)), Some(SkillRank::Intermediate));
        assert_eq!(skill_rank(Some(2)), Some(SkillRank::Elementary));
        assert_eq!(skill_rank(Some(1)), Some(SkillRank::Beginner));
        assert_eq!(skill_rank(Some(0)), Some(SkillRank::Beginner));
        assert_eq!(skill_rank(None), None);
    }

    #[test]
    fn test_null_skill_level_omits_field() {
        let content = ResumeContent {
            skills: vec![skill("Rust", Some(5)), skill("Go", None)],
            ..Default::default()
        };
        let compiled = compile_section(SectionKind::Skills, &content, &[]);
        let value = serde_json::to_value(&compiled).unwrap();
        assert_eq!(value["type"], "skills");
        assert_eq!(value["items"][0]["level"], "Expert");
        assert_eq!(value["items"][0]["category"], "General");
        assert!(value["items"][1].get("level").is_none());
    }

    #[test]
    fn test_experience_mapping() {
        let record = experience("Engineer", false);
        let item = experience_item(&record);
        assert_eq!(item.id, record.id.to_string());
        assert_eq!(item.location, Some(Location { city: "Berlin".to_string() }));
        assert_eq!(item.date_range.end_date, Some(date(2022, 6, 30)));
        assert_eq!(item.description, None);

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["dateRange"]["startDate"], "2020-01-01");
        assert_eq!(value["dateRange"]["isCurrent"], false);
    }

    #[test]
    fn test_current_role_has_no_end_date() {
        let item = experience_item(&experience("Lead", true));
        assert!(item.date_range.is_current);
        assert_eq!(item.date_range.end_date, None);
    }

    #[test]
    fn test_experience_overrides_applied() {
        let first = experience("First", false);
        let second = experience("Second", false);
        let third = experience("Third", false);
        let overrides = vec![
            ItemOverride { item_id: first.id.to_string(), visible: false, order: None },
            ItemOverride { item_id: third.id.to_string(), visible: true, order: Some(0) },
        ];
        let content = ResumeContent {
            experiences: vec![first, second, third],
            ..Default::default()
        };
        match compile_section(SectionKind::Experience, &content, &overrides) {
            SectionContent::Experience { items } => {
                let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
                assert_eq!(titles, vec!["Third", "Second"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_interest_description_becomes_keyword() {
        let with = InterestRecord {
            id: Uuid::new_v4(),
            name: "Climbing".to_string(),
            description: Some("bouldering".to_string()),
        };
        let without = InterestRecord {
            description: None,
            ..with.clone()
        };
        assert_eq!(interest_item(&with).keywords, vec!["bouldering"]);
        assert!(interest_item(&without).keywords.is_empty());
    }

    #[test]
    fn test_reference_takes_author_name() {
        let item = reference_item(&RecommendationRecord {
            id: Uuid::new_v4(),
            author: "Grace Hopper".to_string(),
            author_role: "Rear Admiral".to_string(),
            company: None,
        });
        assert_eq!(item.name, "Grace Hopper");
        assert_eq!(item.role, "Rear Admiral");
    }

    #[test]
    fn test_project_without_start_has_no_date_range() {
        let item = project_item(&ProjectRecord {
            id: Uuid::new_v4(),
            name: "ripgrep-lite".to_string(),
            role: None,
            url: Some("https://example.com".to_string()),
            start_date: None,
            end_date: None,
            is_current: false,
            description: None,
            highlights: vec![],
            technologies: vec!["Rust".to_string()],
        });
        assert_eq!(item.title, "ripgrep-lite");
        assert!(item.date_range.is_none());
    }

    #[test]
    fn test_placeholders() {
        let content = ResumeContent::default();
        assert_eq!(
            serde_json::to_value(compile_section(SectionKind::Summary, &content, &[])).unwrap(),
            json!({"type": "summary", "text": ""})
        );
        assert_eq!(
            serde_json::to_value(compile_section(SectionKind::Custom, &content, &[])).unwrap(),
            json!({"type": "custom", "items": []})
        );
        assert_eq!(
            compile_section(SectionKind::Awards, &content, &[]),
            placeholder(SectionKind::Awards)
        );
    }
}
