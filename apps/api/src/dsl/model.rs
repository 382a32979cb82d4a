//! Typed form of the resume DSL document.
//!
//! A `ResumeDsl` only exists after the raw JSON document has passed
//! `dsl::validation`. Token selections stay as plain keys here; the token
//! resolver owns the mapping to concrete values.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Schema version every compile targets.
pub const CURRENT_DSL_VERSION: &str = "1.0.0";

/// Every schema tag the validator accepts. Older tags are upgraded by the migration engine.
pub const SUPPORTED_DSL_VERSIONS: &[&str] = &["0.8.0", "0.9.0", CURRENT_DSL_VERSION];

// ────────────────────────────────────────────────────────────────────────────
// Enumerated value sets
// ────────────────────────────────────────────────────────────────────────────

/// A closed set of wire strings. The validator checks raw documents against `ALL`.
pub trait DslEnum: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }

    fn allowed_values() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.as_str()).collect()
    }
}

macro_rules! dsl_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl DslEnum for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }
    };
}

dsl_enum!(
    /// Page layout archetype.
    LayoutType {
        SingleColumn => "single-column",
        TwoColumn => "two-column",
        SidebarLeft => "sidebar-left",
        SidebarRight => "sidebar-right",
        Magazine => "magazine",
        Compact => "compact",
    }
);

dsl_enum!(PaperSize {
    A4 => "a4",
    Letter => "letter",
    Legal => "legal",
});

dsl_enum!(MarginSize {
    Compact => "compact",
    Normal => "normal",
    Relaxed => "relaxed",
    Wide => "wide",
});

dsl_enum!(
    /// Main/sidebar width split, main column first.
    ColumnDistribution {
        FiftyFifty => "50-50",
        SixtyForty => "60-40",
        SixtyFiveThirtyFive => "65-35",
        SeventyThirty => "70-30",
    }
);

impl ColumnDistribution {
    /// Returns `(main, sidebar)` width percentages. Always sums to 100.
    pub fn split(self) -> (u32, u32) {
        match self {
            ColumnDistribution::FiftyFifty => (50, 50),
            ColumnDistribution::SixtyForty => (60, 40),
            ColumnDistribution::SixtyFiveThirtyFive => (65, 35),
            ColumnDistribution::SeventyThirty => (70, 30),
        }
    }
}

dsl_enum!(PageBreakBehavior {
    Auto => "auto",
    Avoid => "avoid",
    Always => "always",
});

impl Default for PageBreakBehavior {
    fn default() -> Self {
        PageBreakBehavior::Auto
    }
}

dsl_enum!(PageNumberPosition {
    BottomCenter => "bottom-center",
    BottomRight => "bottom-right",
    TopRight => "top-right",
});

dsl_enum!(
    /// Column a section asks to be placed in.
    SectionColumn {
        Main => "main",
        Sidebar => "sidebar",
        FullWidth => "full-width",
    }
);

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDsl {
    pub version: String,
    pub layout: LayoutConfig,
    pub tokens: DesignTokens,
    pub sections: Vec<SectionConfig>,
    /// Per-section item adjustments, keyed by section id.
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_overrides: BTreeMap<String, Vec<ItemOverride>>,
}

impl ResumeDsl {
    pub fn overrides_for(&self, section_id: &str) -> &[ItemOverride] {
        self.item_overrides
            .get(section_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    #[serde(rename = "type")]
    pub layout_type: LayoutType,
    pub paper_size: PaperSize,
    pub margins: MarginSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_distribution: Option<ColumnDistribution>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_break_behavior: PageBreakBehavior,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_page_numbers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number_position: Option<PageNumberPosition>,
}

/// Token selections. Every field is a key into one of the `tokens::tables` lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DesignTokens {
    pub typography: TypographyTokens,
    pub colors: ColorTokens,
    pub spacing: SpacingTokens,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyTokens {
    pub heading_font: String,
    pub body_font: String,
    pub font_size: String,
    pub heading_style: String,
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            heading_font: "inter".to_string(),
            body_font: "inter".to_string(),
            font_size: "base".to_string(),
            heading_style: "bold".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTokens {
    pub palette: String,
    pub border_radius: String,
    pub shadows: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradients: Option<String>,
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self {
            palette: "professional".to_string(),
            border_radius: "none".to_string(),
            shadows: "none".to_string(),
            gradients: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingTokens {
    pub density: String,
    pub section_gap: String,
    pub item_gap: String,
    pub content_padding: String,
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            density: "comfortable".to_string(),
            section_gap: "md".to_string(),
            item_gap: "sm".to_string(),
            content_padding: "md".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub id: String,
    pub visible: bool,
    pub order: i32,
    pub column: SectionColumn,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOverride {
    pub item_id: String,
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

/// An explicit `null` deserializes the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ────────────────────────────────────────────────────────────────────────────
// Section kinds
// ────────────────────────────────────────────────────────────────────────────

/// The section kind a section id compiles as. Unknown ids compile as `Custom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Summary,
    Objective,
    Experience,
    Education,
    Skills,
    Languages,
    Projects,
    Certifications,
    Awards,
    Interests,
    References,
    Custom,
}

impl SectionKind {
    pub fn from_id(id: &str) -> Self {
        match id {
            "summary" => SectionKind::Summary,
            "objective" => SectionKind::Objective,
            "experience" => SectionKind::Experience,
            "education" => SectionKind::Education,
            "skills" => SectionKind::Skills,
            "languages" => SectionKind::Languages,
            "projects" => SectionKind::Projects,
            "certifications" => SectionKind::Certifications,
            "awards" => SectionKind::Awards,
            "interests" => SectionKind::Interests,
            "references" => SectionKind::References,
            _ => SectionKind::Custom,
        }
    }

    /// Display heading for the section. Custom sections are titled by their id.
    pub fn title(self) -> Option<&'static str> {
        match self {
            SectionKind::Summary => Some("Summary"),
            SectionKind::Objective => Some("Objective"),
            SectionKind::Experience => Some("Experience"),
            SectionKind::Education => Some("Education"),
            SectionKind::Skills => Some("Skills"),
            SectionKind::Languages => Some("Languages"),
            SectionKind::Projects => Some("Projects"),
            SectionKind::Certifications => Some("Certifications"),
            SectionKind::Awards => Some("Awards"),
            SectionKind::Interests => Some("Interests"),
            SectionKind::References => Some("References"),
            SectionKind::Custom => None,
        }
    }
}
