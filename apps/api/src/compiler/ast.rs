//! The renderer-facing AST. Serialized as camelCase JSON.

use serde::{Deserialize, Serialize};

use crate::dsl::model::{PageBreakBehavior, PageNumberPosition};
use crate::sections::items::SectionContent;

/// Output target requested by the caller. The AST itself is target-agnostic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderTarget {
    #[default]
    Html,
    Pdf,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAst {
    pub meta: AstMeta,
    pub page: Page,
    pub sections: Vec<AstSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AstMeta {
    /// Schema version of the document the AST was compiled from.
    pub dsl_version: String,
    pub target: RenderTarget,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub width_mm: f64,
    pub height_mm: f64,
    pub margin_top_mm: f64,
    pub margin_bottom_mm: f64,
    pub margin_left_mm: f64,
    pub margin_right_mm: f64,
    pub columns: Vec<Column>,
    pub column_gap_mm: f64,
    pub page_break_behavior: PageBreakBehavior,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_numbers: Option<PageNumbers>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnId {
    Main,
    Sidebar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub width_percentage: u32,
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageNumbers {
    pub position: PageNumberPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AstSection {
    pub id: String,
    pub title: String,
    pub column: ColumnId,
    pub order: i32,
    pub style: SectionStyles,
    #[serde(flatten)]
    pub content: SectionContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStyles {
    pub container: ContainerStyle,
    pub title: TitleStyle,
    pub content: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerStyle {
    pub background_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    pub border_color: String,
    pub border_radius_px: u32,
    pub padding_px: f64,
    pub margin_bottom_px: f64,
    pub item_gap_px: f64,
    pub box_shadow: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: String,
    pub font_size_px: f64,
    pub line_height: f64,
    pub font_weight: u16,
    pub color: String,
    pub text_decoration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleStyle {
    #[serde(flatten)]
    pub text: TextStyle,
    pub heading_text_transform: String,
}
