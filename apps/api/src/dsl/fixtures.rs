//! Shared DSL builders for unit tests.

use serde_json::{json, Value};

use crate::dsl::model::{
    DesignTokens, LayoutConfig, LayoutType, MarginSize, PageBreakBehavior, PaperSize, ResumeDsl,
    SectionColumn, SectionConfig, CURRENT_DSL_VERSION,
};

pub fn section(id: &str, order: i32, column: SectionColumn) -> SectionConfig {
    SectionConfig {
        id: id.to_string(),
        visible: true,
        order,
        column,
    }
}

pub fn layout(layout_type: LayoutType) -> LayoutConfig {
    LayoutConfig {
        layout_type,
        paper_size: PaperSize::A4,
        margins: MarginSize::Normal,
        column_distribution: None,
        page_break_behavior: PageBreakBehavior::Auto,
        show_page_numbers: None,
        page_number_position: None,
    }
}

pub fn dsl(layout_type: LayoutType, sections: Vec<SectionConfig>) -> ResumeDsl {
    ResumeDsl {
        version: CURRENT_DSL_VERSION.to_string(),
        layout: layout(layout_type),
        tokens: DesignTokens::default(),
        sections,
        item_overrides: Default::default(),
    }
}

/// Raw two-column document with default tokens and a single `skills` section.
pub fn raw_two_column() -> Value {
    json!({
        "version": "1.0.0",
        "layout": {"type": "two-column", "paperSize": "a4", "margins": "normal"},
        "tokens": {
            "typography": {"headingFont": "inter", "bodyFont": "inter", "fontSize": "base", "headingStyle": "bold"},
            "colors": {"palette": "professional", "borderRadius": "none", "shadows": "none"},
            "spacing": {"density": "comfortable", "sectionGap": "md", "itemGap": "sm", "contentPadding": "md"}
        },
        "sections": [{"id": "skills", "visible": true, "order": 0, "column": "main"}]
    })
}
