//! Layout Builder — page geometry and column layout.

use crate::compiler::ast::{Column, ColumnId, Page, PageNumbers};
use crate::dsl::model::{
    ColumnDistribution, LayoutConfig, LayoutType, MarginSize, PageNumberPosition, PaperSize,
    ResumeDsl, SectionColumn,
};
use crate::tokens::ResolvedTokens;

const DEFAULT_DISTRIBUTION: ColumnDistribution = ColumnDistribution::SeventyThirty;
/// Magazine layouts always split 60/40, whatever distribution the document asks for.
const MAGAZINE_DISTRIBUTION: ColumnDistribution = ColumnDistribution::SixtyForty;

/// Returns `(width_mm, height_mm)`.
pub fn paper_dimensions(size: PaperSize) -> (f64, f64) {
    match size {
        PaperSize::A4 => (210.0, 297.0),
        PaperSize::Letter => (216.0, 279.0),
        PaperSize::Legal => (216.0, 356.0),
    }
}

/// Uniform margin applied to all four sides.
pub fn margin_mm(margins: MarginSize) -> f64 {
    match margins {
        MarginSize::Compact => 10.0,
        MarginSize::Normal => 15.0,
        MarginSize::Relaxed => 20.0,
        MarginSize::Wide => 25.0,
    }
}

pub fn build_page_layout(dsl: &ResumeDsl, tokens: &ResolvedTokens) -> Page {
    let layout = &dsl.layout;
    let (width_mm, height_mm) = paper_dimensions(layout.paper_size);
    let margin = margin_mm(layout.margins);

    let page_numbers = layout
        .show_page_numbers
        .unwrap_or(false)
        .then(|| PageNumbers {
            position: layout
                .page_number_position
                .unwrap_or(PageNumberPosition::BottomCenter),
        });

    Page {
        width_mm,
        height_mm,
        margin_top_mm: margin,
        margin_bottom_mm: margin,
        margin_left_mm: margin,
        margin_right_mm: margin,
        columns: build_columns(layout),
        column_gap_mm: tokens.spacing.section_gap_px / 4.0,
        page_break_behavior: layout.page_break_behavior,
        page_numbers,
    }
}

/// Column set for the layout type. Width percentages always sum to 100.
pub fn build_columns(layout: &LayoutConfig) -> Vec<Column> {
    let requested = layout.column_distribution.unwrap_or(DEFAULT_DISTRIBUTION);
    match layout.layout_type {
        LayoutType::SingleColumn | LayoutType::Compact => vec![Column {
            id: ColumnId::Main,
            width_percentage: 100,
            order: 0,
        }],
        LayoutType::TwoColumn | LayoutType::SidebarRight => main_and_sidebar(requested, false),
        LayoutType::SidebarLeft => main_and_sidebar(requested, true),
        LayoutType::Magazine => main_and_sidebar(MAGAZINE_DISTRIBUTION, false),
    }
}

fn main_and_sidebar(distribution: ColumnDistribution, sidebar_first: bool) -> Vec<Column> {
    let (main, sidebar) = distribution.split();
    let (main_order, sidebar_order) = if sidebar_first { (1, 0) } else { (0, 1) };
    let mut columns = vec![
        Column {
            id: ColumnId::Main,
            width_percentage: main,
            order: main_order,
        },
        Column {
            id: ColumnId::Sidebar,
            width_percentage: sidebar,
            order: sidebar_order,
        },
    ];
    columns.sort_by_key(|c| c.order);
    columns
}

/// Full-width sections flow in the main column.
pub fn map_column_to_id(column: SectionColumn) -> ColumnId {
    match column {
        SectionColumn::Sidebar => ColumnId::Sidebar,
        SectionColumn::Main | SectionColumn::FullWidth => ColumnId::Main,
    }
}
