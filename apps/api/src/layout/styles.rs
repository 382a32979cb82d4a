//! Section Style Builder — per-section style blocks derived only from resolved tokens.

use crate::compiler::ast::{ContainerStyle, SectionStyles, TextStyle, TitleStyle};
use crate::tokens::ResolvedTokens;

const TEXT_DECORATION_NONE: &str = "none";

pub fn build_section_styles(tokens: &ResolvedTokens) -> SectionStyles {
    let typography = &tokens.typography;
    let colors = &tokens.colors;

    SectionStyles {
        container: ContainerStyle {
            background_color: colors.background.clone(),
            background_image: colors.gradient.clone(),
            border_color: colors.border.clone(),
            border_radius_px: tokens.effects.border_radius_px,
            padding_px: tokens.spacing.content_padding_px,
            margin_bottom_px: tokens.spacing.section_gap_px,
            item_gap_px: tokens.spacing.item_gap_px,
            box_shadow: tokens.effects.box_shadow.clone(),
        },
        title: TitleStyle {
            text: TextStyle {
                font_family: typography.heading_font_family.clone(),
                font_size_px: typography.heading_font_size_px,
                line_height: typography.heading_line_height,
                font_weight: typography.heading_font_weight,
                color: colors.primary.clone(),
                text_decoration: TEXT_DECORATION_NONE.to_string(),
            },
            heading_text_transform: typography.heading_text_transform.clone(),
        },
        content: TextStyle {
            font_family: typography.body_font_family.clone(),
            font_size_px: typography.base_font_size_px,
            line_height: typography.body_line_height,
            font_weight: typography.body_font_weight,
            color: colors.text.clone(),
            text_decoration: TEXT_DECORATION_NONE.to_string(),
        },
    }
}
