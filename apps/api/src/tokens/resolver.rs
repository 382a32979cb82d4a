//! Token Resolver — expands token selections into concrete style values.
//!
//! Total over its input: an unknown key falls back to the table's default entry
//! and is logged at debug level. Nothing downstream performs further lookups.

use serde::Serialize;
use tracing::debug;

use crate::dsl::model::DesignTokens;
use crate::tokens::tables::{
    lookup, GradientRecipe, Palette, BODY_FONT_WEIGHT, BODY_LINE_HEIGHT, BORDER_RADII,
    DEFAULT_BORDER_RADIUS, DEFAULT_DENSITY, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE,
    DEFAULT_HEADING_STYLE, DEFAULT_SHADOW, DEFAULT_SPACING_PX, DENSITIES, FONT_FAMILIES,
    FONT_SIZES, GRADIENTS, HEADING_LINE_HEIGHT, HEADING_STYLES, PALETTES, PROFESSIONAL_PALETTE,
    SHADOWS, SPACING_SIZES,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTokens {
    pub typography: ResolvedTypography,
    pub colors: ResolvedColors,
    pub spacing: ResolvedSpacing,
    pub effects: ResolvedEffects,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTypography {
    pub heading_font_family: String,
    pub body_font_family: String,
    pub base_font_size_px: f64,
    pub heading_font_size_px: f64,
    pub body_line_height: f64,
    pub heading_line_height: f64,
    pub body_font_weight: u16,
    pub heading_font_weight: u16,
    pub heading_text_transform: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub text: String,
    pub text_muted: String,
    pub background: String,
    pub surface: String,
    pub border: String,
    /// CSS gradient, present only when a non-`none` gradient is selected.
    pub gradient: Option<String>,
}

/// Spacing values in pixels, already scaled by the density factor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSpacing {
    pub density_factor: f64,
    pub section_gap_px: f64,
    pub item_gap_px: f64,
    pub content_padding_px: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEffects {
    pub border_radius_px: u32,
    pub box_shadow: String,
}

/// Resolves every token selection against the static tables.
pub fn resolve(tokens: &DesignTokens) -> ResolvedTokens {
    let typography = &tokens.typography;
    let font_size = resolve_key(FONT_SIZES, &typography.font_size, DEFAULT_FONT_SIZE, "fontSize");
    let heading_style = resolve_key(
        HEADING_STYLES,
        &typography.heading_style,
        DEFAULT_HEADING_STYLE,
        "headingStyle",
    );

    let colors = &tokens.colors;
    let palette = resolve_key(PALETTES, &colors.palette, PROFESSIONAL_PALETTE, "palette");
    let gradient = colors
        .gradients
        .as_deref()
        .map(|key| resolve_key(GRADIENTS, key, GradientRecipe::None, "gradients"))
        .and_then(|recipe| gradient_css(recipe, &palette));

    let spacing = &tokens.spacing;
    let density = resolve_key(DENSITIES, &spacing.density, DEFAULT_DENSITY, "density");
    let scaled = |key: &str, field: &str| {
        resolve_key(SPACING_SIZES, key, DEFAULT_SPACING_PX, field) * density
    };

    ResolvedTokens {
        typography: ResolvedTypography {
            heading_font_family: resolve_font(&typography.heading_font),
            body_font_family: resolve_font(&typography.body_font),
            base_font_size_px: font_size.base,
            heading_font_size_px: font_size.heading,
            body_line_height: BODY_LINE_HEIGHT,
            heading_line_height: HEADING_LINE_HEIGHT,
            body_font_weight: BODY_FONT_WEIGHT,
            heading_font_weight: heading_style.weight,
            heading_text_transform: heading_style.text_transform.to_string(),
        },
        colors: ResolvedColors {
            primary: palette.primary.to_string(),
            secondary: palette.secondary.to_string(),
            accent: palette.accent.to_string(),
            text: palette.text.to_string(),
            text_muted: palette.text_muted.to_string(),
            background: palette.background.to_string(),
            surface: palette.surface.to_string(),
            border: palette.border.to_string(),
            gradient,
        },
        spacing: ResolvedSpacing {
            density_factor: density,
            section_gap_px: scaled(&spacing.section_gap, "sectionGap"),
            item_gap_px: scaled(&spacing.item_gap, "itemGap"),
            content_padding_px: scaled(&spacing.content_padding, "contentPadding"),
        },
        effects: ResolvedEffects {
            border_radius_px: resolve_key(
                BORDER_RADII,
                &colors.border_radius,
                DEFAULT_BORDER_RADIUS,
                "borderRadius",
            ),
            box_shadow: resolve_key(SHADOWS, &colors.shadows, DEFAULT_SHADOW, "shadows")
                .to_string(),
        },
    }
}

fn resolve_font(key: &str) -> String {
    resolve_key(FONT_FAMILIES, key, DEFAULT_FONT_FAMILY, "font").to_string()
}

fn resolve_key<T: Copy>(table: &[(&'static str, T)], key: &str, default: T, field: &str) -> T {
    lookup(table, key).unwrap_or_else(|| {
        debug!("Unknown {field} token '{key}', using default");
        default
    })
}

fn gradient_css(recipe: GradientRecipe, palette: &Palette) -> Option<String> {
    match recipe {
        GradientRecipe::None => None,
        GradientRecipe::Subtle => Some(format!(
            "linear-gradient(180deg, {} 0%, {} 100%)",
            palette.surface, palette.background
        )),
        GradientRecipe::Vivid => Some(format!(
            "linear-gradient(135deg, {} 0%, {} 100%)",
            palette.primary, palette.secondary
        )),
    }
}
