//! Static design-token tables.
//!
//! Each table maps a token key (as written in a DSL document) to its concrete value.
//! Every table has a documented default entry that unknown keys resolve to.

// ────────────────────────────────────────────────────────────────────────────
// Typography
// ────────────────────────────────────────────────────────────────────────────

pub const FONT_FAMILIES: &[(&str, &str)] = &[
    ("inter", "Inter, system-ui, sans-serif"),
    ("roboto", "Roboto, 'Helvetica Neue', Arial, sans-serif"),
    ("open-sans", "'Open Sans', 'Helvetica Neue', Arial, sans-serif"),
    ("lato", "Lato, 'Helvetica Neue', Arial, sans-serif"),
    ("montserrat", "Montserrat, 'Helvetica Neue', Arial, sans-serif"),
    ("merriweather", "Merriweather, Georgia, serif"),
    ("playfair-display", "'Playfair Display', Georgia, serif"),
    ("source-code-pro", "'Source Code Pro', Menlo, Consolas, monospace"),
];
pub const DEFAULT_FONT_FAMILY: &str = "Inter, system-ui, sans-serif";

/// Body and heading pixel sizes for one font-size selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizeScale {
    pub base: f64,
    pub heading: f64,
}

pub const FONT_SIZES: &[(&str, FontSizeScale)] = &[
    ("sm", FontSizeScale { base: 13.0, heading: 18.0 }),
    ("base", FontSizeScale { base: 14.0, heading: 20.0 }),
    ("lg", FontSizeScale { base: 16.0, heading: 24.0 }),
];
pub const DEFAULT_FONT_SIZE: FontSizeScale = FontSizeScale {
    base: 14.0,
    heading: 20.0,
};

pub const BODY_LINE_HEIGHT: f64 = 1.5;
pub const HEADING_LINE_HEIGHT: f64 = 1.25;
pub const BODY_FONT_WEIGHT: u16 = 400;

/// Weight and case treatment applied to section titles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingStyle {
    pub weight: u16,
    pub text_transform: &'static str,
}

pub const HEADING_STYLES: &[(&str, HeadingStyle)] = &[
    ("bold", HeadingStyle { weight: 700, text_transform: "none" }),
    ("uppercase", HeadingStyle { weight: 600, text_transform: "uppercase" }),
    ("capitalize", HeadingStyle { weight: 600, text_transform: "capitalize" }),
    ("regular", HeadingStyle { weight: 400, text_transform: "none" }),
];
pub const DEFAULT_HEADING_STYLE: HeadingStyle = HeadingStyle {
    weight: 700,
    text_transform: "none",
};

// ────────────────────────────────────────────────────────────────────────────
// Colors & effects
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub border: &'static str,
}

pub const PROFESSIONAL_PALETTE: Palette = Palette {
    primary: "#1e3a5f",
    secondary: "#4a6fa5",
    accent: "#2b7a78",
    text: "#1f2937",
    text_muted: "#6b7280",
    background: "#ffffff",
    surface: "#f8fafc",
    border: "#e5e7eb",
};

pub const PALETTES: &[(&str, Palette)] = &[
    ("professional", PROFESSIONAL_PALETTE),
    (
        "modern",
        Palette {
            primary: "#4f46e5",
            secondary: "#818cf8",
            accent: "#06b6d4",
            text: "#111827",
            text_muted: "#6b7280",
            background: "#ffffff",
            surface: "#eef2ff",
            border: "#e0e7ff",
        },
    ),
    (
        "minimal",
        Palette {
            primary: "#111111",
            secondary: "#444444",
            accent: "#888888",
            text: "#222222",
            text_muted: "#777777",
            background: "#ffffff",
            surface: "#ffffff",
            border: "#dddddd",
        },
    ),
    (
        "creative",
        Palette {
            primary: "#d9480f",
            secondary: "#f59f00",
            accent: "#862e9c",
            text: "#212529",
            text_muted: "#868e96",
            background: "#fffaf5",
            surface: "#fff4e6",
            border: "#ffd8a8",
        },
    ),
    (
        "elegant",
        Palette {
            primary: "#3d2c2e",
            secondary: "#8c6a5d",
            accent: "#b08968",
            text: "#2b2d42",
            text_muted: "#8d99ae",
            background: "#fdfcfb",
            surface: "#f5f0eb",
            border: "#e6ddd4",
        },
    ),
    (
        "forest",
        Palette {
            primary: "#2d6a4f",
            secondary: "#52b788",
            accent: "#95d5b2",
            text: "#1b262c",
            text_muted: "#5c6b73",
            background: "#ffffff",
            surface: "#f1faee",
            border: "#d8f3dc",
        },
    ),
];

pub const BORDER_RADII: &[(&str, u32)] = &[
    ("none", 0),
    ("sm", 4),
    ("md", 8),
    ("lg", 12),
    ("full", 9999),
];
pub const DEFAULT_BORDER_RADIUS: u32 = 0;

pub const SHADOWS: &[(&str, &str)] = &[
    ("none", "none"),
    ("sm", "0 1px 2px rgba(0, 0, 0, 0.05)"),
    ("md", "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1)"),
    ("lg", "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1)"),
];
pub const DEFAULT_SHADOW: &str = "none";

/// Gradient recipes. Colors are filled in from the resolved palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientRecipe {
    None,
    /// Surface fading into background, top to bottom.
    Subtle,
    /// Primary into secondary, diagonal.
    Vivid,
}

pub const GRADIENTS: &[(&str, GradientRecipe)] = &[
    ("none", GradientRecipe::None),
    ("subtle", GradientRecipe::Subtle),
    ("vivid", GradientRecipe::Vivid),
];

// ────────────────────────────────────────────────────────────────────────────
// Spacing
// ────────────────────────────────────────────────────────────────────────────

pub const SPACING_SIZES: &[(&str, f64)] = &[("sm", 12.0), ("md", 16.0), ("lg", 24.0), ("xl", 32.0)];
pub const DEFAULT_SPACING_PX: f64 = 16.0;

pub const DENSITIES: &[(&str, f64)] = &[("compact", 0.75), ("comfortable", 1.0), ("spacious", 1.25)];
pub const DEFAULT_DENSITY: f64 = 1.0;

// ────────────────────────────────────────────────────────────────────────────
// Lookup helpers
// ────────────────────────────────────────────────────────────────────────────

/// Looks up `key` in a token table.
pub fn lookup<T: Copy>(table: &[(&'static str, T)], key: &str) -> Option<T> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Returns the keys of a token table, in table order.
pub fn keys<T>(table: &[(&'static str, T)]) -> Vec<&'static str> {
    table.iter().map(|(k, _)| *k).collect()
}
