//! DSL Validator — the gate every raw document passes before any compiler stage runs.
//!
//! `validate` never fails: problems are reported as a list of `ValidationIssue`s,
//! each carrying a JSON-pointer-like path. `validate_or_throw` converts a failed
//! report into `AppError::InvalidDsl`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::dsl::model::{
    ColumnDistribution, DslEnum, LayoutType, MarginSize, PageBreakBehavior, PageNumberPosition,
    PaperSize, ResumeDsl, SectionColumn, SUPPORTED_DSL_VERSIONS,
};
use crate::errors::AppError;
use crate::tokens::tables::{
    keys, BORDER_RADII, DENSITIES, FONT_FAMILIES, FONT_SIZES, GRADIENTS, HEADING_STYLES, PALETTES,
    SHADOWS, SPACING_SIZES,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationIssue>,
}

/// Checks a raw document against the versioned schema.
pub fn validate(raw: &Value) -> ValidationResult {
    let mut checker = Checker::default();
    checker.check_document(raw);
    ValidationResult {
        valid: checker.issues.is_empty(),
        errors: checker.issues,
    }
}

/// Validates and converts a raw document into a typed `ResumeDsl`.
pub fn validate_or_throw(raw: &Value) -> Result<ResumeDsl, AppError> {
    let result = validate(raw);
    if !result.valid {
        return Err(AppError::InvalidDsl(result.errors));
    }
    serde_json::from_value(raw.clone()).map_err(|e| {
        AppError::InvalidDsl(vec![ValidationIssue {
            path: "/".to_string(),
            message: e.to_string(),
        }])
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Checker
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Checker {
    issues: Vec<ValidationIssue>,
}

impl Checker {
    fn push(&mut self, path: &str, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            path: path.to_string(),
            message: message.into(),
        });
    }

    fn check_document(&mut self, raw: &Value) {
        let Some(root) = raw.as_object() else {
            self.push("/", "document must be a JSON object");
            return;
        };

        match root.get("version") {
            None => self.push("/version", "version is required"),
            Some(Value::String(v)) if SUPPORTED_DSL_VERSIONS.contains(&v.as_str()) => {}
            Some(Value::String(v)) => self.push(
                "/version",
                format!(
                    "unsupported schema version '{v}' (supported: {})",
                    SUPPORTED_DSL_VERSIONS.join(", ")
                ),
            ),
            Some(_) => self.push("/version", "version must be a string"),
        }

        if let Some(layout) = self.object(root, "layout", "/layout") {
            self.check_layout(layout);
        }
        if let Some(tokens) = self.object(root, "tokens", "/tokens") {
            self.check_tokens(tokens);
        }
        self.check_sections(root.get("sections"));
        self.check_item_overrides(root.get("itemOverrides"));
    }

    fn check_layout(&mut self, layout: &Map<String, Value>) {
        self.enum_field::<LayoutType>(layout, "type", "/layout/type", true);
        self.enum_field::<PaperSize>(layout, "paperSize", "/layout/paperSize", true);
        self.enum_field::<MarginSize>(layout, "margins", "/layout/margins", true);
        self.enum_field::<ColumnDistribution>(
            layout,
            "columnDistribution",
            "/layout/columnDistribution",
            false,
        );
        self.enum_field::<PageBreakBehavior>(
            layout,
            "pageBreakBehavior",
            "/layout/pageBreakBehavior",
            false,
        );
        self.enum_field::<PageNumberPosition>(
            layout,
            "pageNumberPosition",
            "/layout/pageNumberPosition",
            false,
        );
        match layout.get("showPageNumbers") {
            None | Some(Value::Null) | Some(Value::Bool(_)) => {}
            Some(_) => self.push("/layout/showPageNumbers", "must be a boolean"),
        }
    }

    fn check_tokens(&mut self, tokens: &Map<String, Value>) {
        if let Some(typography) = self.object(tokens, "typography", "/tokens/typography") {
            let fonts = keys(FONT_FAMILIES);
            self.token_field(typography, "headingFont", "/tokens/typography", &fonts, true);
            self.token_field(typography, "bodyFont", "/tokens/typography", &fonts, true);
            self.token_field(typography, "fontSize", "/tokens/typography", &keys(FONT_SIZES), true);
            self.token_field(
                typography,
                "headingStyle",
                "/tokens/typography",
                &keys(HEADING_STYLES),
                true,
            );
        }
        if let Some(colors) = self.object(tokens, "colors", "/tokens/colors") {
            self.token_field(colors, "palette", "/tokens/colors", &keys(PALETTES), true);
            self.token_field(colors, "borderRadius", "/tokens/colors", &keys(BORDER_RADII), true);
            self.token_field(colors, "shadows", "/tokens/colors", &keys(SHADOWS), true);
            self.token_field(colors, "gradients", "/tokens/colors", &keys(GRADIENTS), false);
        }
        if let Some(spacing) = self.object(tokens, "spacing", "/tokens/spacing") {
            let sizes = keys(SPACING_SIZES);
            self.token_field(spacing, "density", "/tokens/spacing", &keys(DENSITIES), true);
            self.token_field(spacing, "sectionGap", "/tokens/spacing", &sizes, true);
            self.token_field(spacing, "itemGap", "/tokens/spacing", &sizes, true);
            self.token_field(spacing, "contentPadding", "/tokens/spacing", &sizes, true);
        }
    }

    fn check_sections(&mut self, sections: Option<&Value>) {
        let sections = match sections {
            Some(Value::Array(items)) => items,
            Some(_) => return self.push("/sections", "sections must be an array"),
            None => return self.push("/sections", "sections is required"),
        };

        let mut seen = HashSet::new();
        for (i, section) in sections.iter().enumerate() {
            let path = format!("/sections/{i}");
            let Some(obj) = section.as_object() else {
                self.push(&path, "section must be an object");
                continue;
            };

            match obj.get("id").and_then(Value::as_str) {
                Some(id) if id.trim().is_empty() => {
                    self.push(&format!("{path}/id"), "id must not be empty")
                }
                Some(id) => {
                    if !seen.insert(id) {
                        self.push(&format!("{path}/id"), format!("duplicate section id '{id}'"));
                    }
                }
                None => self.push(&format!("{path}/id"), "id is required and must be a string"),
            }
            if !matches!(obj.get("visible"), Some(Value::Bool(_))) {
                self.push(&format!("{path}/visible"), "visible is required and must be a boolean");
            }
            if !is_i32(obj.get("order")) {
                self.push(&format!("{path}/order"), "order is required and must be an integer");
            }
            self.enum_field::<SectionColumn>(obj, "column", &format!("{path}/column"), true);
        }
    }

    fn check_item_overrides(&mut self, overrides: Option<&Value>) {
        let overrides = match overrides {
            None | Some(Value::Null) => return,
            Some(Value::Object(map)) => map,
            Some(_) => return self.push("/itemOverrides", "itemOverrides must be an object"),
        };

        for (section_id, entries) in overrides {
            let path = format!("/itemOverrides/{section_id}");
            let Some(entries) = entries.as_array() else {
                self.push(&path, "overrides must be an array");
                continue;
            };
            for (i, entry) in entries.iter().enumerate() {
                let entry_path = format!("{path}/{i}");
                let Some(obj) = entry.as_object() else {
                    self.push(&entry_path, "override must be an object");
                    continue;
                };
                if !matches!(obj.get("itemId"), Some(Value::String(_))) {
                    self.push(&format!("{entry_path}/itemId"), "itemId is required and must be a string");
                }
                if !matches!(obj.get("visible"), Some(Value::Bool(_))) {
                    self.push(&format!("{entry_path}/visible"), "visible is required and must be a boolean");
                }
                match obj.get("order") {
                    None | Some(Value::Null) => {}
                    order if is_i32(order) => {}
                    Some(_) => self.push(&format!("{entry_path}/order"), "order must be an integer"),
                }
            }
        }
    }

    // ── field helpers ──────────────────────────────────────────────────────

    fn object<'a>(
        &mut self,
        parent: &'a Map<String, Value>,
        key: &str,
        path: &str,
    ) -> Option<&'a Map<String, Value>> {
        match parent.get(key) {
            Some(Value::Object(map)) => Some(map),
            Some(_) => {
                self.push(path, format!("{key} must be an object"));
                None
            }
            None => {
                self.push(path, format!("{key} is required"));
                None
            }
        }
    }

    fn enum_field<T: DslEnum>(
        &mut self,
        obj: &Map<String, Value>,
        key: &str,
        path: &str,
        required: bool,
    ) {
        match obj.get(key) {
            None | Some(Value::Null) if !required => {}
            None | Some(Value::Null) => self.push(path, format!("{key} is required")),
            Some(Value::String(s)) if T::parse(s).is_some() => {}
            Some(other) => self.push(
                path,
                format!(
                    "invalid value {other} (expected one of: {})",
                    T::allowed_values().join(", ")
                ),
            ),
        }
    }

    fn token_field(
        &mut self,
        obj: &Map<String, Value>,
        key: &str,
        parent_path: &str,
        allowed: &[&str],
        required: bool,
    ) {
        let path = format!("{parent_path}/{key}");
        match obj.get(key) {
            None | Some(Value::Null) if !required => {}
            None | Some(Value::Null) => self.push(&path, format!("{key} is required")),
            Some(Value::String(s)) if allowed.contains(&s.as_str()) => {}
            Some(other) => self.push(
                &path,
                format!(
                    "unknown token {other} (expected one of: {})",
                    allowed.join(", ")
                ),
            ),
        }
    }
}

fn is_i32(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_i64)
        .map(|n| i32::try_from(n).is_ok())
        .unwrap_or(false)
}
