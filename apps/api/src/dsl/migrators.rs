//! The schema migrators wired into the engine at startup.
//!
//! - `0.8.0 → 0.9.0`: section and item-override orders become a dense `0..n` sequence.
//! - `0.9.0 → 1.0.0`: legacy section ids are renamed to their current names.

use crate::dsl::migration::Migrator;
use crate::dsl::model::ResumeDsl;
use crate::dsl::reorder::{renumber, sort_for_display};

/// Section ids used by 0.9 documents and their 1.0 replacements.
const LEGACY_SECTION_IDS: &[(&str, &str)] = &[
    ("work", "experience"),
    ("recommendations", "references"),
    ("hobbies", "interests"),
    ("achievements", "awards"),
];

/// The ordered migrator set handed to `MigrationEngine::register_migrators`.
pub fn default_migrators() -> Vec<Migrator> {
    vec![
        Migrator::new("0.8.0", "0.9.0", densify_orders),
        Migrator::new("0.9.0", "1.0.0", rename_legacy_sections),
    ]
}

/// 0.8 editors wrote sparse or repeated `order` values. Renumber in display order.
fn densify_orders(dsl: ResumeDsl) -> ResumeDsl {
    let mut sections = sort_for_display(&dsl.sections);
    renumber(&mut sections);

    let item_overrides = dsl
        .item_overrides
        .iter()
        .map(|(section_id, overrides)| {
            let mut overrides = sort_for_display(overrides);
            renumber(&mut overrides);
            (section_id.clone(), overrides)
        })
        .collect();

    ResumeDsl {
        version: "0.9.0".to_string(),
        sections,
        item_overrides,
        ..dsl
    }
}

/// Renames legacy ids. A legacy section whose new id is already taken keeps its old id.
fn rename_legacy_sections(mut dsl: ResumeDsl) -> ResumeDsl {
    for &(legacy, current) in LEGACY_SECTION_IDS {
        if dsl.sections.iter().any(|s| s.id == current) {
            continue;
        }
        if let Some(section) = dsl.sections.iter_mut().find(|s| s.id == legacy) {
            section.id = current.to_string();
            if let Some(overrides) = dsl.item_overrides.remove(legacy) {
                dsl.item_overrides.insert(current.to_string(), overrides);
            }
        }
    }
    dsl.version = "1.0.0".to_string();
    dsl
}
