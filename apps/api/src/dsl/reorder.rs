//! Position-based reordering of sections and item overrides.
//!
//! Moves operate on the list as currently displayed: the item at position `from`
//! is spliced out and reinserted at `to`, then every `order` is renumbered from
//! its new position. Existing `order` values are never consulted after the splice.

use crate::dsl::model::{ItemOverride, ResumeDsl, SectionConfig};

pub trait Ordered {
    fn order(&self) -> Option<i32>;
    fn set_order(&mut self, order: i32);
}

impl Ordered for SectionConfig {
    fn order(&self) -> Option<i32> {
        Some(self.order)
    }

    fn set_order(&mut self, order: i32) {
        self.order = order;
    }
}

impl Ordered for ItemOverride {
    fn order(&self) -> Option<i32> {
        self.order
    }

    fn set_order(&mut self, order: i32) {
        self.order = Some(order);
    }
}

/// Moves `items[from]` to position `to` and renumbers `order` as `0..n`.
///
/// Returns `None` when either position is out of range.
pub fn move_item<T: Ordered + Clone>(items: &[T], from: usize, to: usize) -> Option<Vec<T>> {
    if from >= items.len() || to >= items.len() {
        return None;
    }
    let mut moved = items.to_vec();
    let item = moved.remove(from);
    moved.insert(to, item);
    renumber(&mut moved);
    Some(moved)
}

/// Assigns `order = position` to every item.
pub fn renumber<T: Ordered>(items: &mut [T]) {
    for (position, item) in items.iter_mut().enumerate() {
        item.set_order(position as i32);
    }
}

/// Display order: by `order`, with ties and missing orders falling back to array position.
pub fn sort_for_display<T: Ordered + Clone>(items: &[T]) -> Vec<T> {
    let mut keyed: Vec<(i32, &T)> = items
        .iter()
        .enumerate()
        .map(|(i, item)| (item.order().unwrap_or(i as i32), item))
        .collect();
    // stable: equal keys keep array order
    keyed.sort_by_key(|(key, _)| *key);
    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Returns a copy of `dsl` with the displayed section at `from` moved to `to`.
pub fn move_section(dsl: &ResumeDsl, from: usize, to: usize) -> Option<ResumeDsl> {
    let displayed = sort_for_display(&dsl.sections);
    let sections = move_item(&displayed, from, to)?;
    Some(ResumeDsl {
        sections,
        ..dsl.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::model::SectionColumn;

    fn section(id: &str, order: i32) -> SectionConfig {
        SectionConfig {
            id: id.to_string(),
            visible: true,
            order,
            column: SectionColumn::Main,
        }
    }

    fn ids(sections: &[SectionConfig]) -> Vec<&str> {
        sections.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_move_forward_renumbers() {
        let items = vec![section("a", 0), section("b", 1), section("c", 2)];
        let moved = move_item(&items, 0, 2).unwrap();
        assert_eq!(ids(&moved), vec!["b", "c", "a"]);
        assert_eq!(moved.iter().map(|s| s.order).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_move_sticks_when_orders_are_stale() {
        // orders disagree with positions; the move must still land where asked
        let items = vec![section("a", 5), section("b", 1), section("c", 9)];
        let moved = move_item(&items, 2, 0).unwrap();
        assert_eq!(ids(&moved), vec!["c", "a", "b"]);
        assert_eq!(moved[0].order, 0);
    }

    #[test]
    fn test_move_out_of_range() {
        let items = vec![section("a", 0)];
        assert!(move_item(&items, 0, 1).is_none());
        assert!(move_item(&items, 3, 0).is_none());
    }

    #[test]
    fn test_sort_for_display_is_stable() {
        let items = vec![section("a", 2), section("b", 0), section("c", 2), section("d", 1)];
        assert_eq!(ids(&sort_for_display(&items)), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_override_without_order_uses_position() {
        let overrides = vec![
            ItemOverride { item_id: "x".to_string(), visible: true, order: None },
            ItemOverride { item_id: "y".to_string(), visible: true, order: Some(0) },
        ];
        let mut overrides = sort_for_display(&overrides);
        // x keeps key 0 from its position and stays first on the tie
        assert_eq!(overrides[0].item_id, "x");
        renumber(&mut overrides);
        assert_eq!(overrides[1].order, Some(1));
    }

    #[test]
    fn test_move_section_uses_display_order() {
        use crate::dsl::fixtures;
        use crate::dsl::model::LayoutType;

        let doc = fixtures::dsl(
            LayoutType::SingleColumn,
            vec![
                fixtures::section("skills", 2, SectionColumn::Main),
                fixtures::section("experience", 0, SectionColumn::Main),
                fixtures::section("education", 1, SectionColumn::Main),
            ],
        );
        // displayed: experience, education, skills
        let moved = move_section(&doc, 2, 0).unwrap();
        assert_eq!(ids(&moved.sections), vec!["skills", "experience", "education"]);
        assert_eq!(moved.sections.iter().map(|s| s.order).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(moved.version, doc.version);
        assert!(move_section(&doc, 0, 3).is_none());
    }
}
