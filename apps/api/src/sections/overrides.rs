//! Per-item visibility and ordering layered over a section's records.

use crate::dsl::model::ItemOverride;
use crate::sections::items::Identified;

/// Drops items hidden by an override and orders the rest.
///
/// An item's sort key is its override's `order` when one is set, otherwise its
/// original index. The sort is stable, so ties keep their original relative order.
pub fn apply_overrides<T: Identified>(items: Vec<T>, overrides: &[ItemOverride]) -> Vec<T> {
    if overrides.is_empty() {
        return items;
    }

    let mut kept: Vec<(i32, T)> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let ov = overrides.iter().find(|o| o.item_id == item.item_id());
            match ov {
                Some(o) if !o.visible => None,
                Some(o) => Some((o.order.unwrap_or(index as i32), item)),
                None => Some((index as i32, item)),
            }
        })
        .collect();

    kept.sort_by_key(|(order, _)| *order);
    kept.into_iter().map(|(_, item)| item).collect()
}
