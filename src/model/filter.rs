//! Category filtering of loaded items

use super::types::{ALL_CATEGORY_KEY, Item};

/// Ordered subsequence of `items` visible under `selected_key`.
/// `"all"` keeps everything; items without a category never match a real key.
pub fn filter_items<'a>(items: &'a [Item], selected_key: &str) -> Vec<&'a Item> {
    if selected_key == ALL_CATEGORY_KEY {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| item.category_key.as_deref() == Some(selected_key))
        .collect()
}
