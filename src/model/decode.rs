//! Lenient mapping of raw catalogue JSON into items and categories

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use super::types::{ALL_CATEGORY_KEY, Category, Item, ItemMetric, SectionMode};

/// Envelope field some taxonomy endpoints wrap their list in
const ENVELOPE_FIELD: &str = "data";

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawItem {
    id: Value,
    slug: Value,
    title: Value,
    image: Value,
    cover: Value,
    follows: Value,
    likes: Value,
    genre: Value,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawCategory {
    key: Option<String>,
    label: Option<String>,
}

/// Decode an items payload. A missing or non-sequence payload is an empty
/// collection; entries that are not objects are skipped.
pub fn decode_items(payload: Value, mode: SectionMode) -> Vec<Item> {
    let Value::Array(entries) = payload else {
        if !payload.is_null() {
            tracing::warn!(?mode, "Items payload is not a sequence, treating as empty");
        }
        return Vec::new();
    };

    let total = entries.len();
    let items: Vec<Item> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<RawItem>(entry).ok())
        .map(|raw| raw.into_item(mode))
        .collect();

    if items.len() != total {
        tracing::warn!(skipped = total - items.len(), "Skipped malformed item entries");
    }
    items
}

/// Decode a taxonomy payload, accepting `{data: [...]}` or a bare `[...]`.
/// Entries without a key, the reserved `"all"` key, and duplicates are dropped.
pub fn decode_categories(payload: Value) -> Vec<Category> {
    let entries = match payload {
        Value::Object(mut map) => match map.remove(ENVELOPE_FIELD) {
            Some(Value::Array(entries)) => entries,
            _ => Vec::new(),
        },
        Value::Array(entries) => entries,
        _ => Vec::new(),
    };

    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<RawCategory>(entry).ok())
        .filter_map(|raw| {
            let key = raw.key.filter(|k| !k.is_empty())?;
            let label = raw.label.filter(|l| !l.is_empty()).unwrap_or_else(|| key.clone());
            Some(Category { key, label })
        })
        .filter(|category| category.key != ALL_CATEGORY_KEY)
        .filter(|category| seen.insert(category.key.clone()))
        .collect()
}

impl RawItem {
    fn into_item(self, mode: SectionMode) -> Item {
        let metric = match mode {
            SectionMode::Albums => ItemMetric::Follows(as_count(&self.follows)),
            SectionMode::Songs => ItemMetric::Likes(as_count(&self.likes)),
        };
        let image = as_identifier(&self.image);
        let image_url = if image.is_empty() {
            as_identifier(&self.cover)
        } else {
            image
        };
        let slug = Some(as_identifier(&self.slug)).filter(|s| !s.is_empty());

        Item {
            id: as_identifier(&self.id),
            slug,
            title: as_identifier(&self.title),
            image_url,
            metric,
            category_key: self
                .genre
                .get("key")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

/// Strings pass through, numbers are rendered, anything else is empty.
fn as_identifier(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn as_count(value: &Value) -> u64 {
    value
        .as_u64()
        .or_else(|| value.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
        .unwrap_or(0)
}
