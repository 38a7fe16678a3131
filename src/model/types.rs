//! Core type definitions for catalogue sections

use serde::Deserialize;

/// Key of the synthetic category that means "no filter applied"
pub const ALL_CATEGORY_KEY: &str = "all";

/// Fallback shown for items with an empty title
pub const UNTITLED: &str = "Untitled";

/// Which kind of catalogue a section shows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionMode {
    #[default]
    Albums,
    Songs,
}

impl SectionMode {
    pub fn item_kind(self) -> &'static str {
        match self {
            SectionMode::Albums => "album",
            SectionMode::Songs => "song",
        }
    }
}

/// Popularity metric carried by an item, depends on the section mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemMetric {
    Follows(u64),
    Likes(u64),
}

impl ItemMetric {
    pub fn label(self) -> String {
        match self {
            ItemMetric::Follows(n) => format!("{} follows", n),
            ItemMetric::Likes(n) => format!("{} likes", n),
        }
    }
}

/// A catalogue entry (album or song)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub slug: Option<String>,
    pub title: String,
    pub image_url: String,
    pub metric: ItemMetric,
    pub category_key: Option<String>,
}

impl Item {
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() { UNTITLED } else { &self.title }
    }

    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }

    /// Stable render identifier: slug, then id, then the slugified title.
    pub fn render_key(&self) -> Option<String> {
        if let Some(slug) = self.slug.as_deref().filter(|s| !s.is_empty()) {
            return Some(slug.to_string());
        }
        if !self.id.is_empty() {
            return Some(self.id.clone());
        }
        let title_slug = slugify(&self.title);
        if title_slug.is_empty() { None } else { Some(title_slug) }
    }
}

/// A genre used to filter song sections
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub key: String,
    pub label: String,
}

/// How a section's items are arranged
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Grid,
    Carousel,
}

/// Where the carousel view sits within the item collection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewportPosition {
    #[default]
    AtStart,
    Middle,
    AtEnd,
}

/// Lowercases and joins whitespace runs with `-`.
pub fn slugify(text: &str) -> String {
    text.split_whitespace()
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
