//! Immutable render snapshots produced by a section

use super::types::{Item, SectionMode, ViewportPosition};

/// Shown instead of an empty image reference
pub const PLACEHOLDER_IMAGE: &str = "/assets/album-placeholder.png";

/// A single rendered album or song
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub key: String,
    pub kind: &'static str,
    pub title: String,
    pub image_url: String,
    pub has_image: bool,
    pub chip_label: String,
}

impl CardView {
    pub fn from_item(item: &Item, mode: SectionMode, index: usize) -> Self {
        let kind = mode.item_kind();
        Self {
            key: item
                .render_key()
                .unwrap_or_else(|| format!("{}-{}", kind, index)),
            kind,
            title: item.display_title().to_string(),
            image_url: if item.has_image() {
                item.image_url.clone()
            } else {
                PLACEHOLDER_IMAGE.to_string()
            },
            has_image: item.has_image(),
            chip_label: item.metric.label(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabView {
    pub key: String,
    pub label: String,
    pub region_id: String,
    pub selected: bool,
}

/// Control area next to the section title
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionHeader {
    Toggle { label: &'static str, region_id: String },
    Tabs { region_id: String, tabs: Vec<TabView> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionBody {
    Idle,
    Loading {
        region_id: String,
    },
    Failed {
        region_id: String,
        reason: String,
    },
    Grid {
        region_id: String,
        cards: Vec<CardView>,
    },
    /// `cards` holds only the items in view
    Carousel {
        region_id: String,
        cards: Vec<CardView>,
        total: usize,
        first_visible: usize,
        per_view: usize,
        can_step_back: bool,
        can_step_forward: bool,
        position: ViewportPosition,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionView {
    pub id: String,
    pub region_id: String,
    pub title: String,
    pub title_region_id: String,
    pub mode: SectionMode,
    pub header: SectionHeader,
    pub body: SectionBody,
}
