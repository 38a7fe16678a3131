//! A configured catalogue section: loaders, filter, display mode and carousel

use serde_json::Value;

use crate::config::SectionConfig;

use super::carousel::CarouselNavigator;
use super::catalog_client::FetchError;
use super::collection_loader::CollectionLoader;
use super::display_mode::DisplayModeController;
use super::filter::filter_items;
use super::load_state::LoadState;
use super::request::{FetchKind, FetchRequest, RequestToken};
use super::section_view::{CardView, SectionBody, SectionHeader, SectionView, TabView};
use super::taxonomy_loader::{TaxonomyLoader, TaxonomyOutcome};
use super::types::{ALL_CATEGORY_KEY, Category, DisplayMode, Item, SectionMode, slugify};

/// Addressable parts of a rendered section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionRegion {
    Section,
    Title,
    Loading,
    Error,
    Grid,
    Carousel,
    Tabs,
    ToggleButton,
}

impl SectionRegion {
    fn suffix(self) -> &'static str {
        match self {
            SectionRegion::Section => "section",
            SectionRegion::Title => "title",
            SectionRegion::Loading => "loading",
            SectionRegion::Error => "error",
            SectionRegion::Grid => "grid",
            SectionRegion::Carousel => "carousel",
            SectionRegion::Tabs => "tabs",
            SectionRegion::ToggleButton => "toggle-button",
        }
    }
}

/// A user event the section refused; state is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionError {
    #[error("category selection is only available in song sections")]
    CategoriesUnsupported,

    #[error("unknown category '{0}'")]
    UnknownCategory(String),
}

pub struct Section {
    config: SectionConfig,
    id: String,
    items: CollectionLoader,
    taxonomy: TaxonomyLoader,
    selected_category: String,
    display: DisplayModeController,
    navigator: CarouselNavigator,
}

impl Section {
    pub fn new(config: SectionConfig, viewport_width: u32) -> Self {
        let id = slugify(&config.title);
        Self {
            id,
            items: CollectionLoader::new(config.mode),
            taxonomy: TaxonomyLoader::new(),
            selected_category: ALL_CATEGORY_KEY.to_string(),
            display: DisplayModeController::new(config.mode),
            navigator: CarouselNavigator::new(viewport_width),
            config,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn mode(&self) -> SectionMode {
        self.config.mode
    }

    pub fn region_id(&self, region: SectionRegion) -> String {
        format!("{}-{}", self.id, region.suffix())
    }

    pub fn tab_region_id(&self, category_key: &str) -> String {
        format!("{}-tab-{}", self.id, category_key)
    }

    // ========================================================================
    // Fetch lifecycle
    // ========================================================================

    /// Kick off the initial loads. Only song sections load a taxonomy.
    pub fn start(&mut self) -> Vec<FetchRequest> {
        let mut requests = Vec::new();
        requests.extend(self.items.begin(&self.config.items_endpoint));
        if self.config.mode == SectionMode::Songs {
            requests.extend(self.taxonomy.begin(self.config.taxonomy_endpoint.as_deref()));
            self.reconcile_selection();
        }
        self.refresh_navigator();
        tracing::debug!(section = %self.id, requests = requests.len(), "Section loads started");
        requests
    }

    /// Re-issue every load for the current endpoints.
    pub fn reload(&mut self) -> Vec<FetchRequest> {
        tracing::info!(section = %self.id, "Reloading section");
        self.start()
    }

    /// Point the section at a new items endpoint. Unchanged endpoints are a no-op.
    pub fn set_items_endpoint(&mut self, endpoint: &str) -> Option<FetchRequest> {
        if endpoint == self.config.items_endpoint {
            return None;
        }
        tracing::debug!(section = %self.id, endpoint, "Items endpoint changed");
        self.config.items_endpoint = endpoint.to_string();
        let request = self.items.begin(endpoint);
        self.refresh_navigator();
        request
    }

    /// Point a song section at a new taxonomy endpoint. Album sections ignore it.
    pub fn set_taxonomy_endpoint(&mut self, endpoint: Option<&str>) -> Option<FetchRequest> {
        if self.config.mode != SectionMode::Songs
            || endpoint == self.config.taxonomy_endpoint.as_deref()
        {
            return None;
        }
        self.config.taxonomy_endpoint = endpoint.map(str::to_string);
        let request = self.taxonomy.begin(endpoint);
        if self.reconcile_selection() {
            self.refresh_navigator();
        }
        request
    }

    /// Feed back a settled request. Returns `false` if it was stale.
    pub fn apply(&mut self, kind: FetchKind, token: RequestToken, result: Result<Value, FetchError>) -> bool {
        match kind {
            FetchKind::Items => {
                let applied = self.items.complete(token, result);
                if applied {
                    self.refresh_navigator();
                }
                applied
            }
            FetchKind::Taxonomy => match self.taxonomy.complete(token, result) {
                TaxonomyOutcome::Stale => false,
                TaxonomyOutcome::Loaded => {
                    if self.selected_category != ALL_CATEGORY_KEY {
                        self.selected_category = ALL_CATEGORY_KEY.to_string();
                        self.refresh_navigator();
                    }
                    true
                }
                TaxonomyOutcome::Degraded => {
                    if self.reconcile_selection() {
                        self.refresh_navigator();
                    }
                    true
                }
            },
        }
    }

    pub fn load_state(&self) -> &LoadState<Item> {
        self.items.state()
    }

    pub fn categories(&self) -> &[Category] {
        self.taxonomy.categories()
    }

    // ========================================================================
    // Selection & display
    // ========================================================================

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn select_category(&mut self, key: &str) -> Result<(), SectionError> {
        if self.config.mode != SectionMode::Songs {
            return Err(SectionError::CategoriesUnsupported);
        }
        if key != ALL_CATEGORY_KEY && !self.taxonomy.contains(key) {
            return Err(SectionError::UnknownCategory(key.to_string()));
        }
        if key != self.selected_category {
            tracing::debug!(section = %self.id, category = key, "Category selected");
            self.selected_category = key.to_string();
            self.refresh_navigator();
        }
        Ok(())
    }

    /// Move the selection through "all" followed by the loaded categories.
    pub fn cycle_category(&mut self, forward: bool) -> Result<(), SectionError> {
        if self.config.mode != SectionMode::Songs {
            return Err(SectionError::CategoriesUnsupported);
        }
        let keys: Vec<&str> = std::iter::once(ALL_CATEGORY_KEY)
            .chain(self.taxonomy.categories().iter().map(|c| c.key.as_str()))
            .collect();
        let current = keys
            .iter()
            .position(|k| *k == self.selected_category)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % keys.len()
        } else {
            (current + keys.len() - 1) % keys.len()
        };
        let key = keys[next].to_string();
        self.select_category(&key)
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display.current()
    }

    pub fn toggle_display(&mut self) -> bool {
        let toggled = self.display.toggle();
        if toggled {
            tracing::debug!(section = %self.id, mode = ?self.display.current(), "Display mode toggled");
            self.refresh_navigator();
        }
        toggled
    }

    /// Items visible under the current category, in load order
    pub fn filtered_items(&self) -> Vec<&Item> {
        match self.items.state() {
            LoadState::Success(items) => filter_items(items, &self.selected_category),
            _ => Vec::new(),
        }
    }

    pub fn navigator(&self) -> &CarouselNavigator {
        &self.navigator
    }

    pub fn step_back(&mut self) -> bool {
        self.display.current() == DisplayMode::Carousel && self.navigator.step_back()
    }

    pub fn step_forward(&mut self) -> bool {
        self.display.current() == DisplayMode::Carousel && self.navigator.step_forward()
    }

    pub fn set_viewport_width(&mut self, viewport_width: u32) {
        self.navigator.set_viewport_width(viewport_width);
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    pub fn view(&self) -> SectionView {
        SectionView {
            id: self.id.clone(),
            region_id: self.region_id(SectionRegion::Section),
            title: self.config.title.clone(),
            title_region_id: self.region_id(SectionRegion::Title),
            mode: self.config.mode,
            header: self.header_view(),
            body: self.body_view(),
        }
    }

    fn header_view(&self) -> SectionHeader {
        match self.display.toggle_label() {
            Some(label) => SectionHeader::Toggle {
                label,
                region_id: self.region_id(SectionRegion::ToggleButton),
            },
            None => {
                let all = TabView {
                    key: ALL_CATEGORY_KEY.to_string(),
                    label: "All".to_string(),
                    region_id: self.tab_region_id(ALL_CATEGORY_KEY),
                    selected: self.selected_category == ALL_CATEGORY_KEY,
                };
                let tabs = std::iter::once(all)
                    .chain(self.taxonomy.categories().iter().map(|c| TabView {
                        key: c.key.clone(),
                        label: c.label.clone(),
                        region_id: self.tab_region_id(&c.key),
                        selected: self.selected_category == c.key,
                    }))
                    .collect();
                SectionHeader::Tabs {
                    region_id: self.region_id(SectionRegion::Tabs),
                    tabs,
                }
            }
        }
    }

    fn body_view(&self) -> SectionBody {
        match self.items.state() {
            LoadState::Idle => SectionBody::Idle,
            LoadState::Loading => SectionBody::Loading {
                region_id: self.region_id(SectionRegion::Loading),
            },
            LoadState::Error(e) => SectionBody::Failed {
                region_id: self.region_id(SectionRegion::Error),
                reason: e.to_string(),
            },
            LoadState::Success(_) => {
                let visible = self.filtered_items();
                match self.display.current() {
                    DisplayMode::Grid => SectionBody::Grid {
                        region_id: self.region_id(SectionRegion::Grid),
                        cards: visible
                            .iter()
                            .enumerate()
                            .map(|(i, item)| CardView::from_item(item, self.config.mode, i))
                            .collect(),
                    },
                    DisplayMode::Carousel => {
                        let range = self.navigator.visible_range();
                        SectionBody::Carousel {
                            region_id: self.region_id(SectionRegion::Carousel),
                            cards: visible[range.clone()]
                                .iter()
                                .enumerate()
                                .map(|(i, item)| CardView::from_item(item, self.config.mode, range.start + i))
                                .collect(),
                            total: visible.len(),
                            first_visible: range.start,
                            per_view: self.navigator.items_per_view(),
                            can_step_back: self.navigator.can_step_back(),
                            can_step_forward: self.navigator.can_step_forward(),
                            position: self.navigator.position(),
                        }
                    }
                }
            }
        }
    }

    /// Drop a selection the current category set no longer has.
    /// Returns `true` if the selection changed.
    fn reconcile_selection(&mut self) -> bool {
        if self.selected_category == ALL_CATEGORY_KEY || self.taxonomy.contains(&self.selected_category) {
            return false;
        }
        tracing::debug!(
            section = %self.id,
            category = %self.selected_category,
            "Selected category no longer available, resetting to all"
        );
        self.selected_category = ALL_CATEGORY_KEY.to_string();
        true
    }

    fn refresh_navigator(&mut self) {
        let count = self.filtered_items().len();
        self.navigator.reset(count);
    }
}
