//! Model module - Section engine and page state
//!
//! This module contains the data structures and state machines behind every
//! catalogue section. It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (items, categories, modes)
//! - `load_state`: Tri-state result of a collection fetch
//! - `request`: Request tokens and the fetch request/response envelopes
//! - `catalog_client`: Catalogue source trait and its HTTP implementation
//! - `decode`: Lenient JSON to item/category mapping
//! - `collection_loader`: Token-guarded item loader
//! - `taxonomy_loader`: Best-effort category loader
//! - `filter`: Category filtering
//! - `display_mode`: Grid/carousel state machine
//! - `carousel`: Carousel boundaries and breakpoints
//! - `section`: Composition of the above per configured section
//! - `section_view`: Render snapshots handed to the view
//! - `page`: Ordered sections and page-level UI state

mod types;
mod load_state;
mod request;
mod catalog_client;
mod decode;
mod collection_loader;
mod taxonomy_loader;
mod filter;
mod display_mode;
mod carousel;
mod section;
mod section_view;
mod page;

pub use types::{
    ALL_CATEGORY_KEY, UNTITLED, Category, DisplayMode, Item, ItemMetric, SectionMode,
    ViewportPosition, slugify,
};

pub use load_state::LoadState;

pub use request::{FetchKind, FetchRequest, FetchResponse, RequestToken};

pub use catalog_client::{CatalogSource, FetchError, HttpCatalog};

pub use decode::{decode_categories, decode_items};

pub use collection_loader::CollectionLoader;
pub use taxonomy_loader::{TaxonomyLoader, TaxonomyOutcome};
pub use filter::filter_items;
pub use display_mode::DisplayModeController;
pub use carousel::{CarouselNavigator, items_per_view};

pub use section::{Section, SectionError, SectionRegion};

pub use section_view::{
    CardView, PLACEHOLDER_IMAGE, SectionBody, SectionHeader, SectionView, TabView,
};

pub use page::{PageModel, UiState};
