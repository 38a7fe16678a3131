//! Page model: the ordered sections plus page-level UI state

use std::time::Instant;

use crate::config::SectionConfig;

use super::request::{FetchRequest, FetchResponse};
use super::section::Section;
use super::section_view::SectionView;

/// Seconds a notice stays on screen
const NOTICE_TTL_SECS: u64 = 5;

/// UI state that is not owned by any section
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub focused: usize,
    pub show_help_popup: bool,
    pub notice: Option<String>,
    pub notice_timestamp: Option<Instant>,
}

pub struct PageModel {
    sections: Vec<Section>,
    ui_state: UiState,
    should_quit: bool,
}

impl PageModel {
    pub fn new(configs: Vec<SectionConfig>, viewport_width: u32) -> Self {
        Self {
            sections: configs
                .into_iter()
                .map(|config| Section::new(config, viewport_width))
                .collect(),
            ui_state: UiState::default(),
            should_quit: false,
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section_mut(&mut self, index: usize) -> Option<&mut Section> {
        self.sections.get_mut(index)
    }

    pub fn focused_index(&self) -> usize {
        self.ui_state.focused
    }

    pub fn focused_mut(&mut self) -> Option<&mut Section> {
        self.sections.get_mut(self.ui_state.focused)
    }

    pub fn focus_next(&mut self) {
        if !self.sections.is_empty() {
            self.ui_state.focused = (self.ui_state.focused + 1) % self.sections.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.sections.is_empty() {
            let len = self.sections.len();
            self.ui_state.focused = (self.ui_state.focused + len - 1) % len;
        }
    }

    /// Start every section, tagging each request with its section index.
    pub fn start_all(&mut self) -> Vec<(usize, FetchRequest)> {
        self.sections
            .iter_mut()
            .enumerate()
            .flat_map(|(index, section)| {
                section.start().into_iter().map(move |request| (index, request))
            })
            .collect()
    }

    /// Route a settled fetch to its section. Returns `false` if stale or unaddressed.
    pub fn apply(&mut self, response: FetchResponse) -> bool {
        match self.sections.get_mut(response.section) {
            Some(section) => section.apply(response.kind, response.token, response.result),
            None => {
                tracing::warn!(section = response.section, "Fetch response for unknown section");
                false
            }
        }
    }

    pub fn set_viewport_width(&mut self, viewport_width: u32) {
        for section in &mut self.sections {
            section.set_viewport_width(viewport_width);
        }
    }

    pub fn views(&self) -> Vec<SectionView> {
        self.sections.iter().map(Section::view).collect()
    }

    pub fn get_ui_state(&self) -> UiState {
        self.ui_state.clone()
    }

    // ========================================================================
    // Notices & popups
    // ========================================================================

    pub fn set_notice(&mut self, message: String) {
        self.ui_state.notice = Some(message);
        self.ui_state.notice_timestamp = Some(Instant::now());
    }

    pub fn clear_notice(&mut self) {
        self.ui_state.notice = None;
        self.ui_state.notice_timestamp = None;
    }

    pub fn auto_clear_old_notices(&mut self) {
        if let Some(timestamp) = self.ui_state.notice_timestamp {
            if timestamp.elapsed().as_secs() >= NOTICE_TTL_SECS {
                self.clear_notice();
            }
        }
    }

    pub fn toggle_help_popup(&mut self) {
        self.ui_state.show_help_popup = !self.ui_state.show_help_popup;
    }

    pub fn hide_help_popup(&mut self) {
        self.ui_state.show_help_popup = false;
    }

    pub fn is_help_popup_open(&self) -> bool {
        self.ui_state.show_help_popup
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_should_quit(&mut self, quit: bool) {
        self.should_quit = quit;
    }
}
