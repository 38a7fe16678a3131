//! Carousel scroll boundaries and responsive items-per-view

use std::ops::Range;

use super::types::ViewportPosition;

/// (minimum viewport width, items per view), widest first
const BREAKPOINTS: [(u32, usize); 4] = [(1200, 4), (900, 3), (600, 2), (0, 1)];

/// Items moved by one step
const STEP: usize = 1;

pub fn items_per_view(viewport_width: u32) -> usize {
    BREAKPOINTS
        .iter()
        .find(|(min_width, _)| viewport_width >= *min_width)
        .map(|(_, per_view)| *per_view)
        .unwrap_or(1)
}

#[derive(Clone, Debug)]
pub struct CarouselNavigator {
    item_count: usize,
    per_view: usize,
    offset: usize,
}

impl Default for CarouselNavigator {
    fn default() -> Self {
        Self {
            item_count: 0,
            per_view: 1,
            offset: 0,
        }
    }
}

impl CarouselNavigator {
    pub fn new(viewport_width: u32) -> Self {
        Self {
            per_view: items_per_view(viewport_width),
            ..Self::default()
        }
    }

    /// The displayed collection changed; go back to the start.
    pub fn reset(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.offset = 0;
    }

    /// Re-evaluate breakpoints. The offset is clamped so the view never runs past the end.
    pub fn set_viewport_width(&mut self, viewport_width: u32) {
        self.per_view = items_per_view(viewport_width);
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn items_per_view(&self) -> usize {
        self.per_view
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn can_step_back(&self) -> bool {
        self.offset > 0
    }

    pub fn can_step_forward(&self) -> bool {
        self.offset < self.max_offset()
    }

    pub fn step_back(&mut self) -> bool {
        if !self.can_step_back() {
            return false;
        }
        self.offset = self.offset.saturating_sub(STEP);
        true
    }

    pub fn step_forward(&mut self) -> bool {
        if !self.can_step_forward() {
            return false;
        }
        self.offset = (self.offset + STEP).min(self.max_offset());
        true
    }

    pub fn position(&self) -> ViewportPosition {
        if !self.can_step_back() {
            ViewportPosition::AtStart
        } else if !self.can_step_forward() {
            ViewportPosition::AtEnd
        } else {
            ViewportPosition::Middle
        }
    }

    /// Indices of the items currently in view
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.offset + self.per_view).min(self.item_count);
        self.offset.min(end)..end
    }

    fn max_offset(&self) -> usize {
        self.item_count.saturating_sub(self.per_view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_table() {
        assert_eq!(items_per_view(1920), 4);
        assert_eq!(items_per_view(1200), 4);
        assert_eq!(items_per_view(1199), 3);
        assert_eq!(items_per_view(900), 3);
        assert_eq!(items_per_view(899), 2);
        assert_eq!(items_per_view(600), 2);
        assert_eq!(items_per_view(599), 1);
        assert_eq!(items_per_view(0), 1);
    }

    #[test]
    fn empty_collection_cannot_move() {
        let mut nav = CarouselNavigator::new(1200);
        nav.reset(0);
        assert!(!nav.can_step_back());
        assert!(!nav.can_step_forward());
        assert!(!nav.step_forward());
        assert_eq!(nav.visible_range(), 0..0);
    }

    #[test]
    fn collection_that_fits_one_view_cannot_move() {
        let mut nav = CarouselNavigator::new(1200);
        nav.reset(4);
        assert!(!nav.can_step_forward());
        assert_eq!(nav.visible_range(), 0..4);
    }

    #[test]
    fn stepping_walks_to_the_end_and_back() {
        let mut nav = CarouselNavigator::new(900);
        nav.reset(5);
        assert_eq!(nav.position(), ViewportPosition::AtStart);

        assert!(nav.step_forward());
        assert_eq!(nav.position(), ViewportPosition::Middle);
        assert!(nav.step_forward());
        assert_eq!(nav.position(), ViewportPosition::AtEnd);
        assert_eq!(nav.visible_range(), 2..5);

        assert!(!nav.step_forward());
        assert_eq!(nav.offset(), 2);

        assert!(nav.step_back());
        assert!(nav.step_back());
        assert!(!nav.step_back());
        assert_eq!(nav.position(), ViewportPosition::AtStart);
    }

    #[test]
    fn reset_returns_to_start() {
        let mut nav = CarouselNavigator::new(0);
        nav.reset(10);
        nav.step_forward();
        nav.step_forward();
        assert!(nav.can_step_back());

        nav.reset(3);
        assert!(!nav.can_step_back());
        assert!(nav.can_step_forward());
    }

    #[test]
    fn widening_viewport_clamps_offset() {
        let mut nav = CarouselNavigator::new(0);
        nav.reset(6);
        for _ in 0..5 {
            nav.step_forward();
        }
        assert_eq!(nav.offset(), 5);

        nav.set_viewport_width(1200);
        assert_eq!(nav.offset(), 2);
        assert_eq!(nav.visible_range(), 2..6);
        assert!(!nav.can_step_forward());
    }
}
