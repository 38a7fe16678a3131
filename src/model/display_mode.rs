//! Grid/carousel state machine for a section

use super::types::{DisplayMode, SectionMode};

pub struct DisplayModeController {
    mode: SectionMode,
    state: DisplayMode,
}

impl DisplayModeController {
    pub fn new(mode: SectionMode) -> Self {
        Self { mode, state: DisplayMode::Grid }
    }

    /// Song sections are always a carousel.
    pub fn current(&self) -> DisplayMode {
        match self.mode {
            SectionMode::Songs => DisplayMode::Carousel,
            SectionMode::Albums => self.state,
        }
    }

    /// Flip grid and carousel. Returns `false` when the mode has no toggle.
    pub fn toggle(&mut self) -> bool {
        if self.mode == SectionMode::Songs {
            return false;
        }
        self.state = match self.state {
            DisplayMode::Grid => DisplayMode::Carousel,
            DisplayMode::Carousel => DisplayMode::Grid,
        };
        true
    }

    /// Label of the toggle affordance, `None` when there is no toggle.
    pub fn toggle_label(&self) -> Option<&'static str> {
        match (self.mode, self.state) {
            (SectionMode::Songs, _) => None,
            (SectionMode::Albums, DisplayMode::Grid) => Some("Collapse"),
            (SectionMode::Albums, DisplayMode::Carousel) => Some("Show All"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn albums_start_as_grid_and_toggle() {
        let mut controller = DisplayModeController::new(SectionMode::Albums);
        assert_eq!(controller.current(), DisplayMode::Grid);
        assert_eq!(controller.toggle_label(), Some("Collapse"));

        assert!(controller.toggle());
        assert_eq!(controller.current(), DisplayMode::Carousel);
        assert_eq!(controller.toggle_label(), Some("Show All"));

        controller.toggle();
        assert_eq!(controller.current(), DisplayMode::Grid);
    }

    #[test]
    fn songs_are_always_carousel() {
        let mut controller = DisplayModeController::new(SectionMode::Songs);
        for _ in 0..5 {
            assert_eq!(controller.current(), DisplayMode::Carousel);
            assert!(!controller.toggle());
        }
        assert_eq!(controller.current(), DisplayMode::Carousel);
        assert_eq!(controller.toggle_label(), None);
    }
}
