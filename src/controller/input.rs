//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{ALL_CATEGORY_KEY, Section, SectionError};
use super::AppController;

impl AppController {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Help popup swallows everything except its own close keys
        if self.model.is_help_popup_open() {
            match key.code {
                KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') => {
                    self.model.hide_help_popup();
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    self.model.set_should_quit(true);
                }
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.model.set_should_quit(true);
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                self.model.toggle_help_popup();
            }
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.model.focus_prev();
                } else {
                    self.model.focus_next();
                }
            }
            KeyCode::BackTab => {
                self.model.focus_prev();
            }
            KeyCode::Left => {
                if let Some(section) = self.model.focused_mut() {
                    section.step_back();
                }
            }
            KeyCode::Right => {
                if let Some(section) = self.model.focused_mut() {
                    section.step_forward();
                }
            }
            // Show All / Collapse
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(section) = self.model.focused_mut() {
                    section.toggle_display();
                }
            }
            KeyCode::Char('[') => self.change_category(|s| s.cycle_category(false)),
            KeyCode::Char(']') => self.change_category(|s| s.cycle_category(true)),
            KeyCode::Char('a') | KeyCode::Char('A') => {
                self.change_category(|s| s.select_category(ALL_CATEGORY_KEY))
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.reload_focused();
            }
            _ => {}
        }
        Ok(())
    }

    fn change_category<F>(&mut self, change: F)
    where
        F: FnOnce(&mut Section) -> Result<(), SectionError>,
    {
        let outcome = match self.model.focused_mut() {
            Some(section) => change(section),
            None => return,
        };
        if let Err(e) = outcome {
            tracing::debug!(error = %e, "Category change refused");
            self.model.set_notice(Self::format_error(&e));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use serde_json::{Value, json};

    use crate::config::AppConfig;
    use crate::controller::AppController;
    use crate::model::{
        CatalogSource, DisplayMode, FetchError, FetchKind, FetchResponse, PageModel, RequestToken,
    };

    struct Unreachable;

    #[async_trait]
    impl CatalogSource for Unreachable {
        async fn fetch_json(&self, endpoint: &str) -> Result<Value, FetchError> {
            Err(FetchError::Transport { endpoint: endpoint.to_string(), detail: "offline".into() })
        }
    }

    fn controller() -> AppController {
        AppController::new(PageModel::new(AppConfig::default().sections, 1200), Arc::new(Unreachable), 10)
    }

    fn press(controller: &mut AppController, code: KeyCode) {
        controller
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    /// Start every section and settle the loads with the given payloads.
    fn load(controller: &mut AppController, items: Value, genres: Value) {
        for (section, request) in controller.model.start_all() {
            let result = match request.kind {
                FetchKind::Items => Ok(items.clone()),
                FetchKind::Taxonomy => Ok(genres.clone()),
            };
            controller.model.apply(FetchResponse {
                section,
                kind: request.kind,
                token: request.token,
                result,
            });
        }
    }

    fn songs(n: usize) -> Value {
        Value::Array(
            (0..n)
                .map(|i| {
                    let genre = if i % 2 == 0 { "rock" } else { "jazz" };
                    json!({"id": format!("s{i}"), "genre": {"key": genre}})
                })
                .collect(),
        )
    }

    #[test]
    fn tab_cycles_focus_and_wraps() {
        let mut controller = controller();
        press(&mut controller, KeyCode::Tab);
        assert_eq!(controller.model().focused_index(), 1);
        press(&mut controller, KeyCode::BackTab);
        press(&mut controller, KeyCode::BackTab);
        assert_eq!(controller.model().focused_index(), 2);
    }

    #[test]
    fn space_toggles_album_display_mode() {
        let mut controller = controller();
        load(&mut controller, songs(3), json!([]));
        press(&mut controller, KeyCode::Char(' '));
        assert_eq!(controller.model().sections()[0].display_mode(), DisplayMode::Carousel);
        press(&mut controller, KeyCode::Enter);
        assert_eq!(controller.model().sections()[0].display_mode(), DisplayMode::Grid);
    }

    #[test]
    fn arrows_move_the_focused_carousel() {
        let mut controller = controller();
        load(&mut controller, songs(10), json!([]));
        // Grid albums ignore the arrows
        press(&mut controller, KeyCode::Right);
        assert_eq!(controller.model().sections()[0].navigator().offset(), 0);

        press(&mut controller, KeyCode::Tab);
        press(&mut controller, KeyCode::Tab);
        press(&mut controller, KeyCode::Right);
        press(&mut controller, KeyCode::Right);
        assert_eq!(controller.model().sections()[2].navigator().offset(), 2);
        press(&mut controller, KeyCode::Left);
        assert_eq!(controller.model().sections()[2].navigator().offset(), 1);
    }

    #[test]
    fn brackets_cycle_genres_on_songs() {
        let mut controller = controller();
        load(
            &mut controller,
            songs(4),
            json!({"data": [{"key": "rock", "label": "Rock"}, {"key": "jazz", "label": "Jazz"}]}),
        );
        press(&mut controller, KeyCode::Tab);
        press(&mut controller, KeyCode::Tab);
        press(&mut controller, KeyCode::Char(']'));
        assert_eq!(controller.model().sections()[2].selected_category(), "rock");
        press(&mut controller, KeyCode::Char('['));
        press(&mut controller, KeyCode::Char('['));
        assert_eq!(controller.model().sections()[2].selected_category(), "jazz");
        press(&mut controller, KeyCode::Char('a'));
        assert_eq!(controller.model().sections()[2].selected_category(), "all");
    }

    #[test]
    fn genre_keys_on_albums_leave_a_notice() {
        let mut controller = controller();
        press(&mut controller, KeyCode::Char(']'));
        assert_eq!(
            controller.model().get_ui_state().notice.as_deref(),
            Some("Genres are only available in song sections.")
        );
        assert_eq!(controller.model().sections()[0].selected_category(), "all");
    }

    #[test]
    fn esc_closes_help_before_quitting() {
        let mut controller = controller();
        press(&mut controller, KeyCode::Char('h'));
        assert!(controller.model().is_help_popup_open());
        press(&mut controller, KeyCode::Esc);
        assert!(!controller.model().is_help_popup_open());
        assert!(!controller.model().should_quit());
        press(&mut controller, KeyCode::Esc);
        assert!(controller.model().should_quit());
    }

    #[test]
    fn ctrl_q_quits() {
        let mut controller = controller();
        controller
            .handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(controller.model().should_quit());
    }

    #[tokio::test]
    async fn reload_key_restarts_the_focused_section() {
        let mut controller = controller();
        let stale = RequestToken::default();
        load(&mut controller, songs(1), json!([]));
        press(&mut controller, KeyCode::Char('r'));
        let section = &controller.model().sections()[0];
        assert!(section.load_state().is_loading());
        assert!(!controller.model.apply(FetchResponse {
            section: 0,
            kind: FetchKind::Items,
            token: stale,
            result: Ok(json!([])),
        }));
    }
}
