//! Connectivity health state machine.
//!
//! Tracks whether the backend is currently reachable and owns every visible
//! consequence of that: indicator glyph and color, error overlay, retry
//! spinner, window badge. The indicator never drifts from the state value
//! because it is only written inside the entry actions here.

use crate::render::{Badge, RenderSurface, StyleLookup};

/// Backend reachability as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// Before the first poll resolves.
    #[default]
    Loading,
    Ok,
    Error,
}

/// Two-state (plus initial loading) machine with side effects on transition.
#[derive(Debug, Default)]
pub struct ConnectivityState {
    current: Connectivity,
}

impl ConnectivityState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Connectivity {
        self.current
    }

    /// Drive the machine to `Ok`.
    ///
    /// Entry effects fire only on an actual transition; repeated successes
    /// are no-ops so overlay dismissal and indicator swaps never restart.
    /// Returns whether a transition fired.
    pub fn mark_ok(
        &mut self,
        surface: &mut dyn RenderSurface,
        style: &dyn StyleLookup,
    ) -> bool {
        if self.current == Connectivity::Ok {
            return false;
        }
        self.current = Connectivity::Ok;

        surface.set_indicator(style.ok_symbol(), style.ok_color());
        surface.set_container_color(style.text_color());
        surface.set_error_overlay(false);
        surface.set_badge(Badge::Ok);
        true
    }

    /// Drive the machine to `Error`.
    ///
    /// Idempotent like [`mark_ok`](Self::mark_ok). Shows the error overlay,
    /// its backdrop, and the retry spinner. Returns whether a transition
    /// fired.
    pub fn mark_error(
        &mut self,
        surface: &mut dyn RenderSurface,
        style: &dyn StyleLookup,
    ) -> bool {
        if self.current == Connectivity::Error {
            return false;
        }
        self.current = Connectivity::Error;

        surface.set_indicator(style.error_symbol(), style.error_color());
        surface.set_container_color(style.error_color());
        surface.set_error_overlay(true);
        surface.set_loading(true);
        surface.set_badge(Badge::Error);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::chart::BarHeights;
    use crate::ui::Theme;

    /// Surface double that counts entry-effect calls.
    #[derive(Default)]
    struct CountingSurface {
        indicator_sets: usize,
        overlay_shown: usize,
        overlay_hidden: usize,
        last_glyph: String,
        loading: bool,
        badge: Option<Badge>,
    }

    impl RenderSurface for CountingSurface {
        fn show_panel(&mut self, _key: &str) {}
        fn hide_panel(&mut self, _key: &str) {}
        fn set_panel_text(&mut self, _key: &str, _text: &str) {}
        fn set_panel_color(&mut self, _key: &str, _color: &str) {}
        fn set_chart_bars(&mut self, _key: &str, _bars: &[BarHeights]) {}

        fn set_indicator(&mut self, glyph: &str, _color: &str) {
            self.indicator_sets += 1;
            self.last_glyph = glyph.to_string();
        }

        fn set_container_color(&mut self, _color: &str) {}

        fn set_error_overlay(&mut self, visible: bool) {
            if visible {
                self.overlay_shown += 1;
            } else {
                self.overlay_hidden += 1;
            }
        }

        fn set_loading(&mut self, visible: bool) {
            self.loading = visible;
        }

        fn loading_visible(&self) -> bool {
            self.loading
        }

        fn set_badge(&mut self, badge: Badge) {
            self.badge = Some(badge);
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = ConnectivityState::new();
        assert_eq!(state.current(), Connectivity::Loading);
    }

    #[test]
    fn test_loading_to_ok_fires_entry_effects() {
        let mut state = ConnectivityState::new();
        let mut surface = CountingSurface::default();
        let theme = Theme::dark();

        assert!(state.mark_ok(&mut surface, &theme));
        assert_eq!(state.current(), Connectivity::Ok);
        assert_eq!(surface.indicator_sets, 1);
        assert_eq!(surface.overlay_hidden, 1);
        assert_eq!(surface.badge, Some(Badge::Ok));
        assert_eq!(surface.last_glyph, theme.ok_symbol());
    }

    #[test]
    fn test_error_then_ok_fires_ok_effects_exactly_once() {
        let mut state = ConnectivityState::new();
        let mut surface = CountingSurface::default();
        let theme = Theme::dark();

        assert!(state.mark_error(&mut surface, &theme));
        assert!(state.mark_ok(&mut surface, &theme));
        // Second consecutive success is a no-op
        assert!(!state.mark_ok(&mut surface, &theme));

        assert_eq!(surface.indicator_sets, 2); // one error entry + one ok entry
        assert_eq!(surface.overlay_hidden, 1);
        assert_eq!(surface.badge, Some(Badge::Ok));
    }

    #[test]
    fn test_repeated_errors_do_not_retrigger_overlay() {
        let mut state = ConnectivityState::new();
        let mut surface = CountingSurface::default();
        let theme = Theme::dark();

        assert!(state.mark_error(&mut surface, &theme));
        assert!(!state.mark_error(&mut surface, &theme));
        assert!(!state.mark_error(&mut surface, &theme));

        assert_eq!(surface.overlay_shown, 1);
        assert_eq!(surface.indicator_sets, 1);
        assert_eq!(surface.last_glyph, theme.error_symbol());
    }

    #[test]
    fn test_error_entry_shows_retry_spinner() {
        let mut state = ConnectivityState::new();
        let mut surface = CountingSurface::default();
        let theme = Theme::dark();

        state.mark_error(&mut surface, &theme);
        assert!(surface.loading_visible());
        assert_eq!(surface.badge, Some(Badge::Error));
    }
}
