//! Key-addressed render surface backing the TUI.
//!
//! [`PanelStore`] is the shipped [`RenderSurface`]: a plain state store the
//! core writes visual instructions into and the draw pass reads from. Panels
//! are addressed by metric key, obtained on demand; the draw pass never
//! looks anything up by layout position.

use std::collections::BTreeMap;

use crate::data::chart::BarHeights;
use crate::render::{Badge, RenderSurface};

/// Visual state of one metric panel.
#[derive(Debug, Clone, Default)]
pub struct PanelView {
    pub visible: bool,
    pub text: String,
    pub color: String,
    pub bars: Vec<BarHeights>,
}

/// The whole visible state of the dashboard, as last written by the core.
#[derive(Debug)]
pub struct PanelStore {
    panels: BTreeMap<String, PanelView>,
    pub indicator_glyph: String,
    pub indicator_color: String,
    pub container_color: String,
    pub error_overlay: bool,
    pub loading: bool,
    pub badge: Option<Badge>,
}

impl PanelStore {
    /// A fresh store in the pre-first-poll posture: loading indicator on,
    /// neutral glyph, no badge yet.
    pub fn new() -> Self {
        Self {
            panels: BTreeMap::new(),
            indicator_glyph: "·".to_string(),
            indicator_color: String::new(),
            container_color: String::new(),
            error_overlay: false,
            loading: true,
            badge: None,
        }
    }

    /// The panel for a key, if the core ever addressed it.
    pub fn panel(&self, key: &str) -> Option<&PanelView> {
        self.panels.get(key)
    }

    /// Keys of currently visible panels, in stable (sorted) order.
    pub fn visible_keys(&self) -> Vec<&str> {
        self.panels
            .iter()
            .filter(|(_, p)| p.visible)
            .map(|(k, _)| k.as_str())
            .collect()
    }

    fn entry(&mut self, key: &str) -> &mut PanelView {
        self.panels.entry(key.to_string()).or_default()
    }
}

impl Default for PanelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for PanelStore {
    fn show_panel(&mut self, key: &str) {
        self.entry(key).visible = true;
    }

    fn hide_panel(&mut self, key: &str) {
        self.entry(key).visible = false;
    }

    fn set_panel_text(&mut self, key: &str, text: &str) {
        self.entry(key).text = text.to_string();
    }

    fn set_panel_color(&mut self, key: &str, color: &str) {
        self.entry(key).color = color.to_string();
    }

    fn set_chart_bars(&mut self, key: &str, bars: &[BarHeights]) {
        self.entry(key).bars = bars.to_vec();
    }

    fn set_indicator(&mut self, glyph: &str, color: &str) {
        self.indicator_glyph = glyph.to_string();
        self.indicator_color = color.to_string();
    }

    fn set_container_color(&mut self, color: &str) {
        self.container_color = color.to_string();
    }

    fn set_error_overlay(&mut self, visible: bool) {
        self.error_overlay = visible;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_starts_in_loading_posture() {
        let store = PanelStore::new();
        assert!(store.loading_visible());
        assert!(!store.error_overlay);
        assert!(store.badge.is_none());
        assert!(store.visible_keys().is_empty());
    }

    #[test]
    fn test_panels_are_created_on_first_address() {
        let mut store = PanelStore::new();
        assert!(store.panel("cpu").is_none());

        store.set_panel_text("cpu", "12%");
        store.show_panel("cpu");

        let panel = store.panel("cpu").unwrap();
        assert!(panel.visible);
        assert_eq!(panel.text, "12%");
    }

    #[test]
    fn test_hide_keeps_text_and_bars() {
        let mut store = PanelStore::new();
        store.set_panel_text("ram", "40%");
        store.set_chart_bars(
            "ram",
            &[BarHeights {
                value_pct: 40.0,
                filler_pct: 60.0,
            }],
        );
        store.show_panel("ram");
        store.hide_panel("ram");

        let panel = store.panel("ram").unwrap();
        assert!(!panel.visible);
        assert_eq!(panel.text, "40%");
        assert_eq!(panel.bars.len(), 1);
        assert!(store.visible_keys().is_empty());
    }

    #[test]
    fn test_visible_keys_sorted() {
        let mut store = PanelStore::new();
        store.show_panel("ram");
        store.show_panel("cpu");
        store.show_panel("load");
        store.hide_panel("load");

        assert_eq!(store.visible_keys(), vec!["cpu", "ram"]);
    }
}
