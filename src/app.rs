//! Application state and poll-outcome handling.

use std::collections::BTreeMap;
use std::time::Instant;

use crate::data::connectivity::{Connectivity, ConnectivityState};
use crate::data::registry::MetricPanelRegistry;
use crate::poll::{FetchError, NetworkResponse, PollEvent, StatsResponse};
use crate::render::RenderSurface;
use crate::ui::surface::PanelStore;
use crate::ui::Theme;

/// Main application state.
///
/// This is the explicit context object for the whole dashboard: the panel
/// registry, the connectivity machine, the render surface the draw pass
/// reads, and the interactive UI state all live here. There are no ambient
/// globals; the run loop owns one `App` and feeds it poll outcomes.
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub show_detail_overlay: bool,

    registry: MetricPanelRegistry,
    connectivity: ConnectivityState,
    pub surface: PanelStore,
    pub theme: Theme,

    /// Network-info passthrough: key to display string, no charts.
    pub network: BTreeMap<String, String>,

    /// Selected panel position within the visible set.
    pub selected_index: usize,

    pub last_updated: Option<Instant>,
    pub last_failure: Option<String>,
}

impl App {
    /// Create a new App with the given theme.
    pub fn new(theme: Theme) -> Self {
        Self {
            running: true,
            show_help: false,
            show_detail_overlay: false,
            registry: MetricPanelRegistry::new(),
            connectivity: ConnectivityState::new(),
            surface: PanelStore::new(),
            theme,
            network: BTreeMap::new(),
            selected_index: 0,
            last_updated: None,
            last_failure: None,
        }
    }

    /// Apply one poll outcome.
    ///
    /// This is the single consumption point for both request streams; each
    /// event is applied in full before the next draw reads the surface.
    pub fn apply_event(&mut self, event: PollEvent) {
        match event {
            PollEvent::Stats(result) => self.apply_stats(result),
            PollEvent::Network(result) => self.apply_network(result),
        }
    }

    fn apply_stats(&mut self, result: Result<StatsResponse, FetchError>) {
        match result {
            Ok(stats) => {
                let any_live =
                    self.registry
                        .reconcile(&stats, &mut self.surface, &self.theme);
                if any_live {
                    self.connectivity.mark_ok(&mut self.surface, &self.theme);
                    if self.surface.loading_visible() {
                        self.surface.set_loading(false);
                    }
                    self.last_updated = Some(Instant::now());
                    self.last_failure = None;
                }
                self.clamp_selection();
            }
            Err(err) => {
                // The registry keeps its stale values on screen; only the
                // connectivity surface changes.
                self.last_failure = Some(err.to_string());
                self.connectivity.mark_error(&mut self.surface, &self.theme);
            }
        }
    }

    fn apply_network(&mut self, result: Result<NetworkResponse, FetchError>) {
        match result {
            Ok(network) => {
                for (key, text) in network {
                    self.network.insert(key, text);
                }
            }
            // A failed network-info fetch never drives the connectivity
            // machine; the message only lands in the status bar.
            Err(err) => {
                self.last_failure.get_or_insert(err.to_string());
            }
        }
    }

    /// Current connectivity state value.
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity.current()
    }

    /// The registry, for read access from the draw pass and tests.
    pub fn registry(&self) -> &MetricPanelRegistry {
        &self.registry
    }

    /// Key of the currently selected visible panel.
    pub fn selected_key(&self) -> Option<String> {
        self.surface
            .visible_keys()
            .get(self.selected_index)
            .map(|k| k.to_string())
    }

    /// Move selection down by one panel.
    pub fn select_next(&mut self) {
        let count = self.surface.visible_keys().len();
        if count > 0 {
            self.selected_index = (self.selected_index + 1).min(count - 1);
        }
    }

    /// Move selection up by one panel.
    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let count = self.surface.visible_keys().len();
        if self.selected_index >= count {
            self.selected_index = count.saturating_sub(1);
        }
    }

    /// Expand the selected panel into the detail overlay.
    pub fn enter_detail(&mut self) {
        if self.selected_key().is_some() {
            self.show_detail_overlay = true;
        }
    }

    /// Close the detail overlay if open.
    pub fn close_overlay(&mut self) {
        self.show_detail_overlay = false;
    }

    /// Dismiss the error overlay without waiting for the next OK tick.
    ///
    /// The indicator and badge are left alone; they only change on state
    /// transitions.
    pub fn dismiss_error_overlay(&mut self) {
        self.surface.set_error_overlay(false);
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
