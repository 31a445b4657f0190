//! Per-metric panel state and the reconcile step.
//!
//! One registry holds every metric key ever observed: its rolling chart
//! (created lazily, scale fixed for the session) and its last-known display
//! state. Each successful poll tick is merged here in full before the next
//! draw reads the surface.

use std::collections::BTreeMap;

use crate::data::chart::RollingChart;
use crate::poll::payload::StatsResponse;
use crate::render::{RenderSurface, StyleLookup};

/// Last-known display state for one metric key.
#[derive(Debug, Clone, Default)]
pub struct MetricDisplayState {
    pub visible: bool,
    pub text: String,
    pub color: String,
}

/// Mapping from metric key to its chart and display state.
#[derive(Debug, Default)]
pub struct MetricPanelRegistry {
    charts: BTreeMap<String, RollingChart>,
    states: BTreeMap<String, MetricDisplayState>,
}

impl MetricPanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one stats response into the registry and emit per-panel visual
    /// instructions.
    ///
    /// Keys with a value are shown and pushed into their chart; keys with a
    /// null value are hidden without touching their chart history; keys
    /// absent from the response are left alone entirely.
    ///
    /// Returns whether at least one key carried a non-null value, which the
    /// poll loop uses to drive the connectivity machine and dismiss the
    /// loading indicator.
    pub fn reconcile(
        &mut self,
        response: &StatsResponse,
        surface: &mut dyn RenderSurface,
        style: &dyn StyleLookup,
    ) -> bool {
        let mut any_live = false;

        for (key, reading) in response {
            let Some(value) = reading.value else {
                // Null value: hide the panel, keep the chart so history
                // survives until the metric reappears.
                self.states.entry(key.clone()).or_default().visible = false;
                surface.hide_panel(key);
                continue;
            };

            any_live = true;

            // First sight of this key: create its chart from the declared
            // max. The scale is read only here; later max changes are
            // ignored. A missing or non-positive max means text-only.
            if !self.charts.contains_key(key) {
                if let Some(max) = reading.max.filter(|m| *m > 0.0) {
                    self.charts
                        .insert(key.clone(), RollingChart::new(style.chart_capacity(), max));
                }
            }

            if let Some(chart) = self.charts.get_mut(key) {
                chart.push(value);
                surface.set_chart_bars(key, &chart.heights());
            }

            let text = reading.text.clone().unwrap_or_else(|| "-".to_string());
            let state = self.states.entry(key.clone()).or_default();
            state.visible = true;
            state.text = text.clone();
            state.color = reading.color.clone();

            surface.set_panel_text(key, &text);
            surface.set_panel_color(key, &reading.color);
            surface.show_panel(key);
        }

        any_live
    }

    /// The chart for a metric key, if one has been created.
    pub fn chart(&self, key: &str) -> Option<&RollingChart> {
        self.charts.get(key)
    }

    /// The last-known display state for a metric key.
    pub fn display(&self, key: &str) -> Option<&MetricDisplayState> {
        self.states.get(key)
    }
}
