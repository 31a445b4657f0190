//! Presentation capabilities consumed by the core.
//!
//! The reconcile loop and the connectivity machine never touch the terminal
//! directly. They emit visual instructions through [`RenderSurface`] and
//! resolve themable constants through [`StyleLookup`]; the shipped
//! implementations live in [`crate::ui`].

use crate::data::chart::BarHeights;

/// Window-level status marker, the terminal analog of a favicon swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Error,
}

/// Applies computed visual attributes, addressed by metric key.
///
/// Implementations are plain state stores: the draw pass reads whatever the
/// core last wrote. Nothing here blocks or fails.
pub trait RenderSurface {
    /// Make the panel for `key` visible.
    fn show_panel(&mut self, key: &str);

    /// Hide the panel for `key`, keeping its last text and chart.
    fn hide_panel(&mut self, key: &str);

    /// Set the panel's status text.
    fn set_panel_text(&mut self, key: &str, text: &str);

    /// Set the panel's background color token.
    fn set_panel_color(&mut self, key: &str, color: &str);

    /// Replace the panel's chart bars, one pair per slot in display order.
    fn set_chart_bars(&mut self, key: &str, bars: &[BarHeights]);

    /// Set the connectivity indicator glyph and its color token.
    fn set_indicator(&mut self, glyph: &str, color: &str);

    /// Set the color token for the indicator's containing header.
    fn set_container_color(&mut self, color: &str);

    /// Show or hide the error overlay and its backdrop.
    fn set_error_overlay(&mut self, visible: bool);

    /// Show or hide the loading/retry indicator.
    fn set_loading(&mut self, visible: bool);

    /// Whether the loading indicator is currently showing.
    fn loading_visible(&self) -> bool;

    /// Swap the window badge.
    fn set_badge(&mut self, badge: Badge);
}

/// Resolves themable constants from the page's style source.
///
/// Color tokens are strings in the same space the backend palette uses
/// (`#RRGGBB`); symbols are display glyphs.
pub trait StyleLookup {
    fn text_color(&self) -> &str;
    fn ok_color(&self) -> &str;
    fn ok_symbol(&self) -> &str;
    fn error_color(&self) -> &str;
    fn error_symbol(&self) -> &str;
    fn chart_background(&self) -> &str;

    /// Bars per chart; fixes the capacity of every chart at construction.
    fn chart_capacity(&self) -> usize;
}
