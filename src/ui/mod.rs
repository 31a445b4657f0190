//! Terminal rendering using ratatui.
//!
//! The draw pass is a pure function of the panel store and app state:
//! [`common`] renders the header/status chrome and overlays, [`panels`] the
//! metric grid, [`detail`] the expanded-panel modal. [`surface`] holds the
//! shipped [`RenderSurface`](crate::render::RenderSurface) implementation
//! and [`theme`] the shipped [`StyleLookup`](crate::render::StyleLookup).

pub mod common;
pub mod detail;
pub mod panels;
pub mod surface;
pub mod theme;

pub use theme::Theme;
