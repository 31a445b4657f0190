//! Core dashboard state: chart buffers, panel registry, connectivity.
//!
//! ## Data flow
//!
//! ```text
//! StatsResponse (wire)
//!        │
//!        ▼
//! MetricPanelRegistry::reconcile()
//!        │
//!        ├──▶ RollingChart::push() + heights()   (per charted key)
//!        │
//!        └──▶ RenderSurface instructions (show/hide, text, color, bars)
//!
//! any_live ──▶ ConnectivityState::mark_ok() / poll failure ──▶ mark_error()
//! ```

pub mod chart;
pub mod connectivity;
pub mod registry;

pub use chart::{BarHeights, RollingChart};
pub use connectivity::{Connectivity, ConnectivityState};
pub use registry::{MetricDisplayState, MetricPanelRegistry};
