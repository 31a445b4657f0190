// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # perfwatch
//!
//! A terminal dashboard and library for watching live system performance
//! metrics served over HTTP.
//!
//! The dashboard polls a metrics backend on a fixed cadence, keeps a rolling
//! window of samples per metric, and renders each metric as a labelled panel
//! with a bar chart. Backend reachability is reflected by a visible
//! indicator and an error overlay that clears itself on the next good tick.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                         Application                            │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌──────────┐   │
//! │  │  poll   │───▶│   data   │───▶│ render  │───▶│    ui    │   │
//! │  │ (fetch) │    │(reconcile)    │(surface)│    │(ratatui) │   │
//! │  └─────────┘    └──────────┘    └─────────┘    └──────────┘   │
//! │       │               │                                        │
//! │       ▼               ▼                                        │
//! │  PollEvent mpsc   ConnectivityState                            │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`poll`]**: HTTP client and the polling cycle - a background task
//!   fires the periodic requests and delivers discriminated results over a
//!   channel
//! - **[`data`]**: rolling chart buffers, the per-metric panel registry,
//!   and the connectivity state machine
//! - **[`render`]**: the capability traits the core emits through -
//!   [`RenderSurface`] for visual instructions, [`StyleLookup`] for theme
//!   tokens
//! - **[`ui`]**: terminal rendering with ratatui, plus the shipped
//!   implementations of both capabilities
//! - **[`app`]**: the context object tying it all together
//!
//! ## Rolling charts
//!
//! ```
//! use perfwatch::data::RollingChart;
//!
//! let mut chart = RollingChart::new(20, 100.0);
//! chart.push(42.0);
//!
//! let heights = chart.heights();
//! assert_eq!(heights[0].value_pct, 42.0);
//! assert_eq!(heights[0].filler_pct, 58.0);
//! ```
//!
//! ## Driving the core without a terminal
//!
//! The reconcile loop only needs the two capabilities, so any state store
//! works as a surface:
//!
//! ```
//! use perfwatch::app::App;
//! use perfwatch::poll::{MetricReading, PollEvent, StatsResponse};
//! use perfwatch::ui::Theme;
//!
//! let mut app = App::new(Theme::dark());
//!
//! let mut stats = StatsResponse::new();
//! stats.insert(
//!     "cpu".to_string(),
//!     MetricReading {
//!         value: Some(12.5),
//!         text: Some("12.5%".to_string()),
//!         color: "#4CAF50".to_string(),
//!         max: Some(100.0),
//!     },
//! );
//! app.apply_event(PollEvent::Stats(Ok(stats)));
//!
//! assert!(app.surface.panel("cpu").unwrap().visible);
//! ```
//!
//! ## Running the poll cycle
//!
//! ```no_run
//! use perfwatch::poll::{PollCycle, Schedule, StatsClient};
//!
//! # tokio_test::block_on(async {
//! let client = StatsClient::builder()
//!     .base_url("http://raspberrypi:5000")
//!     .build()
//!     .unwrap();
//! let mut cycle = PollCycle::spawn(client, Schedule::default());
//!
//! while let Some(_event) = cycle.try_next() {
//!     // feed into App::apply_event
//! }
//! # });
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod poll;
pub mod render;
pub mod settings;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use data::{BarHeights, Connectivity, ConnectivityState, MetricPanelRegistry, RollingChart};
pub use poll::{FetchError, PollCycle, PollEvent, Schedule, StatsClient};
pub use render::{Badge, RenderSurface, StyleLookup};
pub use settings::Settings;
pub use ui::Theme;
