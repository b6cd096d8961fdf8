//! ecoinsight
//!
//! A lightweight Rust library for computing, rendering, and exporting the
//! EcoInsight sustainability dashboard. Pairs with the `ecoinsight` CLI.
//!
//! ### Features
//! - Pure chart layout engine: axis ticks, grouped/toggle bars, line series,
//!   donut gradient stops — shape descriptors with no rendering dependency
//! - Explicit in-memory data store with defined mutation methods
//! - SVG/HTML rendering of every dashboard page from the store snapshot
//! - Recent-activity CSV export
//!
//! ### Example
//! ```no_run
//! use ecoinsight::models::Page;
//! use ecoinsight::store::DashboardStore;
//!
//! let store = DashboardStore::sample();
//! let fragments = ecoinsight::render::render_page(Page::Dashboard, &store, Some(640.0), "en")?;
//! for f in &fragments {
//!     println!("{}: {} bytes", f.file_name, f.markup.len());
//! }
//! ecoinsight::report::save_activity_csv(&store.recent_activity, "recent_activity_report.csv")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod forms;
pub mod geometry;
pub mod models;
pub mod render;
pub mod report;
pub mod store;

pub use geometry::{GeometryError, Surface, TickRounding};
pub use models::{CategoryAxis, ChartData, DonutSegment, Page, Series};
pub use store::DashboardStore;
