//! Pure derivations behind the views: filtering, search, layout and stats.
//!
//! Nothing in here touches the DOM, so it runs (and is tested) natively.

pub mod filter;
pub mod graph;
pub mod layout;
pub mod sparkline;
pub mod stats;
pub mod view;

pub use filter::{CONTROVERSY_THRESHOLD, FilterKey, Query};
pub use graph::Edge;
pub use layout::{LayoutConfig, LayoutNode, Viewport, compute_layout};
pub use sparkline::Sparkline;
pub use stats::{LegendEntry, VisibleStats};
pub use view::{GraphEvent, GraphSnapshot, GraphView, LensEvent, LensView};
