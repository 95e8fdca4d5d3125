//! Event-driven view state for the bubble map and the lens.
//!
//! Components own one of these inside a signal, dispatch events into
//! `apply`, and read everything else back out of derived snapshots.

use log::debug;

use crate::data::{Dataset, Entity};

use super::filter::{FilterKey, Query, lens_results};
use super::graph::{Edge, cycle_focus, resolve_active, visible_edges, visible_ids};
use super::layout::Viewport;
use super::stats::{VisibleStats, visible_stats};

/// Input to [`GraphView::apply`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GraphEvent {
	/// The container was measured.
	Resize(Viewport),
	/// A filter chip was chosen.
	SetFilter(FilterKey),
	/// Pointer entered or keyboard focused a node.
	Hover(&'static str),
	/// Move focus to the next visible node.
	FocusNext,
	/// Move focus to the previous visible node.
	FocusPrev,
}

/// Bubble map state.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphView {
	/// Current canvas size.
	pub viewport: Viewport,
	/// Active filter.
	pub filter: FilterKey,
	/// Last node the user pointed at; may be filtered out.
	active: Option<&'static str>,
}

/// Everything the bubble map draws, derived from a [`GraphView`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphSnapshot {
	/// Ids passing the filter, in dataset order.
	pub visible: Vec<&'static str>,
	/// Spotlighted node, always visible when set.
	pub active: Option<&'static str>,
	/// Edges between visible nodes.
	pub edges: Vec<Edge>,
	/// Aggregates over the visible nodes.
	pub stats: VisibleStats,
}

impl GraphSnapshot {
	/// Whether `id` passes the current filter.
	pub fn is_visible(&self, id: &str) -> bool {
		self.visible.iter().any(|v| *v == id)
	}
}

impl GraphView {
	/// Start on the default viewport with the first entity spotlighted.
	pub fn new(data: &Dataset) -> Self {
		Self {
			viewport: Viewport::default(),
			filter: FilterKey::All,
			active: data.entities.first().map(|e| e.id),
		}
	}

	/// Fold one event into the state.
	pub fn apply(&mut self, data: &Dataset, event: GraphEvent) {
		match event {
			GraphEvent::Resize(viewport) => self.viewport = viewport,
			GraphEvent::SetFilter(filter) => {
				debug!("bubble map filter: {filter}");
				self.filter = filter;
			}
			GraphEvent::Hover(id) => {
				// Dimmed nodes do not take the spotlight.
				if data.entity(id).is_some_and(|e| self.filter.matches(e)) {
					self.active = Some(id);
				}
			}
			GraphEvent::FocusNext => self.cycle(data, 1),
			GraphEvent::FocusPrev => self.cycle(data, -1),
		}
	}

	fn cycle(&mut self, data: &Dataset, step: isize) {
		let visible = visible_ids(data, self.filter);
		let current = resolve_active(self.active, &visible);
		self.active = cycle_focus(current, &visible, step);
	}

	/// Visible set, resolved spotlight, edges and stats.
	pub fn snapshot(&self, data: &Dataset) -> GraphSnapshot {
		let visible = visible_ids(data, self.filter);
		let active = resolve_active(self.active, &visible);
		let edges = visible_edges(data, &visible, active);
		let stats = visible_stats(visible.iter().filter_map(|id| data.entity(id)));
		GraphSnapshot {
			visible,
			active,
			edges,
			stats,
		}
	}
}

/// Lens starter queries.
pub const STARTER_QUERIES: [&str; 4] = [
	"seed oils vs mediterranean",
	"anora film discourse",
	"ai doom acceleration",
	"ozempic style memo",
];

/// Input to [`LensView::apply`].
#[derive(Clone, Debug, PartialEq)]
pub enum LensEvent {
	/// The search input changed.
	SetQuery(String),
	/// A quick filter was chosen.
	SetFilter(FilterKey),
	/// Pointer or focus moved onto result `n`.
	HoverIndex(usize),
	/// Arrow down.
	MoveDown,
	/// Arrow up.
	MoveUp,
	/// Open the focused result.
	Submit,
	/// Open a specific entity.
	Select(&'static str),
	/// Dismiss the drawer, keeping the selection.
	CloseDrawer,
}

/// Search lens state.
#[derive(Clone, Debug, PartialEq)]
pub struct LensView {
	/// Raw search text.
	pub query: String,
	/// Active quick filter.
	pub filter: FilterKey,
	focused: usize,
	selected: Option<&'static str>,
	drawer_open: bool,
}

impl LensView {
	/// Empty query, no filter, first entity selected, drawer closed.
	pub fn new(data: &Dataset) -> Self {
		Self {
			query: String::new(),
			filter: FilterKey::All,
			focused: 0,
			selected: data.entities.first().map(|e| e.id),
			drawer_open: false,
		}
	}

	/// Filtered, searched and ranked results.
	pub fn results(&self, data: &Dataset) -> Vec<&'static Entity> {
		lens_results(data.entities, self.filter, &Query::parse(&self.query))
	}

	/// Focus clamped into a result list of length `len`.
	pub fn active_index(&self, len: usize) -> Option<usize> {
		(len > 0).then(|| self.focused.min(len - 1))
	}

	/// Result `index` with entity `id` is drawn focused when it holds the
	/// keyboard or pointer focus, or is the current selection.
	pub fn is_highlighted(&self, len: usize, index: usize, id: &str) -> bool {
		self.active_index(len) == Some(index) || self.selected == Some(id)
	}

	/// The selected entity.
	pub fn selected(&self, data: &Dataset) -> Option<&'static Entity> {
		self.selected.and_then(|id| data.entity(id))
	}

	/// Whether the drawer is showing.
	pub fn drawer_open(&self) -> bool {
		self.drawer_open
	}

	/// Fold one event into the state.
	pub fn apply(&mut self, data: &Dataset, event: LensEvent) {
		match event {
			LensEvent::SetQuery(query) => self.query = query,
			LensEvent::SetFilter(filter) => {
				debug!("lens filter: {filter}");
				self.filter = filter;
			}
			LensEvent::HoverIndex(index) => self.focused = index,
			LensEvent::MoveDown => self.step(data, true),
			LensEvent::MoveUp => self.step(data, false),
			LensEvent::Submit => {
				let results = self.results(data);
				if let Some(entity) = self.active_index(results.len()).map(|i| results[i]) {
					self.open(entity.id);
				}
			}
			LensEvent::Select(id) => self.open(id),
			LensEvent::CloseDrawer => self.drawer_open = false,
		}
	}

	fn step(&mut self, data: &Dataset, down: bool) {
		let len = self.results(data).len();
		let Some(current) = self.active_index(len) else {
			return;
		};
		self.focused = if down {
			(current + 1).min(len - 1)
		} else {
			current.saturating_sub(1)
		};
	}

	fn open(&mut self, id: &'static str) {
		debug!("lens open: {id}");
		self.selected = Some(id);
		self.drawer_open = true;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn graph_starts_on_first_entity() {
		let data = Dataset::sample();
		let view = GraphView::new(&data);
		let snap = view.snapshot(&data);
		assert_eq!(snap.active, Some("seed-oils"));
		assert_eq!(snap.visible.len(), 6);
		assert_eq!(snap.stats.count, 6);
	}

	#[test]
	fn hover_on_hidden_node_is_ignored() {
		let data = Dataset::sample();
		let mut view = GraphView::new(&data);
		view.apply(&data, GraphEvent::SetFilter(FilterKey::Surging));
		view.apply(&data, GraphEvent::Hover("anora"));
		view.apply(&data, GraphEvent::Hover("ai-doom"));
		assert_eq!(view.snapshot(&data).active, Some("anora"));
	}

	#[test]
	fn filtering_out_active_falls_back() {
		let data = Dataset::sample();
		let mut view = GraphView::new(&data);
		view.apply(&data, GraphEvent::Hover("ai-doom"));
		view.apply(&data, GraphEvent::SetFilter(FilterKey::Cooling));
		let snap = view.snapshot(&data);
		assert_eq!(snap.active, Some("cottagecore"));
		assert!(snap.edges.is_empty());
		assert_eq!(snap.stats.count, 1);
	}

	#[test]
	fn empty_filter_has_no_spotlight() {
		static NONE: [Entity; 0] = [];
		let data = Dataset {
			entities: &NONE,
			links: &[],
		};
		let mut view = GraphView::new(&data);
		view.apply(&data, GraphEvent::FocusNext);
		let snap = view.snapshot(&data);
		assert_eq!(snap, GraphSnapshot::default());
	}

	#[test]
	fn keyboard_focus_walks_visible_nodes() {
		let data = Dataset::sample();
		let mut view = GraphView::new(&data);
		view.apply(&data, GraphEvent::SetFilter(FilterKey::Steady));
		view.apply(&data, GraphEvent::FocusNext);
		assert_eq!(view.snapshot(&data).active, Some("ozempic-style"));
		view.apply(&data, GraphEvent::FocusNext);
		assert_eq!(view.snapshot(&data).active, Some("ai-doom"));
		view.apply(&data, GraphEvent::FocusPrev);
		assert_eq!(view.snapshot(&data).active, Some("ozempic-style"));
	}

	#[test]
	fn resize_keeps_spotlight() {
		let data = Dataset::sample();
		let mut view = GraphView::new(&data);
		view.apply(&data, GraphEvent::Hover("anora"));
		view.apply(&data, GraphEvent::Resize(Viewport::from_container_width(640.0)));
		assert_eq!(view.viewport.height, 420.0);
		assert_eq!(view.snapshot(&data).active, Some("anora"));
	}

	#[test]
	fn lens_starts_with_first_entity_selected() {
		let data = Dataset::sample();
		let lens = LensView::new(&data);
		assert_eq!(lens.selected(&data).map(|e| e.id), Some("seed-oils"));
		assert!(!lens.drawer_open());
		assert_eq!(lens.results(&data).len(), 6);
	}

	#[test]
	fn lens_navigation_clamps() {
		let data = Dataset::sample();
		let mut lens = LensView::new(&data);
		lens.apply(&data, LensEvent::SetFilter(FilterKey::Steady));
		for _ in 0..5 {
			lens.apply(&data, LensEvent::MoveDown);
		}
		assert_eq!(lens.active_index(lens.results(&data).len()), Some(1));
		lens.apply(&data, LensEvent::MoveUp);
		lens.apply(&data, LensEvent::MoveUp);
		assert_eq!(lens.active_index(2), Some(0));
	}

	#[test]
	fn lens_focus_clamps_after_query_narrows() {
		let data = Dataset::sample();
		let mut lens = LensView::new(&data);
		lens.apply(&data, LensEvent::HoverIndex(4));
		lens.apply(&data, LensEvent::SetQuery("ai doom".into()));
		assert_eq!(lens.active_index(lens.results(&data).len()), Some(0));
		lens.apply(&data, LensEvent::Submit);
		assert_eq!(lens.selected(&data).map(|e| e.id), Some("ai-doom"));
		assert!(lens.drawer_open());
		lens.apply(&data, LensEvent::CloseDrawer);
		assert!(!lens.drawer_open());
		assert_eq!(lens.selected(&data).map(|e| e.id), Some("ai-doom"));
	}

	#[test]
	fn lens_keys_do_nothing_without_results() {
		let data = Dataset::sample();
		let mut lens = LensView::new(&data);
		lens.apply(&data, LensEvent::SetQuery("zeppelin".into()));
		let before = lens.clone();
		lens.apply(&data, LensEvent::MoveDown);
		lens.apply(&data, LensEvent::Submit);
		assert_eq!(lens, before);
		assert_eq!(lens.active_index(0), None);
	}

	#[test]
	fn lens_results_are_ranked() {
		let data = Dataset::sample();
		let mut lens = LensView::new(&data);
		lens.apply(&data, LensEvent::SetFilter(FilterKey::Surging));
		let ids: Vec<_> = lens.results(&data).iter().map(|e| e.id).collect();
		assert_eq!(ids, vec!["seed-oils", "anora", "vibe-shift"]);
	}

	#[test]
	fn lens_highlights_focus_and_selection() {
		let data = Dataset::sample();
		let mut lens = LensView::new(&data);
		lens.apply(&data, LensEvent::MoveDown);
		lens.apply(&data, LensEvent::MoveDown);
		assert!(lens.is_highlighted(6, 2, "anora"));
		assert!(lens.is_highlighted(6, 0, "seed-oils"));
		assert!(!lens.is_highlighted(6, 1, "ai-doom"));

		lens.apply(&data, LensEvent::Select("ozempic-style"));
		assert!(lens.is_highlighted(6, 3, "ozempic-style"));
		assert!(!lens.is_highlighted(6, 0, "seed-oils"));
	}
}
