//! Edge visibility, spotlight selection and neighbourhoods for the bubble map.

use std::collections::HashSet;

use crate::data::{Dataset, Entity, Link};

use super::filter::FilterKey;

/// Ids admitted by `filter`, in dataset order.
pub fn visible_ids(data: &Dataset, filter: FilterKey) -> Vec<&'static str> {
	data.entities
		.iter()
		.filter(|e| filter.matches(e))
		.map(|e| e.id)
		.collect()
}

/// A drawable link between two visible entities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
	/// Source entity id.
	pub source: &'static str,
	/// Target entity id.
	pub target: &'static str,
	/// Link intensity, `[0, 1]`.
	pub weight: f64,
	/// Touches the active node.
	pub highlighted: bool,
}

/// Links whose endpoints both exist and are visible. Unknown endpoints are
/// dropped without complaint.
pub fn visible_edges(data: &Dataset, visible: &[&'static str], active: Option<&str>) -> Vec<Edge> {
	let visible: HashSet<&str> = visible.iter().copied().collect();
	data.resolved_links()
		.filter(|l| visible.contains(l.source) && visible.contains(l.target))
		.map(|l| Edge {
			source: l.source,
			target: l.target,
			weight: l.weight,
			highlighted: active.is_some_and(|id| l.touches(id)),
		})
		.collect()
}

/// Keep `current` while it is visible, otherwise fall back to the first
/// visible id.
pub fn resolve_active(current: Option<&str>, visible: &[&'static str]) -> Option<&'static str> {
	current
		.and_then(|id| visible.iter().copied().find(|v| *v == id))
		.or_else(|| visible.first().copied())
}

/// Entities linked to `active`, with link weights, in link-table order.
pub fn connected(data: &Dataset, active: &str) -> Vec<(&'static Entity, f64)> {
	data.links
		.iter()
		.filter_map(|l: &'static Link| {
			let other = l.other(active)?;
			data.entity(other).map(|e| (e, l.weight))
		})
		.collect()
}

/// Visible id `step` places away from `current`, wrapping. Starts at the
/// first (or last) visible id when `current` is not visible.
pub fn cycle_focus(current: Option<&str>, visible: &[&'static str], step: isize) -> Option<&'static str> {
	if visible.is_empty() {
		return None;
	}
	let len = visible.len() as isize;
	let pos = current.and_then(|id| visible.iter().position(|v| *v == id));
	let next = match pos {
		Some(p) => (p as isize + step).rem_euclid(len),
		None if step < 0 => len - 1,
		None => 0,
	};
	visible.get(next as usize).copied()
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn data() -> Dataset {
		Dataset::sample()
	}

	#[test]
	fn edges_need_both_endpoints_visible() {
		let data = data();
		let all = visible_ids(&data, FilterKey::All);
		let edges = visible_edges(&data, &all, None);
		let pairs: Vec<_> = edges.iter().map(|e| (e.source, e.target)).collect();
		assert_eq!(
			pairs,
			vec![
				("seed-oils", "ozempic-style"),
				("seed-oils", "vibe-shift"),
				("ai-doom", "anora"),
				("ai-doom", "vibe-shift"),
				("cottagecore", "seed-oils"),
				("anora", "vibe-shift"),
			]
		);

		let surging = visible_ids(&data, FilterKey::Surging);
		let edges = visible_edges(&data, &surging, None);
		for e in &edges {
			assert!(surging.contains(&e.source) && surging.contains(&e.target));
		}
		assert_eq!(edges.len(), 2);
	}

	#[test]
	fn highlight_iff_touching_active() {
		let data = data();
		let all = visible_ids(&data, FilterKey::All);
		let edges = visible_edges(&data, &all, Some("vibe-shift"));
		for e in &edges {
			assert_eq!(e.highlighted, e.source == "vibe-shift" || e.target == "vibe-shift");
		}
		assert_eq!(edges.iter().filter(|e| e.highlighted).count(), 3);
		assert!(visible_edges(&data, &all, None).iter().all(|e| !e.highlighted));
	}

	#[test]
	fn active_falls_back_to_first_visible() {
		let data = data();
		let cooling = visible_ids(&data, FilterKey::Cooling);
		assert_eq!(resolve_active(Some("ai-doom"), &cooling), Some("cottagecore"));
		let steady = visible_ids(&data, FilterKey::Steady);
		assert_eq!(resolve_active(Some("ozempic-style"), &steady), Some("ozempic-style"));
		assert_eq!(resolve_active(None, &steady), Some("ai-doom"));
		assert_eq!(resolve_active(Some("ai-doom"), &[]), None);
	}

	#[test]
	fn connected_skips_unknown_endpoints() {
		let data = data();
		let names: Vec<_> = connected(&data, "seed-oils")
			.into_iter()
			.map(|(e, w)| (e.id, w))
			.collect();
		assert_eq!(
			names,
			vec![("ozempic-style", 0.72), ("vibe-shift", 0.41), ("cottagecore", 0.35)]
		);
		assert!(connected(&data, "civic-ai").iter().all(|(e, _)| e.id != "civic-ai"));
	}

	#[test]
	fn focus_cycles_and_wraps() {
		let ids = ["a", "b", "c"];
		assert_eq!(cycle_focus(Some("c"), &ids, 1), Some("a"));
		assert_eq!(cycle_focus(Some("a"), &ids, -1), Some("c"));
		assert_eq!(cycle_focus(None, &ids, 1), Some("a"));
		assert_eq!(cycle_focus(Some("zzz"), &ids, -1), Some("c"));
		assert_eq!(cycle_focus(Some("a"), &[], 1), None);
	}
}
