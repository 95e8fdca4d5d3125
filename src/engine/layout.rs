//! Deterministic ring layout for the bubble map.
//!
//! Positions depend only on the entity order and the viewport; filtering
//! never moves a node.

use std::f64::consts::PI;

use crate::data::Entity;

/// Canvas size the layout is computed for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	/// Pixels.
	pub width: f64,
	/// Pixels.
	pub height: f64,
}

impl Default for Viewport {
	fn default() -> Self {
		Self {
			width: 900.0,
			height: 520.0,
		}
	}
}

impl Viewport {
	/// Smallest height the map is given when sized from its container.
	pub const MIN_HEIGHT: f64 = 420.0;

	/// Size the map from a container width, keeping a 5:3 aspect.
	pub fn from_container_width(width: f64) -> Self {
		Self {
			width,
			height: Self::MIN_HEIGHT.max(width * 0.6),
		}
	}

	/// Midpoint of the viewport.
	pub fn center(&self) -> (f64, f64) {
		(self.width / 2.0, self.height / 2.0)
	}
}

/// Tunables for [`compute_layout`].
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
	/// Ring radii as fractions of the outer radius.
	pub rings: Vec<f64>,
	/// Outer radius as a fraction of the smaller viewport side.
	pub max_radius_factor: f64,
	/// Node radius at zero attention.
	pub base_node_radius: f64,
	/// Extra node radius at full attention.
	pub attention_scale: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			rings: vec![0.0, 0.55, 1.0],
			max_radius_factor: 0.42,
			base_node_radius: 30.0,
			attention_scale: 55.0,
		}
	}
}

impl LayoutConfig {
	/// Pixel radius for an attention value.
	pub fn node_radius(&self, attention: f64) -> f64 {
		self.base_node_radius + attention * self.attention_scale
	}

	/// Outer ring radius for a viewport.
	pub fn max_radius(&self, viewport: Viewport) -> f64 {
		viewport.width.min(viewport.height) * self.max_radius_factor
	}
}

/// A positioned entity.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutNode {
	/// Entity id.
	pub id: &'static str,
	/// Index in the full dataset.
	pub index: usize,
	/// Ring the node sits on, innermost first.
	pub ring: usize,
	/// Polar angle in radians.
	pub angle: f64,
	/// Centre, canvas pixels.
	pub x: f64,
	/// Centre, canvas pixels.
	pub y: f64,
	/// Bubble radius in pixels.
	pub radius: f64,
}

impl LayoutNode {
	/// Whether a canvas point falls inside the bubble.
	pub fn contains(&self, x: f64, y: f64) -> bool {
		let (dx, dy) = (self.x - x, self.y - y);
		(dx * dx + dy * dy).sqrt() <= self.radius
	}
}

/// Angle for slot `index` of `total`, in `[0, 2π)`.
pub fn angle_for(index: usize, total: usize) -> f64 {
	if total == 0 {
		return 0.0;
	}
	(index as f64 / total as f64) * 2.0 * PI
}

/// Place every entity on a ring. Entity `i` goes to ring `i % rings.len()` at
/// angle [`angle_for`]`(i, n)`.
pub fn compute_layout(
	entities: &'static [Entity],
	viewport: Viewport,
	config: &LayoutConfig,
) -> Vec<LayoutNode> {
	let (cx, cy) = viewport.center();
	let max_radius = config.max_radius(viewport);
	let ring_count = config.rings.len().max(1);
	let total = entities.len();

	entities
		.iter()
		.enumerate()
		.map(|(index, entity)| {
			let ring = index % ring_count;
			let distance = config.rings.get(ring).copied().unwrap_or(0.0) * max_radius;
			let angle = angle_for(index, total);
			LayoutNode {
				id: entity.id,
				index,
				ring,
				angle,
				x: cx + angle.cos() * distance,
				y: cy + angle.sin() * distance,
				radius: config.node_radius(entity.metrics.attention),
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::ENTITIES;
	use proptest::prelude::*;

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-9
	}

	#[test]
	fn default_viewport_matches_map_frame() {
		assert_eq!(Viewport::default(), Viewport { width: 900.0, height: 520.0 });
		assert_eq!(Viewport::from_container_width(500.0).height, 420.0);
		assert_eq!(Viewport::from_container_width(1000.0).height, 600.0);
	}

	#[test]
	fn rings_cycle_by_index() {
		let nodes = compute_layout(&ENTITIES, Viewport::default(), &LayoutConfig::default());
		let rings: Vec<_> = nodes.iter().map(|n| n.ring).collect();
		assert_eq!(rings, vec![0, 1, 2, 0, 1, 2]);
	}

	#[test]
	fn inner_ring_sits_on_center() {
		let vp = Viewport::default();
		let nodes = compute_layout(&ENTITIES, vp, &LayoutConfig::default());
		let (cx, cy) = vp.center();
		for node in nodes.iter().filter(|n| n.ring == 0) {
			assert!(close(node.x, cx) && close(node.y, cy));
		}
	}

	#[test]
	fn outer_ring_distance() {
		let vp = Viewport::default();
		let config = LayoutConfig::default();
		let nodes = compute_layout(&ENTITIES, vp, &config);
		let (cx, cy) = vp.center();
		let outer = &nodes[2];
		let d = ((outer.x - cx).powi(2) + (outer.y - cy).powi(2)).sqrt();
		assert!(close(d, 520.0 * 0.42));
		let middle = &nodes[1];
		let d = ((middle.x - cx).powi(2) + (middle.y - cy).powi(2)).sqrt();
		assert!(close(d, 520.0 * 0.42 * 0.55));
	}

	#[test]
	fn node_radius_follows_attention() {
		let config = LayoutConfig::default();
		assert_eq!(config.node_radius(0.0), 30.0);
		assert_eq!(config.node_radius(1.0), 85.0);
		let nodes = compute_layout(&ENTITIES, Viewport::default(), &config);
		assert!(close(nodes[2].radius, 30.0 + 0.91 * 55.0));
	}

	#[test]
	fn hit_test_uses_radius() {
		let nodes = compute_layout(&ENTITIES, Viewport::default(), &LayoutConfig::default());
		let n = &nodes[0];
		assert!(n.contains(n.x + n.radius - 0.5, n.y));
		assert!(!n.contains(n.x + n.radius + 0.5, n.y));
	}

	proptest! {
		#[test]
		fn radii_are_bounded_for_any_viewport(w in 1.0f64..4000.0, h in 1.0f64..4000.0) {
			let nodes = compute_layout(&ENTITIES, Viewport { width: w, height: h }, &LayoutConfig::default());
			for node in &nodes {
				prop_assert!((30.0..=85.0).contains(&node.radius));
			}
		}

		#[test]
		fn angles_are_unique_and_in_range(total in 1usize..200) {
			let mut angles: Vec<f64> = (0..total).map(|i| angle_for(i, total)).collect();
			for a in &angles {
				prop_assert!(*a >= 0.0 && *a < 2.0 * PI);
			}
			angles.sort_by(|a, b| a.partial_cmp(b).unwrap());
			angles.dedup();
			prop_assert_eq!(angles.len(), total);
		}

		#[test]
		fn layout_is_deterministic(w in 100.0f64..2000.0) {
			let vp = Viewport::from_container_width(w);
			let a = compute_layout(&ENTITIES, vp, &LayoutConfig::default());
			let b = compute_layout(&ENTITIES, vp, &LayoutConfig::default());
			prop_assert_eq!(a, b);
		}
	}
}
