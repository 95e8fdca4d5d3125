use super::types::BubbleScene;

/// Opacity of nodes hidden by the active filter.
pub const DIMMED_ALPHA: f64 = 0.3;

#[derive(Clone, Debug, Default)]
pub struct SpotlightState {
	pub node: Option<&'static str>,
	pub highlight_t: f64,
	pub prev_node: Option<&'static str>,
	delay_t: f64,
}

pub struct BubbleMapState {
	pub scene: BubbleScene,
	pub spotlight: SpotlightState,
	pub hovered: Option<&'static str>,
	pub dark: bool,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
	/// Eased per-node opacity, parallel to `scene.nodes`.
	pub node_alpha: Vec<f64>,
}

impl BubbleMapState {
	pub fn new(scene: BubbleScene, dark: bool) -> Self {
		let node_alpha = target_alphas(&scene);
		let mut state = Self {
			width: scene.viewport.width,
			height: scene.viewport.height,
			spotlight: SpotlightState::default(),
			hovered: None,
			dark,
			flow_time: 0.0,
			node_alpha,
			scene: BubbleScene::default(),
		};
		state.set_scene(scene);
		state.spotlight.highlight_t = 1.0;
		state
	}

	/// Swap in a freshly derived scene. Positions jump; opacity and the
	/// spotlight glow ease in over the next ticks.
	pub fn set_scene(&mut self, scene: BubbleScene) {
		if self.node_alpha.len() != scene.nodes.len() {
			self.node_alpha = target_alphas(&scene);
		}
		self.width = scene.viewport.width;
		self.height = scene.viewport.height;
		self.set_spotlight(scene.snapshot.active);
		self.scene = scene;
	}

	fn set_spotlight(&mut self, node: Option<&'static str>) {
		if self.spotlight.node == node {
			return;
		}
		self.spotlight.prev_node = self.spotlight.node.take();
		self.spotlight.node = node;
		self.spotlight.highlight_t = 0.0;
		self.spotlight.delay_t = 0.0;
	}

	/// Topmost node under a canvas-space point.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<&'static str> {
		// Later nodes paint over earlier ones.
		self.scene
			.nodes
			.iter()
			.rev()
			.find(|n| n.layout.contains(x, y))
			.map(|n| n.layout.id)
	}

	pub fn is_active(&self, id: &str) -> bool {
		self.spotlight.node == Some(id)
	}

	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;

		let (delay, speed) = (0.08, 4.0);
		self.spotlight.delay_t = (self.spotlight.delay_t + dt).min(delay);
		if self.spotlight.delay_t >= delay {
			self.spotlight.highlight_t += (1.0 - self.spotlight.highlight_t) * (speed * dt).min(1.0);
			if self.spotlight.highlight_t > 0.99 {
				self.spotlight.highlight_t = 1.0;
				self.spotlight.prev_node = None;
			}
		}

		let targets = target_alphas(&self.scene);
		for (alpha, target) in self.node_alpha.iter_mut().zip(targets) {
			*alpha += (target - *alpha) * (6.0 * dt).min(1.0);
		}
	}
}

fn target_alphas(scene: &BubbleScene) -> Vec<f64> {
	scene
		.nodes
		.iter()
		.map(|n| {
			if scene.snapshot.is_visible(n.layout.id) {
				1.0
			} else {
				DIMMED_ALPHA
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::bubble_map::build_scene;
	use crate::data::Dataset;
	use crate::engine::{FilterKey, GraphEvent, GraphView, LayoutConfig, compute_layout};

	fn scene(view: &GraphView) -> BubbleScene {
		let data = Dataset::sample();
		let layout = compute_layout(data.entities, view.viewport, &LayoutConfig::default());
		build_scene(&data, view.viewport, &layout, view.snapshot(&data))
	}

	#[test]
	fn hit_test_finds_nodes() {
		let data = Dataset::sample();
		let view = GraphView::new(&data);
		let state = BubbleMapState::new(scene(&view), true);
		let outer = &state.scene.nodes[2].layout;
		assert_eq!(state.node_at_position(outer.x, outer.y), Some("ai-doom"));
		assert_eq!(state.node_at_position(-500.0, -500.0), None);
	}

	#[test]
	fn dimmed_nodes_ease_toward_target() {
		let data = Dataset::sample();
		let mut view = GraphView::new(&data);
		let mut state = BubbleMapState::new(scene(&view), false);
		view.apply(&data, GraphEvent::SetFilter(FilterKey::Cooling));
		state.set_scene(scene(&view));
		assert_eq!(state.spotlight.node, Some("cottagecore"));
		assert_eq!(state.spotlight.prev_node, Some("seed-oils"));
		for _ in 0..120 {
			state.tick(1.0 / 60.0);
		}
		assert!((state.node_alpha[0] - DIMMED_ALPHA).abs() < 0.01);
		assert!((state.node_alpha[4] - 1.0).abs() < 0.01);
		assert_eq!(state.spotlight.highlight_t, 1.0);
		assert_eq!(state.spotlight.prev_node, None);
	}
}
