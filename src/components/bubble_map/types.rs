use crate::data::Palette;
use crate::engine::{GraphSnapshot, LayoutNode, Viewport};

#[derive(Clone, Debug, PartialEq)]
pub struct BubbleNode {
	pub layout: LayoutNode,
	pub label: String,
	pub palette: Palette,
}

/// Everything the canvas needs for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BubbleScene {
	pub viewport: Viewport,
	pub nodes: Vec<BubbleNode>,
	pub snapshot: GraphSnapshot,
}

impl BubbleScene {
	pub fn node(&self, id: &str) -> Option<&BubbleNode> {
		self.nodes.iter().find(|n| n.layout.id == id)
	}
}
