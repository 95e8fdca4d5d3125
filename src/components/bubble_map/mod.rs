mod component;
mod render;
mod spotlight;
mod state;
mod types;

use leptos::prelude::*;

pub use component::BubbleCanvas;
pub use types::{BubbleNode, BubbleScene};

use crate::components::format::{node_label, percent};
use crate::data::Dataset;
use crate::engine::graph::connected;
use crate::engine::stats::{filter_counts, type_legend};
use crate::engine::{
	GraphEvent, GraphSnapshot, GraphView, LayoutConfig, LayoutNode, Viewport, compute_layout,
};
use crate::theme::use_theme;
use spotlight::{QuickStat, SpotlightPanel};

/// Join a layout with the display data and the current snapshot.
pub fn build_scene(
	data: &Dataset,
	viewport: Viewport,
	layout: &[LayoutNode],
	snapshot: GraphSnapshot,
) -> BubbleScene {
	let nodes = layout
		.iter()
		.filter_map(|node| {
			let entity = data.entity(node.id)?;
			Some(BubbleNode {
				layout: node.clone(),
				label: node_label(entity.name),
				palette: entity.palette,
			})
		})
		.collect();
	BubbleScene {
		viewport,
		nodes,
		snapshot,
	}
}

/// Attention graph section: filters, legend, stats, canvas and spotlight.
#[component]
pub fn BubbleMap(#[prop(optional)] config: Option<LayoutConfig>) -> impl IntoView {
	let data = Dataset::sample();
	let config = config.unwrap_or_default();
	let theme = use_theme();

	let graph = RwSignal::new(GraphView::new(&data));
	let dispatch = move |event: GraphEvent| graph.update(|g| g.apply(&data, event));

	let viewport = Memo::new(move |_| graph.with(|g| g.viewport));
	let layout = Memo::new(move |_| compute_layout(data.entities, viewport.get(), &config));
	let snapshot = Memo::new(move |_| graph.with(|g| g.snapshot(&data)));
	let scene = Memo::new(move |_| {
		layout.with(|l| build_scene(&data, viewport.get(), l, snapshot.get()))
	});

	let active = Memo::new(move |_| snapshot.with(|s| s.active).and_then(|id| data.entity(id)));
	let linked = Memo::new(move |_| {
		active
			.get()
			.map(|e| connected(&data, e.id))
			.unwrap_or_default()
	});
	let dark = Signal::derive(move || theme.get().is_dark());

	let on_hover = Callback::new(move |id| dispatch(GraphEvent::Hover(id)));
	let on_resize = Callback::new(move |vp| dispatch(GraphEvent::Resize(vp)));
	let on_step = Callback::new(move |step: isize| {
		dispatch(if step < 0 {
			GraphEvent::FocusPrev
		} else {
			GraphEvent::FocusNext
		})
	});

	view! {
		<section class="bubble-map">
			<div class="section-head">
				<div>
					<p class="eyebrow">"Bubble map"</p>
					<h2>"Attention graph (mocked)"</h2>
				</div>
				<p class="hint">"Responsive · theme-aware · sample data"</p>
			</div>

			<div class="chip-row">
				{filter_counts(data.entities)
					.into_iter()
					.map(|(key, count)| {
						view! {
							<button
								type="button"
								class="chip"
								class:active=move || graph.with(|g| g.filter == key)
								on:click=move |_| dispatch(GraphEvent::SetFilter(key))
							>
								{key.label()}
								<span class="chip-count">{count}</span>
							</button>
						}
					})
					.collect_view()}
			</div>

			<div class="chip-row legend">
				{type_legend(data.entities)
					.into_iter()
					.map(|entry| {
						view! {
							<span class="legend-item">
								<span class="legend-dot" style=format!("background: {}", entry.color)></span>
								{entry.kind.to_string()}
								" · "
								{entry.count}
							</span>
						}
					})
					.collect_view()}
			</div>

			<div class="stat-grid">
				<QuickStat
					label="Visible clusters"
					value=Signal::derive(move || snapshot.with(|s| s.stats.count.to_string()))
				/>
				<QuickStat
					label="Avg. momentum"
					value=Signal::derive(move || snapshot.with(|s| percent(s.stats.momentum, true)))
				/>
				<QuickStat
					label="Avg. controversy"
					value=Signal::derive(move || snapshot.with(|s| percent(s.stats.controversy, false)))
				/>
			</div>

			<div class="map-grid">
				<div class="map-frame">
					<BubbleCanvas
						scene=scene
						dark=dark
						on_hover=on_hover
						on_resize=on_resize
						on_step=on_step
					/>
					{move || {
						active
							.get()
							.map(|e| {
								view! {
									<div class="now-viewing">
										<p class="eyebrow">"Now viewing"</p>
										<p class="now-viewing-name">{e.name}</p>
										<p class="hint">{e.last_pulse}</p>
									</div>
								}
							})
					}}
				</div>
				<aside class="panel">
					<SpotlightPanel entity=active connected=linked />
				</aside>
			</div>
		</section>
	}
}
