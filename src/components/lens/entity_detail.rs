use leptos::prelude::*;

use crate::components::format::percent;
use crate::components::sparkline::SparklineChart;
use crate::data::Entity;

/// Full profile for the selected entity.
#[component]
pub fn EntityDetail(entity: &'static Entity) -> impl IntoView {
	let blocks = [
		("Attention", percent(entity.metrics.attention, false), "share of mentions"),
		("Momentum", percent(entity.metrics.momentum, true), "7d vs 21d"),
		("Controversy", percent(entity.metrics.controversy, false), "sentiment spread"),
	];

	view! {
		<div class="entity-detail">
			<p class="eyebrow">{entity.kind.to_string()} " · " {entity.momentum_status.to_string()}</p>
			<h2>{entity.name}</h2>
			<p class="summary">{entity.summary}</p>

			<div class="metric-grid">
				{blocks
					.into_iter()
					.map(|(label, value, hint)| {
						view! {
							<div class="metric-block">
								<p class="eyebrow">{label}</p>
								<p class="metric-value">{value}</p>
								<p class="hint">{hint}</p>
							</div>
						}
					})
					.collect_view()}
			</div>

			<div class="sparkline-box">
				<SparklineChart data=entity.sparkline colors=entity.palette />
				<p class="hint">{entity.last_pulse}</p>
			</div>

			<TagList title="Communities watching" tags=entity.communities />
			<TagList title="Traveling with" tags=entity.related />

			<div>
				<p class="eyebrow">"Receipts"</p>
				<div class="stack">
					{entity
						.receipts
						.iter()
						.map(|r| {
							view! {
								<a class="receipt-link" href=r.url target="_blank" rel="noreferrer">
									<div class="receipt-row">
										<span class="receipt-glyph" style=format!("color: {}", r.source.accent())>
											{r.source.glyph()}
										</span>
										<div>
											<p class="receipt-title">{r.title}</p>
											<p class="summary">{r.snippet}</p>
											<p class="hint">
												{r.source.label()} " · " {r.date} " · " {r.context}
											</p>
										</div>
									</div>
								</a>
							}
						})
						.collect_view()}
				</div>
			</div>
		</div>
	}
}

#[component]
fn TagList(title: &'static str, tags: &'static [&'static str]) -> impl IntoView {
	view! {
		<div>
			<p class="eyebrow">{title}</p>
			<div class="chip-row">
				{tags.iter().map(|t| view! { <span class="tag">{*t}</span> }).collect_view()}
			</div>
		</div>
	}
}
