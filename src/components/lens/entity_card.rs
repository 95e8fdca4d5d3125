use leptos::prelude::*;

use crate::components::format::percent;
use crate::components::sparkline::SparklineChart;
use crate::data::{Entity, Palette};

const CARD_SPARKLINE: Palette = Palette("#f472b6", "#c084fc");

/// One ranked lens result.
#[component]
pub fn EntityCard(
	entity: &'static Entity,
	#[prop(into)] highlighted: Signal<bool>,
	#[prop(into)] on_select: Callback<&'static str>,
	#[prop(into)] on_hover: Callback<()>,
) -> impl IntoView {
	view! {
		<article
			class="entity-card"
			class:focused=move || highlighted.get()
			tabindex="0"
			on:mouseenter=move |_| on_hover.run(())
			on:focus=move |_| on_hover.run(())
			on:click=move |_| on_select.run(entity.id)
		>
			<div class="entity-card-head">
				<div>
					<p class="eyebrow">{entity.kind.to_string()}</p>
					<h3>{entity.name}</h3>
				</div>
				<span class="badge">{entity.momentum_status.to_string()}</span>
			</div>
			<p class="summary">{entity.summary}</p>

			<div class="metric-row">
				<Metric label="Attention" value=percent(entity.metrics.attention, false) hint=None />
				<Metric
					label="Momentum"
					value=percent(entity.metrics.momentum, true)
					hint=Some("vs 21d baseline")
				/>
				<Metric
					label="Controversy"
					value=percent(entity.metrics.controversy, false)
					hint=Some("heat index")
				/>
			</div>

			<div class="sparkline-box">
				<SparklineChart data=entity.sparkline colors=CARD_SPARKLINE />
			</div>

			<div class="chip-row">
				{entity
					.adjacency
					.iter()
					.map(|a| view! { <span class="tag">{*a}</span> })
					.collect_view()}
			</div>

			<div class="stack">
				{entity
					.receipts
					.iter()
					.take(2)
					.map(|r| {
						view! {
							<div class="receipt-row">
								<span class="receipt-glyph" style=format!("color: {}", r.source.accent())>
									{r.source.glyph()}
								</span>
								<p class="receipt-title">{r.title}</p>
							</div>
						}
					})
					.collect_view()}
			</div>
			<p class="hint">{entity.last_pulse}</p>
		</article>
	}
}

#[component]
fn Metric(label: &'static str, value: String, hint: Option<&'static str>) -> impl IntoView {
	view! {
		<div class="metric">
			<p class="eyebrow">{label}</p>
			<p class="metric-value">{value}</p>
			{hint.map(|h| view! { <p class="hint">{h}</p> })}
		</div>
	}
}
