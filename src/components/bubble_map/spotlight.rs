use leptos::prelude::*;

use crate::components::format::{bar_fill, momentum_fill, percent};
use crate::components::sparkline::SparklineChart;
use crate::data::Entity;

#[component]
pub fn QuickStat(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
	view! {
		<div class="quick-stat">
			<p class="eyebrow">{label}</p>
			<p class="quick-stat-value">{move || value.get()}</p>
		</div>
	}
}

#[component]
pub fn MetricBar(
	label: &'static str,
	value: String,
	/// Fill fraction; clamped to `[0, 1]`.
	percent: f64,
	accent: &'static str,
) -> impl IntoView {
	let width = format!("width: {}%; background: {accent};", bar_fill(percent) * 100.0);
	view! {
		<div class="metric-bar">
			<div class="metric-bar-head">
				<span>{label}</span>
				<strong>{value}</strong>
			</div>
			<div class="metric-bar-track">
				<div class="metric-bar-fill" style=width></div>
			</div>
		</div>
	}
}

/// Detail panel for the spotlighted node.
#[component]
pub fn SpotlightPanel(
	#[prop(into)] entity: Signal<Option<&'static Entity>>,
	#[prop(into)] connected: Signal<Vec<(&'static Entity, f64)>>,
) -> impl IntoView {
	move || match entity.get() {
		None => view! { <div class="panel-empty">"No clusters for this filter."</div> }.into_any(),
		Some(e) => view! {
			<div class="spotlight">
				<div class="spotlight-head">
					<span>"◎ Spotlight"</span>
					<span>{e.kind.to_string()}</span>
				</div>
				<h3>{e.name}</h3>
				<p class="summary">{e.summary}</p>

				<div class="metric-grid">
					<MetricBar
						label="Attention"
						value=percent(e.metrics.attention, false)
						percent=e.metrics.attention
						accent=e.palette.primary()
					/>
					<MetricBar
						label="Momentum"
						value=percent(e.metrics.momentum, true)
						percent=momentum_fill(e.metrics.momentum)
						accent="#34d399"
					/>
					<MetricBar
						label="Controversy"
						value=percent(e.metrics.controversy, false)
						percent=e.metrics.controversy
						accent="#f472b6"
					/>
				</div>

				<div class="sparkline-box">
					<SparklineChart data=e.sparkline colors=e.palette />
					<p class="hint">"Attention sparkline · " {e.last_pulse}</p>
				</div>

				<div>
					<p class="eyebrow">"Connected clusters"</p>
					<div class="stack">
						{move || {
							let links = connected.get();
							if links.is_empty() {
								return view! { <p class="hint">"No direct links in the mock graph."</p> }
									.into_any();
							}
							links
								.into_iter()
								.map(|(other, weight)| {
									view! {
										<div class="connected-row">
											<span>{other.name}</span>
											<strong>{percent(weight, false)}</strong>
										</div>
									}
								})
								.collect_view()
								.into_any()
						}}
					</div>
				</div>

				<div>
					<p class="eyebrow">"Recent receipts"</p>
					<div class="stack">
						{e
							.receipts
							.iter()
							.take(2)
							.map(|r| {
								view! {
									<div class="receipt-row">
										<span class="receipt-glyph" style=format!("color: {}", r.source.accent())>
											{r.source.glyph()}
										</span>
										<div>
											<p class="receipt-title">{r.title}</p>
											<p class="hint">{r.source.label()} " · " {r.context}</p>
										</div>
									</div>
								}
							})
							.collect_view()}
					</div>
				</div>
			</div>
		}
		.into_any(),
	}
}
