use leptos::prelude::*;

use crate::components::bubble_map::BubbleMap;
use crate::components::format::percent;
use crate::components::search_preview::SearchPreview;
use crate::components::sparkline::SparklineChart;
use crate::data::{Dataset, Entity};
use crate::engine::stats::rising;

const DESIGN_DOC: &str = "https://github.com/0xmaritime/cultura/blob/main/docs/design%20document.md";

/// Landing page: hero, search preview, bubble map and rising clusters.
#[component]
pub fn Home() -> impl IntoView {
	let data = Dataset::sample();

	view! {
		<main class="page">
			<section class="hero">
				<div class="hero-copy">
					<p class="eyebrow">"Cultura Pulse"</p>
					<h1>"Trace how ideas move through culture."</h1>
					<p class="summary">
						"Attention, momentum and controversy for the clusters people are arguing about, with receipts."
					</p>
					<div class="chip-row">
						<a class="button primary" href="/lens">
							"Open the Lens"
						</a>
						<a class="button" href=DESIGN_DOC target="_blank" rel="noreferrer">
							"Read the design doc"
						</a>
					</div>
				</div>
				<SearchPreview />
			</section>

			<BubbleMap />

			<section class="rising">
				<div class="section-head">
					<div>
						<p class="eyebrow">"Rising discourse"</p>
						<h2>"Where momentum is building"</h2>
					</div>
				</div>
				<div class="card-grid">
					{rising(data.entities, 4)
						.into_iter()
						.map(|entity| view! { <RisingCard entity=entity /> })
						.collect_view()}
				</div>
			</section>
		</main>
	}
}

#[component]
fn RisingCard(entity: &'static Entity) -> impl IntoView {
	view! {
		<article class="rising-card glass">
			<p class="eyebrow">{entity.kind.to_string()}</p>
			<h3>{entity.name}</h3>
			<p class="rising-momentum">{percent(entity.metrics.momentum, true)}</p>
			<SparklineChart data=entity.sparkline colors=entity.palette />
			<p class="hint">{entity.last_pulse}</p>
		</article>
	}
}
