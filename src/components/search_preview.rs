use leptos::prelude::*;

use crate::data::{Dataset, Entity, MomentumStatus};
use crate::engine::Query;
use crate::engine::filter::preview;

/// Example queries: the first seeds the preview input, the last is offered
/// when nothing matches.
pub const PLACEHOLDER_QUERIES: [&str; 3] = ["seed oil receipts", "AI doom momentum", "new vibe shift"];

const PREVIEW_LIMIT: usize = 3;

/// Compact search box on the home page.
#[component]
pub fn SearchPreview() -> impl IntoView {
	let data = Dataset::sample();
	let query = RwSignal::new(PLACEHOLDER_QUERIES[0].to_string());
	let results = Memo::new(move |_| {
		query.with(|q| preview(data.entities, &Query::parse(q), PREVIEW_LIMIT))
	});

	view! {
		<div class="search-preview glass">
			<p class="hint">"✦ Search receipts, adjacencies, and metric blends."</p>
			<label class="search-field">
				<span aria-hidden="true">"⌕"</span>
				<input
					prop:value=move || query.get()
					on:input=move |ev| query.set(event_target_value(&ev))
					placeholder="Trace an idea…"
				/>
			</label>
			<div class="stack">
				{move || {
					let list = results.get();
					if list.is_empty() {
						return view! { <p class="hint">"Nothing matches yet. Try: " {PLACEHOLDER_QUERIES[2]}</p> }
							.into_any();
					}
					list.into_iter().map(|e| view! { <ResultRow entity=e /> }).collect_view().into_any()
				}}
			</div>
		</div>
	}
}

#[component]
fn ResultRow(entity: &'static Entity) -> impl IntoView {
	let tone = match entity.momentum_status {
		MomentumStatus::Cooling => "badge badge-down",
		_ => "badge badge-up",
	};
	view! {
		<div class="result-row">
			<div class="result-row-head">
				<div>
					<p class="eyebrow">{entity.kind.to_string()}</p>
					<p class="result-name">{entity.name}</p>
				</div>
				<span class=tone>{entity.momentum_status.to_string()}</span>
			</div>
			<p class="summary">{entity.summary}</p>
			<div class="chip-row">
				{entity
					.adjacency
					.iter()
					.take(3)
					.map(|a| view! { <span class="tag">{*a}</span> })
					.collect_view()}
			</div>
		</div>
	}
}
