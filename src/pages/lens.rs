use leptos::prelude::*;

use crate::components::lens::SearchLens;

/// Full search lens.
#[component]
pub fn Lens() -> impl IntoView {
	view! {
		<main class="page">
			<div class="section-head">
				<div>
					<p class="eyebrow">"Lens"</p>
					<h1>"Search the cultural graph"</h1>
				</div>
				<p class="hint">"↑ ↓ to move · Enter to open"</p>
			</div>
			<SearchLens />
		</main>
	}
}
