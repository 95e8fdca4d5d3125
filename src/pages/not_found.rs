use leptos::prelude::*;
use leptos_router::components::A;

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<main class="page not-found">
			<p class="eyebrow">"404"</p>
			<h1>"Nothing is trending here."</h1>
			<A href="/">"Back to the pulse"</A>
		</main>
	}
}
