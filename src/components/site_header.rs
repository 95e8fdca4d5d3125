use leptos::prelude::*;
use leptos_router::components::A;

use super::theme_toggle::ThemeToggle;

/// Sticky header with navigation and the theme toggle. The router marks the
/// current link with `aria-current="page"`.
#[component]
pub fn SiteHeader() -> impl IntoView {
	view! {
		<header class="site-header">
			<div class="site-header-inner">
				<a href="/" class="brand">
					"Cultura"
				</a>
				<nav class="site-nav">
					<A href="/" exact=true>
						"Home"
					</A>
					<A href="/lens" exact=true>
						"Lens"
					</A>
				</nav>
				<ThemeToggle />
			</div>
		</header>
	}
}
