use leptos::prelude::*;

use crate::theme::use_theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
	let theme = use_theme();
	let toggle = move |_| {
		theme.update(|t| *t = t.toggled());
		log::debug!("theme: {}", theme.get_untracked());
	};

	view! {
		<button type="button" class="theme-toggle" aria-label="Toggle theme" on:click=toggle>
			{move || if theme.get().is_dark() { "☀" } else { "☾" }}
		</button>
	}
}
