//! Cultura Lens: a static dashboard of cultural entities, their attention
//! metrics and how they link up.
//!
//! [`data`] and [`engine`] are plain Rust and hold every rule the UI renders;
//! the Leptos components only turn engine snapshots into markup and canvas
//! frames.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info, warn};

// Modules
mod components;
pub mod data;
pub mod engine;
mod pages;
mod theme;

// Top-Level pages
use crate::components::site_header::SiteHeader;
use crate::data::Dataset;
use crate::pages::home::Home;
use crate::pages::lens::Lens;
use crate::pages::not_found::NotFound;
use crate::theme::{preferred_theme, provide_theme};

/// Initialize logging and panic hooks for the WASM target, then audit the
/// bundled dataset.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
	if let Err(err) = Dataset::sample().validate() {
		warn!("rendering with an invalid dataset, first violation: {err}");
	}
}

/// An app router with the home page, the lens and a 404 fallback
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	let theme = provide_theme(preferred_theme());

	view! {
		<Html
			attr:lang="en"
			attr:dir="ltr"
			attr:data-theme={move || <&'static str>::from(theme.get())}
		/>

		// sets the document title
		<Title text="Cultura Lens" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta name="description" content="Attention, momentum and controversy for cultural clusters." />

		<Router>
			<SiteHeader />
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/lens") view=Lens />
			</Routes>
		</Router>
	}
}
