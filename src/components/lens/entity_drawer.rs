use leptos::prelude::*;

use super::EntityDetail;
use crate::data::Entity;

/// Slide-over with the selected entity. Hidden unless `open` and an entity is set.
#[component]
pub fn EntityDrawer(
	#[prop(into)] entity: Signal<Option<&'static Entity>>,
	#[prop(into)] open: Signal<bool>,
	#[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
	move || {
		let entity = entity.get().filter(|_| open.get())?;
		Some(view! {
			<div class="drawer-backdrop" on:click=move |_| on_close.run(())>
				<div
					class="drawer glass"
					role="dialog"
					aria-label=entity.name
					on:click=|ev| ev.stop_propagation()
				>
					<div class="drawer-head">
						<p class="eyebrow">"Entity profile"</p>
						<button type="button" class="chip" on:click=move |_| on_close.run(())>
							"Close"
						</button>
					</div>
					<EntityDetail entity=entity />
				</div>
			</div>
		})
	}
}
