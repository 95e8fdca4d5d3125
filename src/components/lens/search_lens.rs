use leptos::prelude::*;
use strum::IntoEnumIterator;

use super::{EntityCard, EntityDetail, EntityDrawer};
use crate::data::Dataset;
use crate::engine::view::STARTER_QUERIES;
use crate::engine::{FilterKey, LensEvent, LensView};

/// Search, quick filters, ranked results and the selected-entity panel.
#[component]
pub fn SearchLens() -> impl IntoView {
	let data = Dataset::sample();
	let lens = RwSignal::new(LensView::new(&data));
	let dispatch = move |event: LensEvent| lens.update(|l| l.apply(&data, event));

	let results = Memo::new(move |_| lens.with(|l| l.results(&data)));
	let selected = Memo::new(move |_| lens.with(|l| l.selected(&data)));
	let drawer_open = Signal::derive(move || lens.with(|l| l.drawer_open()));

	let on_keydown = move |ev: web_sys::KeyboardEvent| {
		let event = match ev.key().as_str() {
			"ArrowDown" => LensEvent::MoveDown,
			"ArrowUp" => LensEvent::MoveUp,
			"Enter" => LensEvent::Submit,
			_ => return,
		};
		ev.prevent_default();
		dispatch(event);
	};

	view! {
		<section class="lens">
			<div class="lens-controls glass">
				<label class="search-field">
					<span aria-hidden="true">"⌕"</span>
					<input
						placeholder="Search entities, communities, receipts…"
						prop:value=move || lens.with(|l| l.query.clone())
						on:input=move |ev| dispatch(LensEvent::SetQuery(event_target_value(&ev)))
						on:keydown=on_keydown
					/>
				</label>

				<div class="chip-row">
					{FilterKey::iter()
						.map(|key| {
							view! {
								<button
									type="button"
									class="chip"
									class:active=move || lens.with(|l| l.filter == key)
									on:click=move |_| dispatch(LensEvent::SetFilter(key))
								>
									{key.label()}
								</button>
							}
						})
						.collect_view()}
				</div>

				<div class="chip-row">
					<span class="hint">"Try:"</span>
					{STARTER_QUERIES
						.into_iter()
						.map(|q| {
							view! {
								<button
									type="button"
									class="tag"
									on:click=move |_| dispatch(LensEvent::SetQuery(q.to_string()))
								>
									{q}
								</button>
							}
						})
						.collect_view()}
				</div>
			</div>

			<div class="lens-grid">
				<div class="stack">
					<p class="hint">{move || format!("Showing {} clusters", results.with(Vec::len))}</p>
					{move || {
						let list = results.get();
						if list.is_empty() {
							return view! {
								<div class="panel-empty">
									"No clusters yet. Try a broader query or switch filters."
								</div>
							}
								.into_any();
						}
						list.into_iter()
							.enumerate()
							.map(|(index, entity)| {
								view! {
									<EntityCard
										entity=entity
										highlighted=Signal::derive(move || {
											let len = results.with(Vec::len);
											lens.with(|l| l.is_highlighted(len, index, entity.id))
										})
										on_select=Callback::new(move |id: &'static str| dispatch(LensEvent::Select(id)))
										on_hover=Callback::new(move |_: ()| dispatch(LensEvent::HoverIndex(index)))
									/>
								}
							})
							.collect_view()
							.into_any()
					}}
				</div>

				<aside class="panel lens-detail">
					{move || match selected.get() {
						Some(entity) => view! { <EntityDetail entity=entity /> }.into_any(),
						None => view! {
							<div class="panel-empty">"Select an entity to see its receipts."</div>
						}
							.into_any(),
					}}
				</aside>
			</div>

			<EntityDrawer
				entity=selected
				open=drawer_open
				on_close=Callback::new(move |_: ()| dispatch(LensEvent::CloseDrawer))
			/>
		</section>
	}
}
