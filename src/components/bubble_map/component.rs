use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

use super::render;
use super::state::BubbleMapState;
use super::types::BubbleScene;
use crate::engine::Viewport;

/// Canvas that paints a [`BubbleScene`] and reports pointer and keyboard
/// intent back to its owner.
#[component]
pub fn BubbleCanvas(
	#[prop(into)] scene: Signal<BubbleScene>,
	#[prop(into)] dark: Signal<bool>,
	/// A node was pointed at.
	on_hover: Callback<&'static str>,
	/// The container was measured.
	on_resize: Callback<Viewport>,
	/// Arrow keys: `1` forward, `-1` back.
	on_step: Callback<isize>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<BubbleMapState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let alive = Arc::new(AtomicBool::new(true));
	let (state_init, animate_init, alive_init) = (state.clone(), animate.clone(), alive.clone());

	let measure = move |canvas: &HtmlCanvasElement| {
		let width = canvas
			.parent_element()
			.map(|p| p.client_width() as f64)
			.filter(|w| *w > 0.0)
			.unwrap_or(Viewport::default().width);
		on_resize.run(Viewport::from_container_width(width));
	};

	let resize = window_event_listener(ev::resize, move |_| {
		if let Some(canvas) = canvas_ref.get_untracked() {
			let canvas: HtmlCanvasElement = canvas.into();
			measure(&canvas);
		}
	});

	// One-time setup: context and animation loop.
	Effect::new(move |initialized: Option<bool>| {
		if initialized == Some(true) {
			return true;
		}
		let Some(canvas) = canvas_ref.get() else {
			return false;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			log::error!("bubble map: 2d canvas context unavailable");
			return true;
		};
		let window: Window = web_sys::window().unwrap();

		let initial = scene.get_untracked();
		canvas.set_width(initial.viewport.width as u32);
		canvas.set_height(initial.viewport.height as u32);
		*state_init.borrow_mut() = Some(BubbleMapState::new(initial, dark.get_untracked()));
		measure(&canvas);

		let (state_anim, animate_inner, alive_anim) =
			(state_init.clone(), animate_init.clone(), alive_init.clone());
		let mut last_frame = js_sys::Date::now();
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !alive_anim.load(Ordering::Relaxed) {
				// Dropping the closure frees the state it captured.
				let _ = animate_inner.borrow_mut().take();
				return;
			}
			let now = js_sys::Date::now();
			let dt = ((now - last_frame) / 1000.0).clamp(0.0, 0.1);
			last_frame = now;
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(dt);
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
		log::debug!("bubble map: canvas ready");
		true
	});

	// Push every derived scene into the canvas state.
	let state_scene = state.clone();
	Effect::new(move |_| {
		let next = scene.get();
		let dark = dark.get();
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		if let Some(ref mut s) = *state_scene.borrow_mut() {
			let (w, h) = (next.viewport.width as u32, next.viewport.height as u32);
			if canvas.width() != w || canvas.height() != h {
				canvas.set_width(w);
				canvas.set_height(h);
			}
			s.dark = dark;
			s.set_scene(next);
		}
	});

	on_cleanup(move || {
		alive.store(false, Ordering::Relaxed);
		resize.remove();
	});

	// Client pixels to canvas pixels; the canvas is stretched by CSS.
	let to_canvas = move |ev: &MouseEvent| -> Option<(f64, f64)> {
		let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
		let rect = canvas.get_bounding_client_rect();
		if rect.width() <= 0.0 || rect.height() <= 0.0 {
			return None;
		}
		Some((
			(ev.client_x() as f64 - rect.left()) * canvas.width() as f64 / rect.width(),
			(ev.client_y() as f64 - rect.top()) * canvas.height() as f64 / rect.height(),
		))
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = to_canvas(&ev) else {
			return;
		};
		let hit = {
			let mut guard = state_mm.borrow_mut();
			let Some(s) = guard.as_mut() else {
				return;
			};
			let hit = s.node_at_position(x, y);
			let changed = s.hovered != hit;
			s.hovered = hit;
			let clickable = hit.is_some_and(|id| s.scene.snapshot.is_visible(id));
			if let Some(canvas) = canvas_ref.get_untracked() {
				let canvas: HtmlCanvasElement = canvas.into();
				let _ = web_sys::HtmlElement::style(&canvas)
					.set_property("cursor", if clickable { "pointer" } else { "default" });
			}
			hit.filter(|_| changed)
		};
		// Released the borrow first: the callback updates the scene, which
		// re-enters the state through the scene effect.
		if let Some(id) = hit {
			on_hover.run(id);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.hovered = None;
		}
	};

	let on_keydown = move |ev: KeyboardEvent| {
		let step = match ev.key().as_str() {
			"ArrowRight" | "ArrowDown" => 1,
			"ArrowLeft" | "ArrowUp" => -1,
			_ => return,
		};
		ev.prevent_default();
		on_step.run(step);
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="bubble-map-canvas"
			tabindex="0"
			role="img"
			aria-label="Entity bubble map"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			on:keydown=on_keydown
		/>
	}
}
