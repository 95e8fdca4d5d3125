use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::BubbleMapState;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// `#rrggbb` to `rgba(r, g, b, alpha)`. Anything else is passed through.
pub fn hex_rgba(hex: &str, alpha: f64) -> String {
	let digits = hex.trim_start_matches('#');
	let channel = |i: usize| digits.get(i..i + 2).and_then(|c| u8::from_str_radix(c, 16).ok());
	match (digits.len(), channel(0), channel(2), channel(4)) {
		(6, Some(r), Some(g), Some(b)) => format!("rgba({r}, {g}, {b}, {alpha})"),
		_ => hex.to_string(),
	}
}

pub fn render(state: &BubbleMapState, ctx: &CanvasRenderingContext2d) {
	let (top, bottom) = if state.dark {
		("#07060f", "#03030a")
	} else {
		("#fff8fb", "#ffffff")
	};
	let background = ctx.create_linear_gradient(0.0, 0.0, 0.0, state.height);
	let _ = background.add_color_stop(0.0, top);
	let _ = background.add_color_stop(1.0, bottom);
	#[allow(deprecated)]
	ctx.set_fill_style(&background);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	draw_edges(state, ctx);
	draw_nodes(state, ctx);
}

fn draw_edges(state: &BubbleMapState, ctx: &CanvasRenderingContext2d) {
	let (dash, gap) = (10.0, 6.0);
	let dash_offset = -(state.flow_time * 24.0) % (dash + gap);
	let t = ease_out_cubic(state.spotlight.highlight_t);
	let idle = if state.dark { 0.08 } else { 0.18 };

	for edge in &state.scene.snapshot.edges {
		let (Some(a), Some(b)) = (state.scene.node(edge.source), state.scene.node(edge.target)) else {
			continue;
		};
		let (x1, y1, x2, y2) = (a.layout.x, a.layout.y, b.layout.x, b.layout.y);

		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);

		if edge.highlighted {
			let gradient = ctx.create_linear_gradient(x1, y1, x2, y2);
			let _ = gradient.add_color_stop(0.0, "#f472b6");
			let _ = gradient.add_color_stop(1.0, "#34d399");
			#[allow(deprecated)]
			ctx.set_stroke_style(&gradient);
			ctx.set_global_alpha(0.6 + 0.3 * t);
			ctx.set_line_width(1.2 + 1.8 * t);
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(dash),
				&JsValue::from_f64(gap),
			));
			ctx.set_line_dash_offset(dash_offset);
		} else {
			ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {idle})"));
			ctx.set_global_alpha(0.6);
			ctx.set_line_width(1.2);
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(state: &BubbleMapState, ctx: &CanvasRenderingContext2d) {
	let t = ease_out_cubic(state.spotlight.highlight_t);

	for (node, &alpha) in state.scene.nodes.iter().zip(&state.node_alpha) {
		let (x, y, radius) = (node.layout.x, node.layout.y, node.layout.radius);
		let is_active = state.is_active(node.layout.id);
		let is_fading = state.spotlight.prev_node == Some(node.layout.id);

		ctx.set_global_alpha(alpha);

		let glow = if is_active {
			t
		} else if is_fading {
			1.0 - t
		} else {
			0.0
		};
		if glow > 0.01 {
			let glow_radius = radius * (1.0 + 0.35 * glow);
			if let Ok(gradient) = ctx.create_radial_gradient(x, y, radius * 0.8, x, y, glow_radius) {
				let _ = gradient.add_color_stop(0.0, &format!("rgba(255, 255, 255, {})", 0.45 * glow));
				let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
				ctx.begin_path();
				let _ = ctx.arc(x, y, glow_radius, 0.0, 2.0 * PI);
				#[allow(deprecated)]
				ctx.set_fill_style(&gradient);
				ctx.fill();
			}
		}

		// Light source sits up and to the left.
		let (fx, fy) = (x - radius * 0.4, y - radius * 0.4);
		if let Ok(gradient) = ctx.create_radial_gradient(fx, fy, 0.0, fx, fy, radius * 1.4) {
			let _ = gradient.add_color_stop(0.0, &hex_rgba(node.palette.primary(), 0.95));
			let _ = gradient.add_color_stop(1.0, &hex_rgba(node.palette.secondary(), 0.55));
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
			ctx.fill();
		}

		ctx.set_stroke_style_str(if state.dark {
			"rgba(255, 255, 255, 0.4)"
		} else {
			"rgba(0, 0, 0, 0.08)"
		});
		ctx.set_line_width(if is_active { 1.2 + 1.8 * t } else { 1.2 });
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.stroke();

		let label_color = match (is_active, state.dark) {
			(true, _) => "rgba(255, 255, 255, 1)",
			(false, true) => "rgba(255, 255, 255, 0.7)",
			(false, false) => "rgba(0, 0, 0, 0.6)",
		};
		ctx.set_fill_style_str(label_color);
		ctx.set_font("600 9.6px sans-serif");
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(&node.label, x, y);
	}
	ctx.set_global_alpha(1.0);
}
