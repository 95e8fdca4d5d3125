use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::prelude::*;

use crate::data::Palette;
use crate::engine::Sparkline;
use crate::engine::sparkline::{HEIGHT, WIDTH};

static GRADIENT_IDS: AtomicUsize = AtomicUsize::new(0);

/// Inline SVG trend line. Renders nothing for an empty series.
#[component]
pub fn SparklineChart(
	data: &'static [f64],
	#[prop(default = Palette("#a855f7", "#ec4899"))] colors: Palette,
	#[prop(optional, into)] class: String,
) -> impl IntoView {
	let gradient_id = format!("spark-{}", GRADIENT_IDS.fetch_add(1, Ordering::Relaxed));
	let fill = format!("url(#{gradient_id})");

	Sparkline::fit(data, WIDTH, HEIGHT).map(|line| {
		view! {
			<svg
				viewBox=format!("0 0 {WIDTH} {HEIGHT}")
				class=format!("sparkline {class}")
				role="img"
				aria-label=format!("Attention sparkline min {} max {}", line.min, line.max)
			>
				<defs>
					<linearGradient id=gradient_id x1="0%" y1="0%" x2="100%" y2="0%">
						<stop offset="0%" stop-color=colors.primary() stop-opacity="1" />
						<stop offset="100%" stop-color=colors.secondary() stop-opacity="1" />
					</linearGradient>
				</defs>
				<path d=line.area_path() fill=fill.clone() fill-opacity="0.15" stroke="none" />
				<path
					d=line.line_path()
					fill="none"
					stroke=fill
					stroke-width="2.4"
					stroke-linecap="round"
				/>
			</svg>
		}
	})
}
