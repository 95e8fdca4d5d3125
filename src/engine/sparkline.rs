//! Sparkline geometry: a series fitted into a fixed box as SVG paths.

use std::fmt::Write;

/// Default drawing box width.
pub const WIDTH: f64 = 220.0;
/// Default drawing box height.
pub const HEIGHT: f64 = 72.0;

/// Normalised polyline for a series.
#[derive(Clone, Debug, PartialEq)]
pub struct Sparkline {
	/// Fitted points, left to right.
	pub points: Vec<(f64, f64)>,
	/// Smallest sample.
	pub min: f64,
	/// Largest sample.
	pub max: f64,
	/// Box width.
	pub width: f64,
	/// Box height.
	pub height: f64,
}

impl Sparkline {
	/// Fit `data` into a `width × height` box, min at the bottom. Returns
	/// `None` for an empty series.
	pub fn fit(data: &[f64], width: f64, height: f64) -> Option<Self> {
		if data.is_empty() {
			return None;
		}
		let min = data.iter().copied().fold(f64::INFINITY, f64::min);
		let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
		let range = (max - min).max(1.0);
		let last = (data.len() - 1).max(1) as f64;

		let points = data
			.iter()
			.enumerate()
			.map(|(i, v)| (i as f64 / last * width, height - (v - min) / range * height))
			.collect();
		Some(Self {
			points,
			min,
			max,
			width,
			height,
		})
	}

	/// SVG path through every point.
	pub fn line_path(&self) -> String {
		let mut path = String::new();
		for (i, (x, y)) in self.points.iter().enumerate() {
			if i > 0 {
				path.push(' ');
			}
			let cmd = if i == 0 { 'M' } else { 'L' };
			let _ = write!(path, "{cmd} {x} {y}");
		}
		path
	}

	/// [`line_path`](Self::line_path) closed along the bottom edge.
	pub fn area_path(&self) -> String {
		format!(
			"{} L {} {} L 0 {} Z",
			self.line_path(),
			self.width,
			self.height,
			self.height
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn empty_series_has_no_geometry() {
		assert_eq!(Sparkline::fit(&[], WIDTH, HEIGHT), None);
	}

	#[test]
	fn extremes_touch_the_box() {
		let s = Sparkline::fit(&[10.0, 30.0, 20.0], 100.0, 50.0).unwrap();
		assert_eq!(s.points, vec![(0.0, 50.0), (50.0, 0.0), (100.0, 25.0)]);
		assert_eq!((s.min, s.max), (10.0, 30.0));
	}

	#[test]
	fn flat_series_stays_finite() {
		let s = Sparkline::fit(&[5.0, 5.0], 10.0, 10.0).unwrap();
		assert!(s.points.iter().all(|(x, y)| x.is_finite() && y.is_finite()));
		assert_eq!(s.points[1], (10.0, 10.0));
		let single = Sparkline::fit(&[7.0], 10.0, 10.0).unwrap();
		assert_eq!(single.points, vec![(0.0, 10.0)]);
	}

	#[test]
	fn paths() {
		let s = Sparkline::fit(&[0.0, 2.0], 4.0, 2.0).unwrap();
		assert_eq!(s.line_path(), "M 0 2 L 4 0");
		assert_eq!(s.area_path(), "M 0 2 L 4 0 L 4 2 L 0 2 Z");
	}
}
