/// `round(value * 100)%`, with a `+` for positive values when `signed`.
pub fn percent(value: f64, signed: bool) -> String {
	let rounded = (value * 100.0).round() as i64;
	let sign = if signed && rounded > 0 { "+" } else { "" };
	format!("{sign}{rounded}%")
}

/// Bar fill fraction in `[0, 1]`.
pub fn bar_fill(value: f64) -> f64 {
	value.clamp(0.0, 1.0)
}

/// Momentum mapped from `[-1, 1]` onto a bar.
pub fn momentum_fill(momentum: f64) -> f64 {
	bar_fill((momentum + 1.0) / 2.0)
}

/// Upper-cased name cut to 16 characters for node labels.
pub fn node_label(name: &str) -> String {
	name.to_uppercase().chars().take(16).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn percent_signs() {
		assert_eq!(percent(0.34, true), "+34%");
		assert_eq!(percent(-0.04, true), "-4%");
		assert_eq!(percent(0.001, true), "0%");
		assert_eq!(percent(0.86, false), "86%");
	}

	#[test]
	fn fills_are_clamped() {
		assert_eq!(bar_fill(1.4), 1.0);
		assert_eq!(bar_fill(-0.2), 0.0);
		assert_eq!(momentum_fill(-1.0), 0.0);
		assert_eq!(momentum_fill(0.0), 0.5);
	}

	#[test]
	fn labels_truncate() {
		assert_eq!(node_label("Cottagecore Supply Chain"), "COTTAGECORE SUPP");
		assert_eq!(node_label("Anora (Film)"), "ANORA (FILM)");
	}
}
