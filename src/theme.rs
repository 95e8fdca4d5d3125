//! Light/dark theme shared through context.

use leptos::prelude::*;
use strum::{Display, IntoStaticStr};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
	#[default]
	Light,
	Dark,
}

impl Theme {
	pub fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}

	pub fn is_dark(self) -> bool {
		self == Self::Dark
	}
}

#[derive(Clone, Copy)]
struct ThemeContext(RwSignal<Theme>);

/// The browser's colour-scheme preference, light when unknown.
pub fn preferred_theme() -> Theme {
	let prefers_dark = web_sys::window()
		.and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
		.is_some_and(|mq| mq.matches());
	if prefers_dark { Theme::Dark } else { Theme::Light }
}

/// Create the theme signal and make it available to descendants.
pub fn provide_theme(initial: Theme) -> RwSignal<Theme> {
	let theme = RwSignal::new(initial);
	provide_context(ThemeContext(theme));
	theme
}

/// The nearest provided theme; a detached light theme outside the app.
pub fn use_theme() -> RwSignal<Theme> {
	use_context::<ThemeContext>()
		.map(|ctx| ctx.0)
		.unwrap_or_else(|| RwSignal::new(Theme::default()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toggles_between_two_themes() {
		assert_eq!(Theme::Light.toggled(), Theme::Dark);
		assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
		assert_eq!(Theme::Dark.to_string(), "dark");
		assert!(!Theme::default().is_dark());
	}
}
