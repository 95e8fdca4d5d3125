use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Category of a tracked cultural object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum EntityType {
	/// A discussion topic.
	Topic,
	/// A public figure.
	Person,
	/// A film or series.
	Film,
	/// A community or scene.
	Community,
	/// A visual or lifestyle aesthetic.
	Aesthetic,
	/// A belief system or camp.
	Ideology,
}

/// Authored momentum label. Not derived from [`Metrics::momentum`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum MomentumStatus {
	/// Attention is accelerating.
	Surging,
	/// Attention holds level.
	Steady,
	/// Attention is fading.
	Cooling,
}

/// Where a receipt was collected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ReceiptSource {
	/// Reddit thread or comment.
	Reddit,
	/// X / Twitter post.
	Twitter,
	/// YouTube video.
	Youtube,
	/// Blog post or RSS item.
	Rss,
	/// Wiki article.
	Wiki,
	/// Search trend data.
	Trends,
}

impl ReceiptSource {
	/// Human readable source name.
	pub fn label(self) -> &'static str {
		match self {
			Self::Reddit => "Reddit",
			Self::Twitter => "X / Twitter",
			Self::Youtube => "YouTube",
			Self::Rss => "Blog / RSS",
			Self::Wiki => "Wiki",
			Self::Trends => "Trends",
		}
	}

	/// Accent colour for the source badge.
	pub fn accent(self) -> &'static str {
		match self {
			Self::Reddit => "#fdba74",
			Self::Twitter => "#f1f5f9",
			Self::Youtube => "#fca5a5",
			Self::Rss => "#fde68a",
			Self::Wiki => "#a7f3d0",
			Self::Trends => "#bae6fd",
		}
	}

	/// Single glyph shown in place of an icon.
	pub fn glyph(self) -> &'static str {
		match self {
			Self::Reddit => "◎",
			Self::Twitter => "𝕏",
			Self::Youtube => "▶",
			Self::Rss => "≋",
			Self::Wiki => "¶",
			Self::Trends => "∿",
		}
	}
}

/// Bounded attention metrics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
	/// Share of mentions, `[0, 1]`.
	pub attention: f64,
	/// Signed change in attention, `[-1, 1]`.
	pub momentum: f64,
	/// Sentiment spread, `[0, 1]`.
	pub controversy: f64,
}

/// A piece of cited evidence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Receipt {
	/// Where it was found.
	pub source: ReceiptSource,
	/// Headline as quoted.
	pub title: &'static str,
	/// Short excerpt.
	pub snippet: &'static str,
	/// Link to the original post.
	pub url: &'static str,
	/// Human readable date.
	pub date: &'static str,
	/// Why it matters for the entity.
	pub context: &'static str,
}

/// Gradient colour pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette(pub &'static str, pub &'static str);

impl Palette {
	/// Leading colour, used for legends and accents.
	pub fn primary(&self) -> &'static str {
		self.0
	}

	/// Trailing colour.
	pub fn secondary(&self) -> &'static str {
		self.1
	}
}

/// A tracked cultural object.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
	/// Unique, URL-safe id.
	pub id: &'static str,
	/// Display name.
	pub name: &'static str,
	/// Category.
	pub kind: EntityType,
	/// One or two sentence description.
	pub summary: &'static str,
	/// Current attention metrics.
	pub metrics: Metrics,
	/// Recent attention samples, oldest first.
	pub sparkline: &'static [f64],
	/// Authored momentum label.
	pub momentum_status: MomentumStatus,
	/// One-line note on the latest activity.
	pub last_pulse: &'static str,
	/// Communities discussing the entity.
	pub communities: &'static [&'static str],
	/// Neighbouring topics.
	pub adjacency: &'static [&'static str],
	/// Cited evidence, newest first.
	pub receipts: &'static [Receipt],
	/// Names that travel with this entity.
	pub related: &'static [&'static str],
	/// Bubble and sparkline colours.
	pub palette: Palette,
}

/// Weighted, undirected relation between two entity ids.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	/// One endpoint id.
	pub source: &'static str,
	/// The other endpoint id.
	pub target: &'static str,
	/// Intensity, `[0, 1]`.
	pub weight: f64,
}

impl Link {
	/// Whether either endpoint is `id`.
	pub fn touches(&self, id: &str) -> bool {
		self.source == id || self.target == id
	}

	/// The endpoint opposite `id`, if the link touches it.
	pub fn other(&self, id: &str) -> Option<&'static str> {
		if self.source == id {
			Some(self.target)
		} else if self.target == id {
			Some(self.source)
		} else {
			None
		}
	}
}
