//! Filter keys, free-text search and ranking.

use std::cmp::Ordering;
use std::str::FromStr;

use strum::{Display, EnumIter, IntoStaticStr};

use crate::data::{Entity, MomentumStatus};

/// Minimum controversy admitted by [`FilterKey::Controversial`].
pub const CONTROVERSY_THRESHOLD: f64 = 0.55;

/// Closed set of quick filters shared by the graph and lens views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum FilterKey {
	/// Every entity.
	#[default]
	All,
	/// `momentum_status == surging`.
	Surging,
	/// `momentum_status == steady`.
	Steady,
	/// `momentum_status == cooling`.
	Cooling,
	/// `controversy >= CONTROVERSY_THRESHOLD`.
	Controversial,
}

impl FromStr for FilterKey {
	type Err = std::convert::Infallible;

	/// Unknown keys fall back to [`FilterKey::All`]; `spiky` is an alias of
	/// `controversial`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(match s.trim().to_ascii_lowercase().as_str() {
			"surging" => Self::Surging,
			"steady" => Self::Steady,
			"cooling" => Self::Cooling,
			"controversial" | "spiky" => Self::Controversial,
			_ => Self::All,
		})
	}
}

impl FilterKey {
	/// Button label.
	pub fn label(self) -> &'static str {
		match self {
			Self::All => "All attention",
			Self::Surging => "Surging",
			Self::Steady => "Steady heat",
			Self::Cooling => "Cooling",
			Self::Controversial => "Controversial",
		}
	}

	/// Whether `entity` passes this filter.
	pub fn matches(self, entity: &Entity) -> bool {
		match self {
			Self::All => true,
			Self::Surging => entity.momentum_status == MomentumStatus::Surging,
			Self::Steady => entity.momentum_status == MomentumStatus::Steady,
			Self::Cooling => entity.momentum_status == MomentumStatus::Cooling,
			Self::Controversial => entity.metrics.controversy >= CONTROVERSY_THRESHOLD,
		}
	}
}

/// A normalised free-text query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
	terms: Vec<String>,
}

impl Query {
	/// Trim, lower-case and split `raw` on whitespace.
	pub fn parse(raw: &str) -> Self {
		let terms = raw
			.trim()
			.to_lowercase()
			.split_whitespace()
			.map(str::to_owned)
			.collect();
		Self { terms }
	}

	/// No terms; matches everything.
	pub fn is_empty(&self) -> bool {
		self.terms.is_empty()
	}

	/// Every term must appear in the entity's haystack.
	pub fn matches(&self, entity: &Entity) -> bool {
		if self.terms.is_empty() {
			return true;
		}
		let haystack = haystack(entity);
		self.terms.iter().all(|t| haystack.contains(t.as_str()))
	}
}

/// Lower-cased searchable text for an entity.
pub fn haystack(entity: &Entity) -> String {
	format!(
		"{} {} {} {} {}",
		entity.name,
		entity.summary,
		entity.communities.join(" "),
		entity.adjacency.join(" "),
		entity.related.join(" "),
	)
	.to_lowercase()
}

/// Linear ranking score used by the lens.
pub fn score(entity: &Entity) -> f64 {
	let m = &entity.metrics;
	0.6 * m.attention + 0.4 * m.momentum + 0.2 * m.controversy
}

/// Entities passing `filter`, in collection order.
pub fn filter_entities<'a>(entities: &'a [Entity], filter: FilterKey) -> Vec<&'a Entity> {
	entities.iter().filter(|e| filter.matches(e)).collect()
}

/// Entities passing both `filter` and `query`, in collection order.
pub fn search<'a>(entities: &'a [Entity], filter: FilterKey, query: &Query) -> Vec<&'a Entity> {
	entities
		.iter()
		.filter(|e| filter.matches(e) && query.matches(e))
		.collect()
}

/// Stable sort by descending [`score`].
pub fn rank(list: &mut [&Entity]) {
	list.sort_by(|a, b| score(b).partial_cmp(&score(a)).unwrap_or(Ordering::Equal));
}

/// Filter, search and rank for the lens view.
pub fn lens_results<'a>(entities: &'a [Entity], filter: FilterKey, query: &Query) -> Vec<&'a Entity> {
	let mut list = search(entities, filter, query);
	rank(&mut list);
	list
}

/// First `limit` query matches in collection order, for the home preview.
pub fn preview<'a>(entities: &'a [Entity], query: &Query, limit: usize) -> Vec<&'a Entity> {
	entities
		.iter()
		.filter(|e| query.matches(e))
		.take(limit)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::ENTITIES;
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;
	use strum::IntoEnumIterator;

	fn ids(list: &[&Entity]) -> Vec<&'static str> {
		list.iter().map(|e| e.id).collect()
	}

	#[test]
	fn all_keeps_order() {
		let all = filter_entities(&ENTITIES, FilterKey::All);
		assert_eq!(ids(&all), ENTITIES.iter().map(|e| e.id).collect::<Vec<_>>());
	}

	#[test]
	fn status_filters_match_authored_label() {
		assert_eq!(
			ids(&filter_entities(&ENTITIES, FilterKey::Surging)),
			vec!["seed-oils", "anora", "vibe-shift"]
		);
		assert_eq!(
			ids(&filter_entities(&ENTITIES, FilterKey::Steady)),
			vec!["ai-doom", "ozempic-style"]
		);
		assert_eq!(
			ids(&filter_entities(&ENTITIES, FilterKey::Cooling)),
			vec!["cottagecore"]
		);
	}

	#[test]
	fn controversial_uses_threshold() {
		let hot = filter_entities(&ENTITIES, FilterKey::Controversial);
		assert_eq!(ids(&hot), vec!["seed-oils", "ai-doom"]);
		for e in &ENTITIES {
			let admitted = hot.iter().any(|h| h.id == e.id);
			assert_eq!(admitted, e.metrics.controversy >= CONTROVERSY_THRESHOLD);
		}
	}

	#[test]
	fn filter_keys_parse_leniently() {
		assert_eq!("spiky".parse::<FilterKey>(), Ok(FilterKey::Controversial));
		assert_eq!(" Cooling ".parse::<FilterKey>(), Ok(FilterKey::Cooling));
		assert_eq!("whatever".parse::<FilterKey>(), Ok(FilterKey::All));
		for key in FilterKey::iter() {
			assert_eq!(key.to_string().parse::<FilterKey>(), Ok(key));
		}
	}

	#[test]
	fn query_normalises_terms() {
		let q = Query::parse("  AI\tDoom  ");
		assert_eq!(q.terms, ["ai", "doom"]);
		assert!(Query::parse("   ").is_empty());
	}

	#[test]
	fn multi_term_query_requires_every_term() {
		let hits = search(&ENTITIES, FilterKey::All, &Query::parse("ai doom"));
		assert_eq!(ids(&hits), vec!["ai-doom"]);
		assert!(search(&ENTITIES, FilterKey::All, &Query::parse("ai zeppelin")).is_empty());
	}

	#[test]
	fn query_reaches_label_lists() {
		let hits = search(&ENTITIES, FilterKey::All, &Query::parse("letterboxd"));
		assert_eq!(ids(&hits), vec!["anora"]);
		let hits = search(&ENTITIES, FilterKey::All, &Query::parse("cold plunges"));
		assert_eq!(ids(&hits), vec!["seed-oils"]);
	}

	#[test]
	fn empty_query_returns_filtered_set() {
		let filtered = filter_entities(&ENTITIES, FilterKey::Steady);
		let searched = search(&ENTITIES, FilterKey::Steady, &Query::parse(""));
		assert_eq!(ids(&filtered), ids(&searched));
	}

	#[test]
	fn ranking_puts_best_score_first() {
		let ranked = lens_results(&ENTITIES, FilterKey::All, &Query::default());
		let best = ENTITIES
			.iter()
			.max_by(|a, b| score(a).partial_cmp(&score(b)).unwrap())
			.unwrap();
		assert_eq!(ranked[0].id, best.id);
		assert!(ranked.windows(2).all(|w| score(w[0]) >= score(w[1])));
	}

	#[test]
	fn ranking_is_idempotent() {
		let mut once = lens_results(&ENTITIES, FilterKey::All, &Query::default());
		let first = ids(&once);
		rank(&mut once);
		assert_eq!(ids(&once), first);
	}

	#[test]
	fn preview_limits_and_defaults() {
		assert_eq!(
			ids(&preview(&ENTITIES, &Query::default(), 3)),
			vec!["seed-oils", "anora", "ai-doom"]
		);
		assert_eq!(ids(&preview(&ENTITIES, &Query::parse("seed oil receipts"), 3)), Vec::<&str>::new());
		assert_eq!(ids(&preview(&ENTITIES, &Query::parse("seed oils"), 3)), vec!["seed-oils"]);
	}

	proptest! {
		#[test]
		fn search_never_widens_the_filter(raw in "[a-z ]{0,12}", k in 0usize..5) {
			let key = FilterKey::iter().nth(k).unwrap();
			let filtered = ids(&filter_entities(&ENTITIES, key));
			let searched = ids(&search(&ENTITIES, key, &Query::parse(&raw)));
			prop_assert!(searched.iter().all(|id| filtered.contains(id)));
		}
	}
}
