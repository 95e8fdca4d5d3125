//! Aggregates shown around the bubble map and on the home page.

use strum::IntoEnumIterator;

use crate::data::{Entity, EntityType};

use super::filter::FilterKey;

/// Summary of the entities currently on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisibleStats {
	/// Visible entities.
	pub count: usize,
	/// Mean momentum.
	pub momentum: f64,
	/// Mean controversy.
	pub controversy: f64,
}

/// Count and mean metrics; all zero for an empty set.
pub fn visible_stats<'a>(visible: impl IntoIterator<Item = &'a Entity>) -> VisibleStats {
	let (count, momentum, controversy) = visible
		.into_iter()
		.fold((0usize, 0.0, 0.0), |(n, m, c), e| {
			(n + 1, m + e.metrics.momentum, c + e.metrics.controversy)
		});
	if count == 0 {
		return VisibleStats::default();
	}
	VisibleStats {
		count,
		momentum: momentum / count as f64,
		controversy: controversy / count as f64,
	}
}

/// How many entities each filter key admits, in [`FilterKey`] order.
pub fn filter_counts(entities: &[Entity]) -> Vec<(FilterKey, usize)> {
	FilterKey::iter()
		.map(|key| (key, entities.iter().filter(|e| key.matches(e)).count()))
		.collect()
}

/// One row of the entity type legend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegendEntry {
	/// Entity type.
	pub kind: EntityType,
	/// Entities of this type.
	pub count: usize,
	/// Primary palette colour of the first entity of this type.
	pub color: &'static str,
}

/// Entity types in first-seen order with their counts.
pub fn type_legend(entities: &[Entity]) -> Vec<LegendEntry> {
	let mut legend: Vec<LegendEntry> = Vec::new();
	for entity in entities {
		match legend.iter_mut().find(|l| l.kind == entity.kind) {
			Some(entry) => entry.count += 1,
			None => legend.push(LegendEntry {
				kind: entity.kind,
				count: 1,
				color: entity.palette.primary(),
			}),
		}
	}
	legend
}

/// Positive-momentum entities, fastest first, at most `limit`.
pub fn rising(entities: &[Entity], limit: usize) -> Vec<&Entity> {
	let mut list: Vec<&Entity> = entities.iter().filter(|e| e.metrics.momentum > 0.0).collect();
	list.sort_by(|a, b| b.metrics.momentum.total_cmp(&a.metrics.momentum));
	list.truncate(limit);
	list
}
