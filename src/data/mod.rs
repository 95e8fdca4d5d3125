//! Compiled-in entity dataset and link table.

mod entities;
mod error;
mod links;
mod types;

use std::collections::HashSet;

use log::{debug, error, info};

pub use entities::ENTITIES;
pub use error::{DatasetError, Result};
pub use links::LINKS;
pub use types::{Entity, EntityType, Link, Metrics, MomentumStatus, Palette, Receipt, ReceiptSource};

/// A borrowed view over an entity collection and its links.
#[derive(Clone, Copy, Debug)]
pub struct Dataset {
	/// Entities in display order.
	pub entities: &'static [Entity],
	/// Weighted links; endpoints may dangle.
	pub links: &'static [Link],
}

impl Dataset {
	/// The shipped sample data.
	pub fn sample() -> Self {
		Self {
			entities: &ENTITIES,
			links: &LINKS,
		}
	}

	/// Look up an entity by id.
	pub fn entity(&self, id: &str) -> Option<&'static Entity> {
		self.entities.iter().find(|e| e.id == id)
	}

	/// Links whose endpoints both resolve.
	pub fn resolved_links(&self) -> impl Iterator<Item = &'static Link> + '_ {
		self.links
			.iter()
			.filter(|l| self.entity(l.source).is_some() && self.entity(l.target).is_some())
	}

	/// Links with at least one unknown endpoint.
	pub fn dangling_links(&self) -> impl Iterator<Item = &'static Link> + '_ {
		self.links
			.iter()
			.filter(|l| self.entity(l.source).is_none() || self.entity(l.target).is_none())
	}

	/// Every invariant violation, in dataset order.
	pub fn violations(&self) -> Vec<DatasetError> {
		let mut errors = Vec::new();
		let mut seen = HashSet::new();

		for entity in self.entities {
			if !seen.insert(entity.id) {
				errors.push(DatasetError::DuplicateId(entity.id));
			}
			let m = &entity.metrics;
			for (metric, value, min, max) in [
				("attention", m.attention, 0.0, 1.0),
				("momentum", m.momentum, -1.0, 1.0),
				("controversy", m.controversy, 0.0, 1.0),
			] {
				// NaN fails the range check as well.
				if !(min..=max).contains(&value) {
					errors.push(DatasetError::MetricOutOfRange {
						id: entity.id,
						metric,
						value,
						min,
						max,
					});
				}
			}
			for (index, &value) in entity.sparkline.iter().enumerate() {
				if value < 0.0 {
					errors.push(DatasetError::NegativeSample {
						id: entity.id,
						index,
						value,
					});
				}
			}
		}

		for link in self.links {
			if !(0.0..=1.0).contains(&link.weight) {
				errors.push(DatasetError::LinkWeightOutOfRange {
					from: link.source,
					to: link.target,
					weight: link.weight,
				});
			}
		}
		errors
	}

	/// Check every invariant and report through the logger: each violation
	/// at `error`, each dropped link at `debug`, a summary at `info`.
	/// Returns the first violation.
	pub fn validate(&self) -> Result<()> {
		let errors = self.violations();
		for err in &errors {
			error!("dataset: {err}");
		}
		for link in self.dangling_links() {
			debug!(
				"dataset: dropping link {} -> {} (unknown endpoint)",
				link.source, link.target
			);
		}
		info!(
			"dataset loaded: {} entities, {} links, {} violations",
			self.entities.len(),
			self.links.len(),
			errors.len()
		);
		match errors.into_iter().next() {
			Some(err) => Err(err),
			None => Ok(()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	static BROKEN: [Entity; 2] = [
		Entity {
			id: "dup",
			name: "Broken",
			kind: EntityType::Topic,
			summary: "",
			metrics: Metrics {
				attention: 1.2,
				momentum: -1.0,
				controversy: 0.0,
			},
			sparkline: &[1.0, -3.0],
			momentum_status: MomentumStatus::Steady,
			last_pulse: "",
			communities: &[],
			adjacency: &[],
			receipts: &[],
			related: &[],
			palette: Palette("#000000", "#ffffff"),
		},
		Entity {
			id: "dup",
			name: "Twin",
			kind: EntityType::Topic,
			summary: "",
			metrics: Metrics {
				attention: 0.0,
				momentum: 0.0,
				controversy: 0.0,
			},
			sparkline: &[],
			momentum_status: MomentumStatus::Steady,
			last_pulse: "",
			communities: &[],
			adjacency: &[],
			receipts: &[],
			related: &[],
			palette: Palette("#000000", "#ffffff"),
		},
	];

	static HEAVY: [Link; 1] = [Link {
		source: "dup",
		target: "dup",
		weight: 1.5,
	}];

	#[test]
	fn shipped_dataset_is_valid() {
		assert_eq!(Dataset::sample().violations(), Vec::new());
		assert!(Dataset::sample().validate().is_ok());
	}

	#[test]
	fn ids_are_unique() {
		let ids: HashSet<_> = ENTITIES.iter().map(|e| e.id).collect();
		assert_eq!(ids.len(), ENTITIES.len());
	}

	#[test]
	fn reports_every_violation() {
		let data = Dataset {
			entities: &BROKEN,
			links: &HEAVY,
		};
		assert_eq!(
			data.violations(),
			vec![
				DatasetError::MetricOutOfRange {
					id: "dup",
					metric: "attention",
					value: 1.2,
					min: 0.0,
					max: 1.0,
				},
				DatasetError::NegativeSample {
					id: "dup",
					index: 1,
					value: -3.0,
				},
				DatasetError::DuplicateId("dup"),
				DatasetError::LinkWeightOutOfRange {
					from: "dup",
					to: "dup",
					weight: 1.5,
				},
			]
		);
		assert!(matches!(
			data.validate(),
			Err(DatasetError::MetricOutOfRange { metric: "attention", .. })
		));
	}

	#[test]
	fn dangling_links_are_split_out() {
		let data = Dataset::sample();
		let dangling: Vec<_> = data.dangling_links().collect();
		assert_eq!(dangling.len(), 6);
		assert!(dangling.iter().all(|l| {
			[l.source, l.target]
				.iter()
				.any(|id| *id == "civic-ai" || *id == "analog-film")
		}));
		assert_eq!(data.resolved_links().count(), LINKS.len() - 6);
	}

	#[test]
	fn closed_sets_use_lowercase_wire_names() {
		assert_eq!("ideology".parse::<EntityType>(), Ok(EntityType::Ideology));
		assert_eq!(MomentumStatus::Cooling.to_string(), "cooling");
		assert_eq!(ReceiptSource::Youtube.to_string(), "youtube");
		assert_eq!(ReceiptSource::Twitter.label(), "X / Twitter");
		assert!("podcast".parse::<ReceiptSource>().is_err());
	}

	#[test]
	fn link_other_endpoint() {
		let link = &LINKS[0];
		assert_eq!(link.other("seed-oils"), Some("ozempic-style"));
		assert_eq!(link.other("ozempic-style"), Some("seed-oils"));
		assert_eq!(link.other("anora"), None);
	}
}
