use super::types::Link;

/// Mock attention links between entities. Some endpoints name clusters that
/// are not in the sample dataset yet; consumers drop those.
pub static LINKS: [Link; 12] = [
	link("seed-oils", "ozempic-style", 0.72),
	link("seed-oils", "vibe-shift", 0.41),
	link("seed-oils", "civic-ai", 0.22),
	link("ai-doom", "civic-ai", 0.68),
	link("ai-doom", "anora", 0.36),
	link("ai-doom", "vibe-shift", 0.31),
	link("vibe-shift", "analog-film", 0.77),
	link("analog-film", "cottagecore", 0.52),
	link("analog-film", "ozempic-style", 0.25),
	link("cottagecore", "seed-oils", 0.35),
	link("ozempic-style", "civic-ai", 0.18),
	link("anora", "vibe-shift", 0.43),
];

const fn link(source: &'static str, target: &'static str, weight: f64) -> Link {
	Link {
		source,
		target,
		weight,
	}
}
