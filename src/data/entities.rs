use super::types::{
	Entity, EntityType, Metrics, MomentumStatus, Palette, Receipt, ReceiptSource,
};

/// Hand-authored sample entities, in display order.
pub static ENTITIES: [Entity; 6] = [
	Entity {
		id: "seed-oils",
		name: "Seed Oils Debate",
		kind: EntityType::Topic,
		summary: "Nutrition creators, biohackers, and wellness moms reframing seed oils as the villain of metabolic health, with counter-skeptics from evidence-based medicine threads.",
		metrics: Metrics {
			attention: 0.86,
			momentum: 0.34,
			controversy: 0.68,
		},
		sparkline: &[24.0, 28.0, 35.0, 40.0, 49.0, 61.0, 58.0],
		momentum_status: MomentumStatus::Surging,
		last_pulse: "Seen in 312 new receipts past 48h",
		communities: &["r/Supplements", "WellnessTok", "Functional MDs"],
		adjacency: &["Mediterranean Diet", "Ultra-processed", "Blue Zones"],
		receipts: &[
			Receipt {
				source: ReceiptSource::Reddit,
				title: "Nutrition science AMA",
				snippet: "Cardio residents debating whether linoleic acid avoidance is just vibes or actually moving biomarkers.",
				url: "https://reddit.com/r/nutrition",
				date: "2025-02-19",
				context: "r/nutrition",
			},
			Receipt {
				source: ReceiptSource::Youtube,
				title: "Huberman Lab clip",
				snippet: "Q&A segment where a caller cites seed oils as the hidden saboteur of HRV, chat explodes.",
				url: "https://youtube.com/watch?v=seed-oils",
				date: "2025-02-18",
				context: "Huberman Lab",
			},
		],
		related: &["Carnivore diet", "Metabolic flexibility", "Cold plunges"],
		palette: Palette("#fcd34d", "#fda4af"),
	},
	Entity {
		id: "anora",
		name: "Anora (Film)",
		kind: EntityType::Film,
		summary: "A24's Sundance breakout mixing Brooklyn nightlife with class satire; film Twitter treats it as a referendum on messy female leads.",
		metrics: Metrics {
			attention: 0.62,
			momentum: 0.21,
			controversy: 0.44,
		},
		sparkline: &[10.0, 12.0, 14.0, 29.0, 41.0, 47.0, 43.0],
		momentum_status: MomentumStatus::Surging,
		last_pulse: "Critics roundups + Letterboxd meme reviews",
		communities: &["Letterboxd", "NYC Film Twitter", "TikTok Film Essays"],
		adjacency: &["Bottoms", "Euphoria aesthetics", "Succession fans"],
		receipts: &[
			Receipt {
				source: ReceiptSource::Twitter,
				title: "Critic thread",
				snippet: "Film critics mapping Anora to the 'Coyote Ugly' lineage of NYC worker fantasies.",
				url: "https://twitter.com/anora-thread",
				date: "2025-02-20",
				context: "@filmwithgrace",
			},
			Receipt {
				source: ReceiptSource::Reddit,
				title: "r/movies discussion",
				snippet: "Viewers compare Anora's class politics to Paradise Suite; thread devolves into satire vs sincerity debate.",
				url: "https://reddit.com/r/movies",
				date: "2025-02-18",
				context: "r/movies",
			},
		],
		related: &["Dasha Nekrasova", "Sofia Coppola", "Messy girl canon"],
		palette: Palette("#d8b4fe", "#f9a8d4"),
	},
	Entity {
		id: "ai-doom",
		name: "AI Doom vs e/acc",
		kind: EntityType::Ideology,
		summary: "Accelerationists and doomers trading threads about AI takeover timelines, with venture guys trying to mediate via governance compacts.",
		metrics: Metrics {
			attention: 0.91,
			momentum: 0.12,
			controversy: 0.82,
		},
		sparkline: &[52.0, 60.0, 63.0, 65.0, 70.0, 75.0, 74.0],
		momentum_status: MomentumStatus::Steady,
		last_pulse: "Policy letter by OpenAI alumni resurfaced",
		communities: &["LessWrong", "VC X", "EA Forum"],
		adjacency: &["Frontier labs", "AI safety", "Effective acceleration"],
		receipts: &[
			Receipt {
				source: ReceiptSource::Twitter,
				title: "Governance thread",
				snippet: "Marc Andreessen replies to doom timeline with e/acc doctrine bullet list.",
				url: "https://twitter.com/a16z",
				date: "2025-02-17",
				context: "@pmarca",
			},
			Receipt {
				source: ReceiptSource::Rss,
				title: "Substack essay",
				snippet: "Policy analyst proposes 'pause bubbles' where labs flip between sprint and moratorium windows.",
				url: "https://substack.com/aidiscourse",
				date: "2025-02-16",
				context: "Simulacra Notes",
			},
		],
		related: &["OpenAI board drama", "Techno-optimism", "AI existential risk"],
		palette: Palette("#67e8f9", "#6ee7b7"),
	},
	Entity {
		id: "vibe-shift",
		name: "Vibe Shift Economy",
		kind: EntityType::Topic,
		summary: "Macro takes + meme accounts explaining the 2025 vibe shift: small venues, analog hobbies, and the revenge of earnestness.",
		metrics: Metrics {
			attention: 0.48,
			momentum: 0.27,
			controversy: 0.22,
		},
		sparkline: &[9.0, 11.0, 15.0, 19.0, 25.0, 31.0, 36.0],
		momentum_status: MomentumStatus::Surging,
		last_pulse: "Thread about indie sleaze 2.0 hitting LinkedIn",
		communities: &["HighSnobiety", "Indie sleaze", "Brand strategists"],
		adjacency: &["Analog revival", "Third spaces", "2000s nostalgia"],
		receipts: &[
			Receipt {
				source: ReceiptSource::Rss,
				title: "Brand memo leak",
				snippet: "Deck claiming 'earnest cringe' is the new premium marketing tone, widely mocked.",
				url: "https://medium.com/vibeshift",
				date: "2025-02-15",
				context: "Brand Deck Leak",
			},
			Receipt {
				source: ReceiptSource::Twitter,
				title: "Creator thread",
				snippet: "@workweek rebundles vibe shift into a new KPI: joy-per-follower.",
				url: "https://twitter.com/workweek",
				date: "2025-02-18",
				context: "@workweek",
			},
		],
		related: &["Analog film", "Indie sleaze", "Third place revival"],
		palette: Palette("#7dd3fc", "#a5b4fc"),
	},
	Entity {
		id: "cottagecore",
		name: "Cottagecore Supply Chain",
		kind: EntityType::Aesthetic,
		summary: "The pastoral internet aesthetic graduating into real supply chains: heirloom seeds, sourdough tour startups, and Etsy regulation fights.",
		metrics: Metrics {
			attention: 0.37,
			momentum: -0.04,
			controversy: 0.19,
		},
		sparkline: &[18.0, 20.0, 19.0, 17.0, 16.0, 15.0, 15.0],
		momentum_status: MomentumStatus::Cooling,
		last_pulse: "Newsletters calling peak cottagecore",
		communities: &["Homestead YouTube", "Goblin Mode descendants", "Slow fashion"],
		adjacency: &["Regenerative ag", "Slow living", "Fairycore"],
		receipts: &[
			Receipt {
				source: ReceiptSource::Youtube,
				title: "Farm vlog",
				snippet: "Creator shares the math behind running a 'fantasy B&B', kicks off realism discourse.",
				url: "https://youtube.com/watch?v=cottagecore",
				date: "2025-02-14",
				context: "Moonrise Farms",
			},
			Receipt {
				source: ReceiptSource::Reddit,
				title: "r/femalefashionadvice thread",
				snippet: "Users question whether linen hauls without labor transparency still count as cottagecore.",
				url: "https://reddit.com/r/femalefashionadvice",
				date: "2025-02-13",
				context: "r/FFA",
			},
		],
		related: &["Fairycore", "Slow fashion", "Fantasy B&B"],
		palette: Palette("#a7f3d0", "#d9f99d"),
	},
	Entity {
		id: "ozempic-style",
		name: "Ozempic Aesthetic",
		kind: EntityType::Community,
		summary: "Semaglutide users sharing wardrobe swaps, skin elasticity hacks, and etiquette for explaining drastic body changes at work.",
		metrics: Metrics {
			attention: 0.58,
			momentum: 0.05,
			controversy: 0.51,
		},
		sparkline: &[22.0, 27.0, 33.0, 39.0, 37.0, 42.0, 41.0],
		momentum_status: MomentumStatus::Steady,
		last_pulse: "#ozempicstyle playlist crosses 12M views",
		communities: &["GLP-1 Reddit", "Corporate TikTok", "DermTok"],
		adjacency: &["Compassionate HR", "Metabolic clinic boom", "Insurance hacks"],
		receipts: &[
			Receipt {
				source: ReceiptSource::Reddit,
				title: "Weekly check-in",
				snippet: "GLP-1 users exchange tips on tailoring and nutrient tracking while on reduced appetite.",
				url: "https://reddit.com/r/Ozempic",
				date: "2025-02-16",
				context: "r/Ozempic",
			},
			Receipt {
				source: ReceiptSource::Twitter,
				title: "Work etiquette thread",
				snippet: "HR pros debate if weight-loss conversations belong in ERGs or wellness budgets.",
				url: "https://twitter.com/hrthread",
				date: "2025-02-17",
				context: "@thepeopleops",
			},
		],
		related: &["GLP-1 economy", "Metabolic clinics", "Corporate wellness"],
		palette: Palette("#fecdd3", "#fed7aa"),
	},
];
