use crate::sanitize::mentions_brand;
use crate::topic::Domain;

/// What a query is asking for, decided before any external call is made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Blank input; answered with the greeting.
    Empty,
    IdentityQuestion,
    CreatorQuestion,
    ModelQuestion,
    /// Mentions the forbidden brand; the query is rewritten before enrichment.
    BrandRedirect,
    DomainTopic(Domain),
    None,
}

const IDENTITY_PHRASES: &[&str] = &[
    "what is your name",
    "what's your name",
    "who are you",
    "your name",
    "what should i call you",
    "how should i address you",
    "what are you called",
    "introduce yourself",
];

const CREATOR_PHRASES: &[&str] = &[
    "who develop",
    "who created",
    "who made",
    "who built",
    "who is your creator",
    "who's your creator",
    "who is your developer",
    "who's your developer",
    "who is your maker",
    "who's your maker",
    "your creator",
    "your developer",
    "your maker",
    "who programmed you",
    "who designed you",
];

const MODEL_PHRASES: &[&str] = &[
    "ai model",
    "which model",
    "what model",
    "which ai",
    "what ai",
    "what are you built with",
];

const BIOTECH_KEYWORDS: &[&str] = &[
    "biotech",
    "protgps",
    "protein analysis",
    "genomic",
    "computational biology",
];

const DESCI_KEYWORDS: &[&str] = &[
    "desci",
    "decentralized science",
    "blockchain science",
    "science dao",
    "molecule dao",
];

fn contains_any(lowered: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| lowered.contains(needle))
}

fn asks_identity(lowered: &str) -> bool {
    contains_any(lowered, IDENTITY_PHRASES)
        || (lowered.contains("what") && lowered.contains("name"))
}

fn asks_creator(lowered: &str) -> bool {
    contains_any(lowered, CREATOR_PHRASES)
}

fn asks_model(lowered: &str) -> bool {
    let interrogative = contains_any(lowered, &["which", "what"]);
    let subject = contains_any(lowered, &["ai", "model", "built with"]);
    let relation = contains_any(lowered, &["using", "powered by", "based on"]);

    (interrogative && subject && relation) || contains_any(lowered, MODEL_PHRASES)
}

/// Independent per-domain enrichment flags; both may be set at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DomainFlags {
    pub biotech: bool,
    pub desci: bool,
}

impl DomainFlags {
    pub fn detect(query: &str) -> Self {
        let lowered = query.to_lowercase();
        Self {
            biotech: contains_any(&lowered, BIOTECH_KEYWORDS),
            desci: contains_any(&lowered, DESCI_KEYWORDS),
        }
    }

    /// Active domains in composition order (BioTech before DeSci).
    pub fn active(self) -> impl Iterator<Item = Domain> {
        [
            self.biotech.then_some(Domain::BioTech),
            self.desci.then_some(Domain::DeSci),
        ]
        .into_iter()
        .flatten()
    }
}

/// Classify `query`; the first matching intent in priority order wins.
pub fn classify(query: &str) -> Intent {
    if query.trim().is_empty() {
        return Intent::Empty;
    }

    let lowered = query.to_lowercase();
    if asks_identity(&lowered) {
        return Intent::IdentityQuestion;
    }
    if asks_creator(&lowered) {
        return Intent::CreatorQuestion;
    }
    if asks_model(&lowered) {
        return Intent::ModelQuestion;
    }
    if mentions_brand(query) {
        return Intent::BrandRedirect;
    }

    DomainFlags::detect(query)
        .active()
        .next()
        .map_or(Intent::None, Intent::DomainTopic)
}
