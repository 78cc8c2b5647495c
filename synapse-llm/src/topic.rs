/// Knowledge domains the bot can enrich a prompt with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    BioTech,
    DeSci,
}

/// One facet of a knowledge domain; each maps to one or more rendered sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    ProtGps,
    GenomicsEngine,
    Visualization,
    FundingMilestones,
    FutureDirections,
    TechnicalArchitecture,
    BiotechOverview,
    DecentralizedFunding,
    OpenAccess,
    IncentiveAlignment,
    RelationshipWithAi,
    RelevanceToBiotech,
    DesciOverview,
}

/// Keyword predicate over a lower-cased query.
#[derive(Clone, Copy, Debug)]
pub enum Matcher {
    AnyOf(&'static [&'static str]),
    AllOf(&'static [&'static str]),
}

impl Matcher {
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Self::AnyOf(keywords) => keywords.iter().any(|keyword| lowered.contains(keyword)),
            Self::AllOf(keywords) => keywords.iter().all(|keyword| lowered.contains(keyword)),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TopicRule {
    pub matcher: Matcher,
    pub topic: Topic,
}

const fn rule(matcher: Matcher, topic: Topic) -> TopicRule {
    TopicRule { matcher, topic }
}

/// Evaluated top to bottom; the first hit wins.
pub const BIOTECH_RULES: &[TopicRule] = &[
    rule(Matcher::AnyOf(&["protgps"]), Topic::ProtGps),
    rule(Matcher::AnyOf(&["genomic"]), Topic::GenomicsEngine),
    rule(Matcher::AnyOf(&["visualization", "3d"]), Topic::Visualization),
    rule(Matcher::AnyOf(&["funding", "milestone"]), Topic::FundingMilestones),
    rule(Matcher::AnyOf(&["future", "roadmap"]), Topic::FutureDirections),
    rule(
        Matcher::AnyOf(&["technical", "architecture"]),
        Topic::TechnicalArchitecture,
    ),
];

/// Evaluated top to bottom; the first hit wins.
pub const DESCI_RULES: &[TopicRule] = &[
    rule(
        Matcher::AnyOf(&["funding", "dao", "token"]),
        Topic::DecentralizedFunding,
    ),
    rule(Matcher::AnyOf(&["open access", "data sharing"]), Topic::OpenAccess),
    rule(Matcher::AnyOf(&["incentive", "reward"]), Topic::IncentiveAlignment),
    rule(
        Matcher::AnyOf(&["ai", "artificial intelligence"]),
        Topic::RelationshipWithAi,
    ),
    rule(Matcher::AllOf(&["biotech", "desci"]), Topic::RelevanceToBiotech),
];

impl Domain {
    pub fn rules(self) -> &'static [TopicRule] {
        match self {
            Self::BioTech => BIOTECH_RULES,
            Self::DeSci => DESCI_RULES,
        }
    }

    pub fn fallback(self) -> Topic {
        match self {
            Self::BioTech => Topic::BiotechOverview,
            Self::DeSci => Topic::DesciOverview,
        }
    }
}

/// Pick the most specific topic of `domain` that `query` asks about.
pub fn select_topic(domain: Domain, query: &str) -> Topic {
    let lowered = query.to_lowercase();
    domain
        .rules()
        .iter()
        .find(|rule| rule.matcher.matches(&lowered))
        .map_or(domain.fallback(), |rule| rule.topic)
}

#[cfg(test)]
mod tests {
    use super::{Domain, Topic, select_topic};

    #[test]
    fn biotech_rules_follow_priority_order() {
        assert_eq!(select_topic(Domain::BioTech, "tell me about ProtGPS"), Topic::ProtGps);
        assert_eq!(
            select_topic(Domain::BioTech, "ProtGPS genomic funding roadmap"),
            Topic::ProtGps
        );
        assert_eq!(
            select_topic(Domain::BioTech, "genomic funding"),
            Topic::GenomicsEngine
        );
        assert_eq!(
            select_topic(Domain::BioTech, "BioTech 3D viewer"),
            Topic::Visualization
        );
        assert_eq!(
            select_topic(Domain::BioTech, "biotech milestone plans"),
            Topic::FundingMilestones
        );
        assert_eq!(
            select_topic(Domain::BioTech, "biotech roadmap"),
            Topic::FutureDirections
        );
        assert_eq!(
            select_topic(Domain::BioTech, "biotech architecture"),
            Topic::TechnicalArchitecture
        );
    }

    #[test]
    fn biotech_falls_back_to_overview() {
        assert_eq!(
            select_topic(Domain::BioTech, "what is biotech?"),
            Topic::BiotechOverview
        );
    }

    #[test]
    fn desci_rules_follow_priority_order() {
        assert_eq!(
            select_topic(Domain::DeSci, "how does molecule dao fund desci"),
            Topic::DecentralizedFunding
        );
        assert_eq!(
            select_topic(Domain::DeSci, "DeSci open access"),
            Topic::OpenAccess
        );
        assert_eq!(
            select_topic(Domain::DeSci, "desci reward models"),
            Topic::IncentiveAlignment
        );
        assert_eq!(
            select_topic(Domain::DeSci, "DeSci and AI"),
            Topic::RelationshipWithAi
        );
        assert_eq!(
            select_topic(Domain::DeSci, "how does desci relate to biotech"),
            Topic::RelevanceToBiotech
        );
    }

    #[test]
    fn desci_relevance_requires_both_keywords() {
        assert_eq!(
            select_topic(Domain::DeSci, "decentralized science overview"),
            Topic::DesciOverview
        );
    }
}
