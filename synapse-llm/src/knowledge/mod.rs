mod biotech;
mod desci;

pub use biotech::{BIOTECH, BiotechKnowledge};
pub use desci::{DESCI, DesciKnowledge};

use serde::Serialize;
use tracing::warn;

use crate::topic::Topic;

/// A headed block of reference text appended to the system prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnowledgeSection {
    pub heading: &'static str,
    pub body: String,
}

/// Read-only knowledge base shared by every request.
#[derive(Clone, Copy, Debug)]
pub struct KnowledgeStore {
    biotech: &'static BiotechKnowledge,
    desci: &'static DesciKnowledge,
}

impl Default for KnowledgeStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KnowledgeStore {
    pub const fn new(biotech: &'static BiotechKnowledge, desci: &'static DesciKnowledge) -> Self {
        Self { biotech, desci }
    }

    pub fn builtin() -> Self {
        Self::new(&BIOTECH, &DESCI)
    }

    /// Render the section(s) backing `topic`. Only the DeSci overview spans
    /// two blocks (overview and references).
    pub fn sections(&self, topic: Topic) -> Vec<KnowledgeSection> {
        let biotech = self.biotech;
        let desci = self.desci;

        match topic {
            Topic::ProtGps => vec![section(
                "Detailed information about ProtGPS",
                &biotech.core_technology.prot_gps,
            )],
            Topic::GenomicsEngine => vec![section(
                "Detailed information about the Genomics Engine",
                &biotech.core_technology.genomics_engine,
            )],
            Topic::Visualization => vec![section(
                "Detailed information about the Visualization Framework",
                &biotech.core_technology.visualization,
            )],
            Topic::FundingMilestones => vec![section(
                "Detailed information about Funding Milestones",
                &biotech.funding_milestones,
            )],
            Topic::FutureDirections => vec![section(
                "Detailed information about Future Directions",
                &biotech.future_directions,
            )],
            Topic::TechnicalArchitecture => vec![section(
                "Detailed information about Technical Architecture",
                &biotech.technical_architecture,
            )],
            Topic::BiotechOverview => vec![section("General BioTech Overview", &biotech.overview)],
            Topic::DecentralizedFunding => vec![section(
                "Detailed information about Decentralized Funding in DeSci",
                &desci.key_components.decentralized_funding,
            )],
            Topic::OpenAccess => vec![section(
                "Detailed information about Open Access in DeSci",
                &desci.key_components.open_access,
            )],
            Topic::IncentiveAlignment => vec![section(
                "Detailed information about Incentive Alignment in DeSci",
                &desci.key_components.incentive_alignment,
            )],
            Topic::RelationshipWithAi => vec![section(
                "Detailed information about DeSci's Relationship with AI",
                &desci.relationship_with_ai,
            )],
            Topic::RelevanceToBiotech => vec![section(
                "Detailed information about DeSci's Relevance to BioTech",
                &desci.relevance_to_biotech,
            )],
            Topic::DesciOverview => vec![
                section("General DeSci Overview", &desci.overview),
                section("DeSci References", &desci.references),
            ],
        }
    }
}

fn section<T: Serialize + ?Sized>(heading: &'static str, value: &T) -> KnowledgeSection {
    let body = match serde_json::to_string_pretty(value) {
        Ok(body) => body,
        Err(source) => {
            warn!(?source, heading, "failed to render knowledge section");
            String::new()
        }
    };

    KnowledgeSection { heading, body }
}
