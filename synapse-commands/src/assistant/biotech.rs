use synapse_core::{Context, Error};

use crate::CommandMeta;
use crate::assistant::reply::answer_query;

pub const META: CommandMeta = CommandMeta {
    name: "biotech",
    desc: "Get information about the BioTech computational biology platform.",
    category: "knowledge",
    usage: "!biotech <topic>",
};

const FAILURE_MESSAGE: &str =
    "I encountered an error while retrieving information about BioTech. Please try again later.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, poise::ChoiceParameter)]
pub enum BiotechTopic {
    #[name = "Overview"]
    Overview,
    #[name = "ProtGPS"]
    ProtGps,
    #[name = "Genomics Engine"]
    Genomics,
    #[name = "Visualization"]
    Visualization,
    #[name = "Technical Architecture"]
    Architecture,
    #[name = "Funding Milestones"]
    Funding,
    #[name = "Future Directions"]
    Future,
}

impl BiotechTopic {
    /// The question sent to the pipeline for this choice.
    pub fn query(self) -> &'static str {
        match self {
            Self::Overview => {
                "Give me an overview of the BioTech platform. What is it and what does it do?"
            }
            Self::ProtGps => {
                "Explain the ProtGPS component of BioTech. What capabilities does it have for protein analysis?"
            }
            Self::Genomics => {
                "Tell me about the Genomics Analysis Engine in BioTech. What genomic analysis capabilities does it offer?"
            }
            Self::Visualization => {
                "Describe the Interactive Visualization Framework in BioTech. How does it help researchers visualize molecular structures?"
            }
            Self::Architecture => {
                "What is the technical architecture of BioTech? What technologies does it use for the frontend, the backend, and its machine learning?"
            }
            Self::Funding => {
                "Explain the funding milestones for BioTech. What features are planned at each funding level?"
            }
            Self::Future => {
                "What are the future research directions for BioTech? What new capabilities are planned?"
            }
        }
    }
}

#[poise::command(prefix_command, slash_command, category = "Knowledge")]
pub async fn biotech(
    ctx: Context<'_>,
    #[description = "The specific aspect of BioTech you want to learn about"] topic: BiotechTopic,
) -> Result<(), Error> {
    answer_query(ctx, topic.query(), FAILURE_MESSAGE).await
}
