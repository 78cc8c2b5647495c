use synapse_core::{Context, Error};

use crate::CommandMeta;
use crate::assistant::reply::answer_query;

pub const META: CommandMeta = CommandMeta {
    name: "desci",
    desc: "Get information about Decentralized Science (DeSci) and its importance.",
    category: "knowledge",
    usage: "!desci <topic>",
};

const FAILURE_MESSAGE: &str =
    "I encountered an error while retrieving information about DeSci. Please try again later.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, poise::ChoiceParameter)]
pub enum DesciTopic {
    #[name = "Overview"]
    Overview,
    #[name = "Decentralized Funding"]
    Funding,
    #[name = "Open Access"]
    OpenAccess,
    #[name = "Incentive Alignment"]
    Incentives,
    #[name = "Relationship with AI"]
    Ai,
    #[name = "Relevance to BioTech"]
    Biotech,
    #[name = "References"]
    References,
}

impl DesciTopic {
    pub fn query(self) -> &'static str {
        match self {
            Self::Overview => {
                "What is Decentralized Science (DeSci)? Give me an overview of its key concepts and importance."
            }
            Self::Funding => {
                "Explain how decentralized funding works in DeSci. What are some examples of decentralized funding for scientific research?"
            }
            Self::OpenAccess => {
                "How does DeSci promote open access and data sharing in scientific research?"
            }
            Self::Incentives => {
                "Explain incentive alignment in DeSci. How does it create better incentives for scientists?"
            }
            Self::Ai => {
                "What is the relationship between DeSci and AI? How do they complement each other?"
            }
            Self::Biotech => {
                "How is DeSci relevant to the BioTech platform? What connections exist between them?"
            }
            Self::References => "Provide references and resources for learning more about DeSci.",
        }
    }
}

#[poise::command(prefix_command, slash_command, category = "Knowledge")]
pub async fn desci(
    ctx: Context<'_>,
    #[description = "The specific aspect of DeSci you want to learn about"] topic: DesciTopic,
) -> Result<(), Error> {
    answer_query(ctx, topic.query(), FAILURE_MESSAGE).await
}

#[cfg(test)]
mod tests {
    use synapse_llm::pipeline::canned_answer;
    use synapse_llm::topic::{Domain, Topic, select_topic};
    use synapse_llm::{DomainFlags, classify};

    use super::DesciTopic;

    #[test]
    fn every_choice_reaches_its_knowledge_section() {
        let expected = [
            (DesciTopic::Overview, Topic::DesciOverview),
            (DesciTopic::Funding, Topic::DecentralizedFunding),
            (DesciTopic::OpenAccess, Topic::OpenAccess),
            (DesciTopic::Incentives, Topic::IncentiveAlignment),
            (DesciTopic::Ai, Topic::RelationshipWithAi),
            (DesciTopic::Biotech, Topic::RelevanceToBiotech),
            (DesciTopic::References, Topic::DesciOverview),
        ];

        for (choice, topic) in expected {
            let query = choice.query();
            assert_eq!(canned_answer(classify(query)), None, "{choice:?}");
            assert!(DomainFlags::detect(query).desci, "{choice:?}");
            assert_eq!(select_topic(Domain::DeSci, query), topic, "{choice:?}");
        }
    }
}
