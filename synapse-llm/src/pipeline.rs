use tracing::{debug, info};

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::gateway::ModelGateway;
use crate::intent::{DomainFlags, Intent, classify};
use crate::knowledge::KnowledgeStore;
use crate::prompt::{PromptComposer, load_persona_prompt};
use crate::sanitize::replace_brand;

pub const GREETING: &str =
    "I'm Synapse, an AI Doctor designed by Grok AI. How can I assist you today?";
pub const IDENTITY_ANSWER: &str = "I am Synapse, an AI Doctor designed by Grok AI to provide information about medical topics, the BioTech computational biology platform, and Decentralized Science (DeSci).";
pub const CREATOR_ANSWER: &str = "Synapse designed by Grok AI";
pub const MODEL_ANSWER: &str = "I'm Synapse, built with Grok AI! More developments are in the pipeline to enhance my capabilities and knowledge base. I'm designed to provide information about medical topics, the BioTech computational biology platform, and Decentralized Science (DeSci).";

const QUERY_PREVIEW_CHARS: usize = 50;

/// Canned reply for fixed intents; `None` means the query goes to a model.
pub fn canned_answer(intent: Intent) -> Option<&'static str> {
    match intent {
        Intent::Empty => Some(GREETING),
        Intent::IdentityQuestion => Some(IDENTITY_ANSWER),
        Intent::CreatorQuestion => Some(CREATOR_ANSWER),
        Intent::ModelQuestion => Some(MODEL_ANSWER),
        Intent::BrandRedirect | Intent::DomainTopic(_) | Intent::None => None,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerOrigin {
    Fixed(Intent),
    Model(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub origin: AnswerOrigin,
}

/// Classify, enrich, and answer one query. Holds no per-request state.
#[derive(Clone, Debug)]
pub struct ResponsePipeline {
    composer: PromptComposer,
    gateway: ModelGateway,
}

impl ResponsePipeline {
    pub fn new(composer: PromptComposer, gateway: ModelGateway) -> Self {
        Self { composer, gateway }
    }

    pub fn from_config(config: &GatewayConfig) -> anyhow::Result<Self> {
        let persona = load_persona_prompt(&config.persona_path);
        let composer = PromptComposer::new(persona, KnowledgeStore::builtin());
        let gateway = ModelGateway::from_config(config)?;
        Ok(Self::new(composer, gateway))
    }

    pub fn gateway(&self) -> &ModelGateway {
        &self.gateway
    }

    pub async fn respond(&self, query: &str) -> Result<Answer, GatewayError> {
        let intent = classify(query);
        if let Some(text) = canned_answer(intent) {
            debug!(?intent, "answered with canned text");
            return Ok(Answer {
                text: text.to_owned(),
                origin: AnswerOrigin::Fixed(intent),
            });
        }

        let query = replace_brand(query);
        if intent == Intent::BrandRedirect {
            debug!("rewrote forbidden brand in query");
        }

        let flags = DomainFlags::detect(&query);
        let bundle = self.composer.compose(flags, &query);
        info!(
            query = %preview(&query),
            biotech = flags.biotech,
            desci = flags.desci,
            sections = bundle.sections().len(),
            "forwarding query to model gateway"
        );

        let completion = self.gateway.complete(&bundle, &query).await?;
        Ok(Answer {
            text: completion.text,
            origin: AnswerOrigin::Model(completion.model),
        })
    }
}

fn preview(query: &str) -> String {
    let mut chars = query.chars();
    let head: String = chars.by_ref().take(QUERY_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
