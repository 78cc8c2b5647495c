use std::sync::Arc;

use synapse_llm::ResponsePipeline;

pub type Error = anyhow::Error;

#[derive(Clone, Debug)]
pub struct Data {
    pub pipeline: Arc<ResponsePipeline>,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
