use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context as _, bail};
use secrecy::SecretString;

use crate::prompt::DEFAULT_PERSONA_PATH;

pub const DEFAULT_ENDPOINT: &str = "https://api.mistral.ai/v1/chat/completions";
pub const DEFAULT_MODELS: &[&str] = &[
    "mistral-large-latest",
    "mistral-large",
    "mistral-medium",
    "mistral-small",
];
pub const DEFAULT_MAX_TOKENS: u32 = 800;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Fixed sampling parameters sent with every completion request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

#[derive(Debug)]
pub struct GatewayConfig {
    pub api_key: SecretString,
    pub endpoint: String,
    /// Tried in order; never empty.
    pub models: Vec<String>,
    pub params: GenerationParams,
    /// Deadline for one model attempt. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub persona_path: PathBuf,
}

impl GatewayConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let api_key = var("MISTRAL_API_KEY").context("MISTRAL_API_KEY must be set")?;
        let endpoint = var("MISTRAL_API_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned());

        let models = match var("MISTRAL_MODELS") {
            Some(raw) => parse_model_list(&raw),
            None => DEFAULT_MODELS.iter().map(|model| (*model).to_owned()).collect(),
        };
        if models.is_empty() {
            bail!("MISTRAL_MODELS must name at least one model");
        }

        let max_tokens = match var("MISTRAL_MAX_TOKENS") {
            Some(raw) => raw
                .parse::<u32>()
                .with_context(|| format!("MISTRAL_MAX_TOKENS is not a valid integer: `{raw}`"))?,
            None => DEFAULT_MAX_TOKENS,
        };
        let temperature = match var("MISTRAL_TEMPERATURE") {
            Some(raw) => raw
                .parse::<f64>()
                .with_context(|| format!("MISTRAL_TEMPERATURE is not a valid number: `{raw}`"))?,
            None => DEFAULT_TEMPERATURE,
        };
        let timeout = match var("MISTRAL_TIMEOUT_SECONDS") {
            Some(raw) => {
                let seconds = raw.parse::<u64>().with_context(|| {
                    format!("MISTRAL_TIMEOUT_SECONDS is not a valid integer: `{raw}`")
                })?;
                Some(Duration::from_secs(seconds)).filter(|timeout| !timeout.is_zero())
            }
            None => None,
        };

        let persona_path = var("SYNAPSE_SYSTEM_PROMPT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PERSONA_PATH));

        Ok(Self {
            api_key: SecretString::from(api_key),
            endpoint,
            models,
            params: GenerationParams {
                max_tokens,
                temperature,
            },
            timeout,
            persona_path,
        })
    }
}

fn parse_model_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|model| !model.is_empty())
        .map(str::to_owned)
        .collect()
}
