use std::sync::Arc;

use anyhow::bail;
use tracing::{info, warn};

use crate::client::{ChatRequest, ChatTransport, MistralTransport};
use crate::config::{GatewayConfig, GenerationParams};
use crate::error::{AttemptError, GatewayError};
use crate::prompt::PromptBundle;
use crate::sanitize::replace_brand;

/// Sanitized model output together with the identifier that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    pub model: String,
    pub text: String,
}

/// Tries each model identifier in order, one attempt apiece, until one succeeds.
#[derive(Clone, Debug)]
pub struct ModelGateway {
    transport: Arc<dyn ChatTransport>,
    models: Arc<[String]>,
    params: GenerationParams,
}

impl ModelGateway {
    pub fn new(
        transport: Arc<dyn ChatTransport>,
        models: Vec<String>,
        params: GenerationParams,
    ) -> anyhow::Result<Self> {
        if models.is_empty() {
            bail!("model gateway needs at least one model identifier");
        }

        Ok(Self {
            transport,
            models: models.into(),
            params,
        })
    }

    pub fn from_config(config: &GatewayConfig) -> anyhow::Result<Self> {
        let transport = MistralTransport::new(config)?;
        Self::new(Arc::new(transport), config.models.clone(), config.params)
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub async fn complete(
        &self,
        bundle: &PromptBundle<'_>,
        query: &str,
    ) -> Result<Completion, GatewayError> {
        let system = bundle.render();
        let mut last_error = None;

        for model in self.models.iter() {
            info!(model = %model, "requesting chat completion");
            let request = ChatRequest::new(
                model,
                &system,
                query,
                self.params.max_tokens,
                self.params.temperature,
            );

            match self.transport.send(&request).await {
                Ok(text) => {
                    info!(model = %model, "chat completion succeeded");
                    return Ok(Completion {
                        model: model.clone(),
                        text: replace_brand(&text).into_owned(),
                    });
                }
                Err(error) => {
                    warn!(
                        model = %model,
                        category = ?error.category(),
                        %error,
                        "model attempt failed; trying next model if available"
                    );
                    last_error = Some(error);
                }
            }
        }

        // `new` rejects an empty list, so at least one attempt was made.
        let last = last_error.unwrap_or_else(|| AttemptError::Unknown {
            model: String::new(),
            message: "no model identifiers configured".to_owned(),
        });

        Err(GatewayError::AllModelsFailed {
            attempted: self.models.to_vec(),
            last,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::ModelGateway;
    use crate::config::GenerationParams;
    use crate::error::{ErrorCategory, GatewayError};
    use crate::intent::DomainFlags;
    use crate::prompt::{PromptComposer, SANITIZATION_REMINDER};
    use crate::testing::{ScriptedTransport, fail_network, fail_status, succeed};

    fn models(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_owned()).collect()
    }

    #[tokio::test]
    async fn falls_back_in_order_until_a_model_succeeds() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            fail_status(500),
            fail_status(429),
            succeed("BioFusion? You mean biofusion... BioTech!"),
        ]));
        let gateway = ModelGateway::new(
            transport.clone(),
            models(&["m1", "m2", "m3"]),
            GenerationParams::default(),
        )
        .expect("gateway");
        let composer = PromptComposer::default();
        let bundle = composer.compose(DomainFlags::default(), "hello");

        let completion = gateway.complete(&bundle, "hello").await.expect("completion");

        assert_eq!(completion.model, "m3");
        assert_eq!(completion.text, "BioTech? You mean BioTech... BioTech!");
        assert_eq!(transport.models_called(), vec!["m1", "m2", "m3"]);
    }

    #[tokio::test]
    async fn stops_at_the_first_success() {
        let transport = Arc::new(ScriptedTransport::new(vec![succeed("ok")]));
        let gateway = ModelGateway::new(
            transport.clone(),
            models(&["m1", "m2"]),
            GenerationParams::default(),
        )
        .expect("gateway");
        let composer = PromptComposer::default();
        let bundle = composer.compose(DomainFlags::default(), "hi");

        gateway.complete(&bundle, "hi").await.expect("completion");

        assert_eq!(transport.models_called(), vec!["m1"]);
    }

    #[tokio::test]
    async fn reports_the_last_failure_when_every_model_fails() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            fail_status(500),
            fail_status(401),
        ]));
        let gateway = ModelGateway::new(
            transport.clone(),
            models(&["m1", "m2"]),
            GenerationParams::default(),
        )
        .expect("gateway");
        let composer = PromptComposer::default();
        let bundle = composer.compose(DomainFlags::default(), "hi");

        let error = gateway.complete(&bundle, "hi").await.expect_err("should fail");

        let GatewayError::AllModelsFailed { attempted, last } = &error;
        assert_eq!(attempted, &vec!["m1".to_owned(), "m2".to_owned()]);
        assert_eq!(last.model(), "m2");
        assert_eq!(error.category(), ErrorCategory::Authentication);
        assert_eq!(transport.models_called(), vec!["m1", "m2"]);
    }

    #[tokio::test]
    async fn network_failures_advance_to_the_next_model() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            fail_network("connection reset by peer"),
            succeed("Rest and fluids."),
        ]));
        let gateway = ModelGateway::new(
            transport.clone(),
            models(&["m1", "m2"]),
            GenerationParams::default(),
        )
        .expect("gateway");
        let composer = PromptComposer::default();
        let bundle = composer.compose(DomainFlags::default(), "flu?");

        let completion = gateway.complete(&bundle, "flu?").await.expect("completion");

        assert_eq!(completion.model, "m2");
        assert_eq!(completion.text, "Rest and fluids.");
        assert_eq!(transport.models_called(), vec!["m1", "m2"]);
    }

    #[tokio::test]
    async fn trailing_network_failure_sets_the_error_category() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            fail_status(429),
            fail_network("request timed out after 30s"),
        ]));
        let gateway = ModelGateway::new(
            transport.clone(),
            models(&["m1", "m2"]),
            GenerationParams::default(),
        )
        .expect("gateway");
        let composer = PromptComposer::default();
        let bundle = composer.compose(DomainFlags::default(), "flu?");

        let error = gateway.complete(&bundle, "flu?").await.expect_err("should fail");

        assert_eq!(error.category(), ErrorCategory::Network);
        assert_eq!(error.last_attempt().model(), "m2");
        assert_eq!(transport.models_called(), vec!["m1", "m2"]);
    }

    #[tokio::test]
    async fn sends_composed_prompt_and_query() {
        let transport = Arc::new(ScriptedTransport::new(vec![succeed("ok")]));
        let params = GenerationParams {
            max_tokens: 123,
            temperature: 0.1,
        };
        let gateway =
            ModelGateway::new(transport.clone(), models(&["m1"]), params).expect("gateway");
        let composer = PromptComposer::new("persona", Default::default());
        let bundle = composer.compose(DomainFlags::default(), "what is a fever?");

        gateway
            .complete(&bundle, "what is a fever?")
            .await
            .expect("completion");

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].system, format!("persona\n\n{SANITIZATION_REMINDER}"));
        assert_eq!(calls[0].user, "what is a fever?");
        assert_eq!(calls[0].max_tokens, 123);
        assert_eq!(calls[0].temperature, 0.1);
    }

    #[test]
    fn rejects_an_empty_model_list() {
        let transport = Arc::new(ScriptedTransport::new(Vec::new()));
        assert!(ModelGateway::new(transport, Vec::new(), GenerationParams::default()).is_err());
    }
}
