use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::{ChatRequest, ChatTransport};
use crate::error::AttemptError;

/// What the scripted transport does for one request.
#[derive(Debug)]
pub enum Step {
    Reply(String),
    Status(u16),
    /// The request never produced an HTTP response.
    Network(String),
}

pub fn succeed(text: &str) -> Step {
    Step::Reply(text.to_owned())
}

pub fn fail_status(status: u16) -> Step {
    Step::Status(status)
}

pub fn fail_network(message: &str) -> Step {
    Step::Network(message.to_owned())
}

#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub model: String,
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// In-memory transport that replays scripted steps in order and records calls.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    steps: Mutex<VecDeque<Step>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn models_called(&self) -> Vec<String> {
        self.calls().into_iter().map(|call| call.model).collect()
    }
}

#[async_trait]
impl ChatTransport for ScriptedTransport {
    async fn send(&self, request: &ChatRequest<'_>) -> Result<String, AttemptError> {
        self.calls.lock().expect("calls lock").push(RecordedCall {
            model: request.model.to_owned(),
            system: request.messages[0].content.to_owned(),
            user: request.messages[1].content.to_owned(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        });

        let step = self.steps.lock().expect("steps lock").pop_front();
        match step {
            Some(Step::Reply(text)) => Ok(text),
            Some(Step::Status(status)) => Err(AttemptError::from_status(
                request.model,
                status,
                "scripted failure".to_owned(),
            )),
            Some(Step::Network(message)) => Err(AttemptError::Network {
                model: request.model.to_owned(),
                message,
            }),
            None => Err(AttemptError::Network {
                model: request.model.to_owned(),
                message: "script exhausted".to_owned(),
            }),
        }
    }
}
