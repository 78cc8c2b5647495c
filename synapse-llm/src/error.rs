use thiserror::Error;

/// Coarse failure class used by callers to pick a user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    RateLimit,
    Network,
    Unknown,
}

/// Failure of a single request against one model identifier.
#[derive(Debug, Error)]
pub enum AttemptError {
    #[error("model `{model}` rejected the credentials (HTTP {status}): {body}")]
    Authentication {
        model: String,
        status: u16,
        body: String,
    },

    #[error("model `{model}` is rate limited (HTTP 429): {body}")]
    RateLimited { model: String, body: String },

    #[error("network error calling model `{model}`: {message}")]
    Network { model: String, message: String },

    #[error("model `{model}` failed: {message}")]
    Unknown { model: String, message: String },
}

impl AttemptError {
    /// Map a non-success HTTP status to its attempt error.
    pub fn from_status(model: &str, status: u16, body: String) -> Self {
        let model = model.to_owned();
        match status {
            401 | 403 => Self::Authentication {
                model,
                status,
                body,
            },
            429 => Self::RateLimited { model, body },
            _ => Self::Unknown {
                model,
                message: format!("HTTP {status}: {body}"),
            },
        }
    }

    pub fn model(&self) -> &str {
        match self {
            Self::Authentication { model, .. }
            | Self::RateLimited { model, .. }
            | Self::Network { model, .. }
            | Self::Unknown { model, .. } => model,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Authentication { .. } => ErrorCategory::Authentication,
            Self::RateLimited { .. } => ErrorCategory::RateLimit,
            Self::Network { .. } => ErrorCategory::Network,
            Self::Unknown { .. } => ErrorCategory::Unknown,
        }
    }
}

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Every configured model identifier was tried and failed.
    #[error("all {count} configured model(s) failed", count = .attempted.len())]
    AllModelsFailed {
        attempted: Vec<String>,
        #[source]
        last: AttemptError,
    },
}

impl GatewayError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AllModelsFailed { last, .. } => last.category(),
        }
    }

    pub fn last_attempt(&self) -> &AttemptError {
        match self {
            Self::AllModelsFailed { last, .. } => last,
        }
    }
}
