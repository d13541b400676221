use thiserror::Error;

/// Maximum number of body characters surfaced in an [`DomainError::HttpError`].
pub const HTTP_BODY_SNIPPET_CHARS: usize = 100;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration incomplete: {0}")]
    ConfigIncomplete(String),

    #[error("Network failure: could not reach {url} ({message}). Check the address and any CORS or proxy restrictions.")]
    NetworkFailure { url: String, message: String },

    #[error("HTTP {status} ({status_text}): {detail}")]
    HttpError {
        status: u16,
        status_text: String,
        detail: String,
    },

    #[error("Structured output error: {0}")]
    StructuredOutput(String),

    #[error("Recommendation retrieval failed: {source}")]
    RecommendationFailed {
        #[source]
        source: Box<DomainError>,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DomainError {
    pub fn config_incomplete(msg: impl Into<String>) -> Self {
        Self::ConfigIncomplete(msg.into())
    }

    pub fn network(url: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::NetworkFailure {
            url: url.into(),
            message: msg.into(),
        }
    }

    /// Builds an HTTP error from a non-2xx response body.
    ///
    /// Prefers the nested `error.message` field when the body is JSON and
    /// otherwise keeps the first [`HTTP_BODY_SNIPPET_CHARS`] characters.
    pub fn http(status: u16, status_text: impl Into<String>, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| body.chars().take(HTTP_BODY_SNIPPET_CHARS).collect());

        Self::HttpError {
            status,
            status_text: status_text.into(),
            detail,
        }
    }

    pub fn structured_output(msg: impl Into<String>) -> Self {
        Self::StructuredOutput(msg.into())
    }

    pub fn recommendation_failed(source: DomainError) -> Self {
        Self::RecommendationFailed {
            source: Box::new(source),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn is_network_failure(&self) -> bool {
        matches!(self, Self::NetworkFailure { .. })
    }

    pub fn is_http_error(&self) -> bool {
        matches!(self, Self::HttpError { .. })
    }

    pub fn is_structured_output(&self) -> bool {
        matches!(self, Self::StructuredOutput(_))
    }

    /// The underlying cause when this error wraps a pipeline failure.
    pub fn cause(&self) -> &DomainError {
        match self {
            Self::RecommendationFailed { source } => source.cause(),
            other => other,
        }
    }
}
