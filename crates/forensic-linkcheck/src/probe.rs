//! Single-URL existence probes

use crate::config::LinkCheckConfig;
use crate::error::LinkCheckError;
use std::future::Future;
use thiserror::Error;

/// Why a probe produced no HTTP status
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
    /// No response within the timeout
    #[error("timed out")]
    Timeout,

    /// DNS, TCP or TLS connection failure
    #[error("connection failed")]
    Connect,

    /// The URL could not be turned into a request
    #[error("invalid URL")]
    InvalidUrl,

    /// Redirect limit exceeded or redirect loop
    #[error("too many redirects")]
    Redirect,

    /// Any other transport error
    #[error("request failed: {0}")]
    Request(String),
}

impl ProbeFailure {
    /// Short label used for metrics
    pub fn kind(&self) -> &'static str {
        match self {
            ProbeFailure::Timeout => "timeout",
            ProbeFailure::Connect => "connect",
            ProbeFailure::InvalidUrl => "invalid_url",
            ProbeFailure::Redirect => "redirect",
            ProbeFailure::Request(_) => "request",
        }
    }
}

impl From<reqwest::Error> for ProbeFailure {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProbeFailure::Timeout
        } else if e.is_connect() {
            ProbeFailure::Connect
        } else if e.is_redirect() {
            ProbeFailure::Redirect
        } else if e.is_builder() {
            ProbeFailure::InvalidUrl
        } else {
            ProbeFailure::Request(e.to_string())
        }
    }
}

/// Status code of a completed probe, or why there is none
pub type ProbeOutcome = Result<u16, ProbeFailure>;

/// A lightweight existence check against one URL
///
/// Implementations must not panic or propagate errors: every outcome,
/// including transport failures, is returned as a [`ProbeOutcome`].
pub trait Prober: Send + Sync {
    /// Probe a URL once
    fn probe(&self, url: &str) -> impl Future<Output = ProbeOutcome> + Send;
}

/// HEAD-request prober backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    /// Build a prober with the configured timeout, redirect limit and user agent
    pub fn new(config: &LinkCheckConfig) -> Result<Self, LinkCheckError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| LinkCheckError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Prober for HttpProber {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        let response = self.client.head(url).send().await?;
        Ok(response.status().as_u16())
    }
}
