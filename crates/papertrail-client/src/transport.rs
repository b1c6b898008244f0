//! reqwest adapter for the [`IHttpTransport`] port
//!
//! Timeouts, TLS and connection pooling are whatever the wrapped
//! [`reqwest::Client`] is configured with. [`ReqwestTransport::from_config`]
//! builds one from the `api` section of the SDK configuration.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use papertrail_core::config::ApiConfig;
use papertrail_core::ports::{HttpMethod, HttpRequest, HttpResponse, IHttpTransport};
use reqwest::{Client, Method};
use tracing::{trace, warn};

use crate::ClientError;

/// [`IHttpTransport`] backed by a [`reqwest::Client`]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with reqwest's default settings
    pub fn new() -> Result<Self, ClientError> {
        Ok(Self {
            client: Client::builder().build()?,
        })
    }

    /// Creates a transport honouring the configured timeouts and user agent
    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an existing client, e.g. one shared with the rest of the bot
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying reqwest Client
    pub fn client(&self) -> &Client {
        &self.client
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl IHttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> anyhow::Result<HttpResponse> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &request.url);

        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .with_context(|| format!("{} {} failed", request.method, request.url))?;

        let status = response.status().as_u16();
        // A status line was received; an unreadable body must not erase it
        let body = match response.bytes().await {
            Ok(body) => body.to_vec(),
            Err(e) => {
                warn!(status, url = %request.url, error = %e, "Failed to read response body");
                Vec::new()
            }
        };

        trace!(status, bytes = body.len(), "Received response body");
        Ok(HttpResponse { status, body })
    }
}
