use std::sync::Arc;

use reqwest::Client;
use serde_json::Value;

use crate::{
    config::Config,
    error::{UpstreamError, upstream_message},
    types::NewsQuery,
};

/// The two News API operations the relay talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    TopHeadlines,
    Everything,
}

/// News API client bound to the relay configuration.
///
/// Cheap to clone: the HTTP client is reference counted internally and the
/// configuration is shared.
#[derive(Debug, Clone)]
pub struct NewsApi {
    client: Client,
    config: Arc<Config>,
}

impl NewsApi {
    /// Creates a client, applying the configured upstream timeout if any.
    pub fn new(config: Arc<Config>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    /// Starts a query carrying the server-side API key.
    pub fn query(&self) -> NewsQuery {
        NewsQuery::new(self.config.api_key.as_str())
    }

    fn url(&self, endpoint: Endpoint) -> String {
        match endpoint {
            Endpoint::TopHeadlines => self.config.top_headlines_url(),
            Endpoint::Everything => self.config.everything_url(),
        }
    }

    /// Issues a single GET against `endpoint` and returns the JSON body as is.
    ///
    /// # Errors
    ///
    /// Fails on network errors, non-2xx responses and bodies that are not
    /// JSON. The error message prefers the upstream's own `message` field,
    /// then the transport error, then a generic default. Nothing is retried.
    pub async fn fetch(
        &self,
        endpoint: Endpoint,
        query: &NewsQuery,
    ) -> Result<Value, UpstreamError> {
        let response = self
            .client
            .get(self.url(endpoint))
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let transport = response
                .error_for_status_ref()
                .err()
                .map(|e| e.without_url().to_string());
            let body = response.json::<Value>().await.ok();

            return Err(UpstreamError::new(
                upstream_message(body.as_ref(), transport.as_deref()),
                Some(status),
            ));
        }

        Ok(response.json::<Value>().await?)
    }
}
