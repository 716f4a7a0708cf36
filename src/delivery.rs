//! HTTP quote delivery

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::booking::{BookingRequest, DeliveryError, QuoteDelivery};

const ENDPOINT_VAR: &str = "QUOTE_EMAIL_ENDPOINT";
const API_KEY_VAR: &str = "QUOTE_EMAIL_API_KEY";

/// Where and how to reach the quote-email API.
#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryConfig {
    /// URL the booking payload is POSTed to.
    pub endpoint: String,

    /// Optional bearer token for the endpoint.
    pub api_key: Option<String>,
}

impl DeliveryConfig {
    /// Read the config from `QUOTE_EMAIL_ENDPOINT` and `QUOTE_EMAIL_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::MissingEnv`] when the endpoint variable is unset.
    pub fn from_env() -> Result<Self, DeliveryError> {
        let Ok(endpoint) = std::env::var(ENDPOINT_VAR) else {
            return Err(DeliveryError::MissingEnv(ENDPOINT_VAR));
        };

        Ok(DeliveryConfig {
            endpoint,
            api_key: std::env::var(API_KEY_VAR).ok(),
        })
    }
}

/// [`QuoteDelivery`] over a JSON POST to the configured email API.
#[derive(Debug)]
pub struct HttpQuoteDelivery {
    client: reqwest::Client,
    config: DeliveryConfig,
}

impl HttpQuoteDelivery {
    /// Create a delivery client for the given endpoint config.
    pub fn new(config: DeliveryConfig) -> Self {
        HttpQuoteDelivery {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl QuoteDelivery for HttpQuoteDelivery {
    async fn send_quote(&self, request: &BookingRequest) -> Result<(), DeliveryError> {
        debug!(endpoint = %self.config.endpoint, "posting quote email");

        let mut post = self.client.post(&self.config.endpoint).json(request);
        if let Some(key) = &self.config.api_key {
            post = post.bearer_auth(key);
        }

        post.send().await?.error_for_status()?;

        Ok(())
    }
}
