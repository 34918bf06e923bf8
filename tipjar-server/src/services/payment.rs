//! Payment processor capability
//!
//! Stripe integration via REST API (no SDK dependency). Two variants are
//! selected at construction time from configuration:
//!
//! - [`StripeProcessor`] when a secret key is configured — creates a
//!   hosted Checkout Session and returns its redirect URL.
//! - [`SimulatedProcessor`] otherwise — returns the success redirect
//!   verbatim and marks the session simulated. No charge occurs.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::core::Config;

/// Session parameters handed to the processor
#[derive(Debug, Clone)]
pub struct SessionRequest {
    /// Line-item description, e.g. `Tip for Alice (Table 5)`
    pub description: String,
    /// Optional payer note, already truncated to the configured length
    pub note: Option<String>,
    /// Amount in the processor's minor currency unit
    pub amount_minor: i64,
    pub currency: String,
    pub success_url: String,
    pub cancel_url: String,
}

/// A created payment session
#[derive(Debug, Clone, serde::Serialize)]
pub struct CheckoutSession {
    pub url: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub simulated: bool,
}

/// Processor errors
///
/// Carries full detail for the server-side log; callers map this to a
/// generic message before it reaches the wire.
#[derive(Debug, thiserror::Error)]
pub enum ProcessorError {
    /// Transport failure, including the bounded-timeout expiry
    #[error("processor request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Processor answered but did not produce a session URL
    #[error("processor rejected session: {0}")]
    Api(String),
}

#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn create_session(&self, req: SessionRequest) -> Result<CheckoutSession, ProcessorError>;
}

/// Select the processor from configuration
///
/// A configured `STRIPE_SECRET_KEY` selects the real processor; absence
/// selects the simulated fallback rather than an error.
pub fn from_config(config: &Config) -> Result<Arc<dyn PaymentProcessor>, ProcessorError> {
    match &config.stripe_secret_key {
        Some(key) => {
            tracing::info!("Stripe payment processor configured");
            Ok(Arc::new(StripeProcessor::new(
                key.clone(),
                Duration::from_millis(config.checkout_timeout_ms),
            )?))
        }
        None => {
            tracing::warn!("No payment processor configured, checkout sessions will be simulated");
            Ok(Arc::new(SimulatedProcessor))
        }
    }
}

/// Hosted Checkout Sessions via the Stripe REST API
pub struct StripeProcessor {
    client: reqwest::Client,
    secret_key: String,
}

impl StripeProcessor {
    /// Build the processor with a bounded request timeout
    ///
    /// No retry on timeout: retrying session creation risks issuing
    /// duplicate sessions for one tip.
    pub fn new(secret_key: String, timeout: Duration) -> Result<Self, ProcessorError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, secret_key })
    }
}

#[async_trait]
impl PaymentProcessor for StripeProcessor {
    async fn create_session(&self, req: SessionRequest) -> Result<CheckoutSession, ProcessorError> {
        let amount_minor = req.amount_minor.to_string();
        let mut params: Vec<(&str, &str)> = vec![
            ("mode", "payment"),
            ("line_items[0][quantity]", "1"),
            ("line_items[0][price_data][currency]", req.currency.as_str()),
            ("line_items[0][price_data][unit_amount]", amount_minor.as_str()),
            ("line_items[0][price_data][product_data][name]", req.description.as_str()),
            ("success_url", req.success_url.as_str()),
            ("cancel_url", req.cancel_url.as_str()),
        ];
        if let Some(note) = req.note.as_deref() {
            params.push(("line_items[0][price_data][product_data][description]", note));
        }

        let resp: serde_json::Value = self
            .client
            .post("https://api.stripe.com/v1/checkout/sessions")
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&params)
            .send()
            .await?
            .json()
            .await?;

        resp["url"]
            .as_str()
            .map(|url| CheckoutSession {
                url: url.to_string(),
                simulated: false,
            })
            .ok_or_else(|| ProcessorError::Api(format!("Stripe create_checkout failed: {resp}")))
    }
}

/// Deterministic fallback when no processor is configured
pub struct SimulatedProcessor;

#[async_trait]
impl PaymentProcessor for SimulatedProcessor {
    async fn create_session(&self, req: SessionRequest) -> Result<CheckoutSession, ProcessorError> {
        Ok(CheckoutSession {
            url: req.success_url,
            simulated: true,
        })
    }
}
