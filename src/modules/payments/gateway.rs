//! Payment processor client.
//!
//! The gateway is a capability trait so handlers never talk to the
//! processor directly; [`StripeGateway`] is the production
//! implementation, [`StubGateway`] backs tests.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::stripe::StripeConfig;

/// Processor-side object representing an in-progress charge. The client
/// secret goes back to the browser for client-side confirmation.
#[derive(Debug, Clone)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Creates a payment intent for `amount` minor units of `currency`.
    async fn create_intent(&self, amount: i64, currency: &str) -> Result<PaymentIntent>;
}

/// Stripe-backed gateway using the form-encoded REST API.
pub struct StripeGateway {
    client: Client,
    config: StripeConfig,
}

impl StripeGateway {
    pub fn new(config: StripeConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[derive(Debug, Deserialize)]
struct StripeIntent {
    id: String,
    client_secret: String,
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_intent(&self, amount: i64, currency: &str) -> Result<PaymentIntent> {
        let url = format!("{}/v1/payment_intents", self.config.api_base);
        let params = [
            ("amount", amount.to_string()),
            ("currency", currency.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.secret_key)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "Payment processor returned status {}: {}",
                status,
                body
            ));
        }

        let intent: StripeIntent = response.json().await?;

        Ok(PaymentIntent {
            id: intent.id,
            client_secret: intent.client_secret,
        })
    }
}

/// In-memory gateway for tests. The amount and currency are echoed into
/// the intent id and secret so assertions can see them.
pub struct StubGateway;

impl StubGateway {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StubGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentGateway for StubGateway {
    async fn create_intent(&self, amount: i64, currency: &str) -> Result<PaymentIntent> {
        Ok(PaymentIntent {
            id: format!("pi_stub_{amount}"),
            client_secret: format!("pi_stub_{amount}_{currency}_secret"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_gateway_echoes_amount_and_currency() {
        let gateway = StubGateway::new();
        let intent = gateway.create_intent(7999, "usd").await.unwrap();

        assert_eq!(intent.id, "pi_stub_7999");
        assert_eq!(intent.client_secret, "pi_stub_7999_usd_secret");
    }
}
