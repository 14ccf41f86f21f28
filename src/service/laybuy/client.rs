use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use url::Url;

use super::config::Config;
use super::constants::{
    API_ENDPOINT_LIVE, API_ENDPOINT_SANDBOX, API_ORDER_CANCEL, API_ORDER_CHECK,
    API_ORDER_CONFIRM, API_ORDER_CREATE, API_ORDER_REFUND,
};
use super::error::LaybuyError;
use super::rest::{RestClient, ResultStatus};
use super::StoreId;

/// Base URLs of the two Laybuy environments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub live: String,
    pub sandbox: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            live: API_ENDPOINT_LIVE.to_string(),
            sandbox: API_ENDPOINT_SANDBOX.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectUrlAndToken {
    pub redirect_url: String,
    pub token: String,
}

/// Talks to the Laybuy order API on behalf of a store. Credentials and the
/// environment are resolved again on every call.
#[derive(Clone)]
pub struct LaybuyClient {
    config: Config,
    endpoints: Endpoints,
    http: Client,
}

impl LaybuyClient {
    pub fn new(config: Config, endpoints: Endpoints, http: Client) -> Self {
        LaybuyClient {
            config,
            endpoints,
            http,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds an authenticated client for the store, or fails with
    /// `NotConfigured` when the merchant id or api key is missing.
    pub fn setup(&self, store_id: Option<StoreId>) -> Result<RestClient<'_>, LaybuyError> {
        let Some(merchant_id) = self.config.merchant_id(store_id) else {
            return Err(LaybuyError::NotConfigured { store_id });
        };
        let Some(api_key) = self.config.api_key(store_id) else {
            return Err(LaybuyError::NotConfigured { store_id });
        };

        let endpoint = if self.config.use_sandbox(store_id) {
            &self.endpoints.sandbox
        } else {
            &self.endpoints.live
        };
        let base_url = Url::parse(endpoint).map_err(|e| LaybuyError::Unexpected {
            message: format!("invalid laybuy endpoint {}", endpoint),
            source: Box::new(e) as Box<dyn std::error::Error + Send + Sync>,
        })?;

        Ok(RestClient::new(&self.http, base_url, merchant_id, api_key))
    }

    /// Creates the order at Laybuy and returns where to send the shopper.
    /// `None` when Laybuy declines or leaves out the payment url or token.
    pub async fn get_redirect_url_and_token<T: Serialize + ?Sized>(
        &self,
        order: &T,
        store_id: Option<StoreId>,
    ) -> Result<Option<RedirectUrlAndToken>, LaybuyError> {
        let rest_client = self.setup(store_id)?;
        let envelope = rest_client.post(API_ORDER_CREATE, order).await?;
        tracing::debug!("get_redirect_url_and_token response: {}", envelope.body());

        if !envelope.is_success() {
            return Ok(None);
        }
        match (envelope.field("paymentUrl"), envelope.field("token")) {
            (Some(redirect_url), Some(token)) => Ok(Some(RedirectUrlAndToken {
                redirect_url,
                token,
            })),
            _ => Ok(None),
        }
    }

    pub async fn get_confirmation_order_id(
        &self,
        token: &str,
        store_id: Option<StoreId>,
    ) -> Result<Option<String>, LaybuyError> {
        let rest_client = self.setup(store_id)?;
        let envelope = rest_client
            .post(API_ORDER_CONFIRM, &json!({ "token": token }))
            .await?;
        tracing::debug!(
            "get_confirmation_order_id response for token {}: {}",
            token,
            envelope.body()
        );

        if !envelope.is_success() {
            return Ok(None);
        }
        Ok(envelope.field("orderId"))
    }

    pub async fn cancel_order(
        &self,
        token: &str,
        store_id: Option<StoreId>,
    ) -> Result<bool, LaybuyError> {
        let rest_client = self.setup(store_id)?;
        let envelope = rest_client.get(API_ORDER_CANCEL, &[token]).await?;
        tracing::debug!(
            "cancel_order response for token {}: {}",
            token,
            envelope.body()
        );

        Ok(envelope.is_success())
    }

    /// Refunds (part of) an order. Unlike the other operations an `ERROR`
    /// result is reported as `RefundFailed` instead of a falsy value.
    pub async fn refund_order<T: Serialize + ?Sized>(
        &self,
        refund: &T,
        store_id: Option<StoreId>,
    ) -> Result<Option<String>, LaybuyError> {
        let rest_client = self.setup(store_id)?;
        let envelope = rest_client.post(API_ORDER_REFUND, refund).await?;
        tracing::debug!(
            "refund_order response for store {:?}: {}",
            store_id,
            envelope.body()
        );

        if envelope.result == ResultStatus::Error {
            tracing::error!("error while processing refund: {}", envelope.body());
            return Err(LaybuyError::RefundFailed);
        }
        Ok(envelope.field("refundId"))
    }

    /// Looks an order up by the merchant's own reference and returns the
    /// whole response body on success.
    pub async fn check_merchant_order(
        &self,
        merchant_reference: &str,
        store_id: Option<StoreId>,
    ) -> Result<Option<Value>, LaybuyError> {
        let rest_client = self.setup(store_id)?;
        let envelope = rest_client
            .get(API_ORDER_CHECK, &[merchant_reference])
            .await?;
        tracing::debug!(
            "check_merchant_order response for {}: {}",
            merchant_reference,
            envelope.body()
        );

        if !envelope.is_success() {
            return Ok(None);
        }
        Ok(Some(envelope.into_body()))
    }
}
