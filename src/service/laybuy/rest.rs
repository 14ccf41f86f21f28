use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use snafu::ResultExt;
use url::Url;

use super::constants::{LAYBUY_CANCELLED, LAYBUY_FAILURE, LAYBUY_SUCCESS};
use super::error::{DecodeSnafu, LaybuyError, TransportSnafu};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStatus {
    Success,
    Error,
    Cancelled,
    Unknown,
}

impl From<&str> for ResultStatus {
    fn from(value: &str) -> Self {
        match value {
            LAYBUY_SUCCESS => Self::Success,
            LAYBUY_FAILURE => Self::Error,
            LAYBUY_CANCELLED => Self::Cancelled,
            _ => Self::Unknown,
        }
    }
}

/// Decoded provider response. Every Laybuy response is a JSON object with a
/// `result` field; the rest depends on the endpoint.
#[derive(Debug, Clone)]
pub struct ResponseEnvelope {
    pub result: ResultStatus,
    body: Value,
}

/// Mirrors how the provider's fields were historically checked: null, false,
/// zero, "" and "0" all count as missing.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(a) => !a.is_empty(),
        Value::Object(_) => true,
    }
}

impl ResponseEnvelope {
    pub fn parse(raw: &str) -> Result<Self, LaybuyError> {
        let body: Value = serde_json::from_str(raw).context(DecodeSnafu {
            message: "laybuy response is not valid json",
        })?;
        if !body.is_object() {
            return Err(LaybuyError::NotAnObject);
        }
        let result = body
            .get("result")
            .and_then(Value::as_str)
            .map_or(ResultStatus::Unknown, ResultStatus::from);
        Ok(ResponseEnvelope { result, body })
    }

    pub fn is_success(&self) -> bool {
        self.result == ResultStatus::Success
    }

    /// Returns the field as a string when it is present and truthy. Numeric
    /// identifiers are rendered in their decimal form.
    pub fn field(&self, key: &str) -> Option<String> {
        let value = self.body.get(key).filter(|v| is_truthy(v))?;
        Some(match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_body(self) -> Value {
        self.body
    }
}

/// Authenticated client bound to one base URL and one set of merchant
/// credentials. Built fresh for every operation.
pub struct RestClient<'a> {
    http: &'a Client,
    base_url: Url,
    merchant_id: String,
    api_key: String,
}

impl<'a> RestClient<'a> {
    pub fn new(http: &'a Client, base_url: Url, merchant_id: String, api_key: String) -> Self {
        RestClient {
            http,
            base_url,
            merchant_id,
            api_key,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `path` to the base URL, then each segment percent-encoded.
    /// Empty, "." and ".." segments would change the path and are rejected.
    fn url(&self, path: &str, segments: &[&str]) -> Result<Url, LaybuyError> {
        if let Some(segment) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(LaybuyError::InvalidPathSegment {
                segment: segment.to_string(),
            });
        }
        let mut url = self.base_url.clone();
        if let Ok(mut parts) = url.path_segments_mut() {
            parts.pop_if_empty();
            parts.extend(path.split('/').filter(|p| !p.is_empty()));
            parts.extend(segments);
        }
        Ok(url)
    }

    pub async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<ResponseEnvelope, LaybuyError> {
        let request = self.http.post(self.url(path, &[])?).json(body);
        self.send(request).await
    }

    pub async fn get(&self, path: &str, segments: &[&str]) -> Result<ResponseEnvelope, LaybuyError> {
        let request = self.http.get(self.url(path, segments)?);
        self.send(request).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<ResponseEnvelope, LaybuyError> {
        // non-2xx answers still carry a result envelope, so the status is not checked
        let response = request
            .basic_auth(&self.merchant_id, Some(&self.api_key))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .context(TransportSnafu {
                message: "cannot send request to laybuy",
            })?;
        let raw = response.text().await.context(TransportSnafu {
            message: "cannot read laybuy response body",
        })?;
        ResponseEnvelope::parse(&raw)
    }
}
