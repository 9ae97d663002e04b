// SiliconFlow credential probe
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::client::error::{ConfigError, ProbeError};
use crate::traits::KeyProbe;
use crate::types::CandidateKey;

pub const DEFAULT_BASE_URL: &str = "https://api.siliconflow.cn";
pub const USER_INFO_PATH: &str = "/v1/user/info";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and host of the API; the user info path is appended
    pub base_url: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("sf_key_checker/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Full URL of the user info endpoint
    pub fn user_info_url(&self) -> Result<Url, ConfigError> {
        let base = self.base_url.trim_end_matches('/');
        let url = Url::parse(&format!("{}{}", base, USER_INFO_PATH))
            .map_err(|_| ConfigError::InvalidBaseUrl(self.base_url.clone()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(ConfigError::InvalidBaseUrl(self.base_url.clone())),
        }
    }
}

/// Checks keys by calling the SiliconFlow user info endpoint with the key as
/// a bearer token.
#[derive(Debug, Clone)]
pub struct SiliconFlowClient {
    user_info_url: Url,
    http_client: Client,
}

impl SiliconFlowClient {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let user_info_url = config.user_info_url()?;
        let http_client = Client::builder()
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self {
            user_info_url,
            http_client,
        })
    }

    pub fn user_info_url(&self) -> &Url {
        &self.user_info_url
    }

    /// GET the user info for `key` and decide whether it is accepted.
    ///
    /// Accepted means a 2xx status and a truthy `data.id` in the JSON body.
    pub async fn check_key(&self, key: &CandidateKey) -> Result<(), ProbeError> {
        let response = self
            .http_client
            .get(self.user_info_url.clone())
            .bearer_auth(key.expose())
            .send()
            .await
            .map_err(|e| ProbeError::Network(e.to_string()))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| ProbeError::Parse(e.to_string()))?;

        if !status.is_success() {
            debug!("User info for {} returned {}", key.mask(), status);
            return Err(ProbeError::Status(status.as_u16()));
        }

        let id = body.get("data").and_then(|data| data.get("id"));
        match id {
            Some(id) if is_truthy(id) => Ok(()),
            _ => Err(ProbeError::MissingId),
        }
    }
}

#[async_trait]
impl KeyProbe for SiliconFlowClient {
    type Error = ProbeError;

    async fn probe(&self, key: &CandidateKey) -> Result<(), Self::Error> {
        self.check_key(key).await
    }
}

/// JSON truthiness: null, false, 0, NaN and "" are falsy; containers are truthy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
