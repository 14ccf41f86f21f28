use std::collections::HashMap;

use config::Config;
use dotenv::dotenv;

use crate::service::laybuy::client::Endpoints;
use crate::service::laybuy::constants::{API_ENDPOINT_LIVE, API_ENDPOINT_SANDBOX};

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub server: ServerConfig,
    pub laybuy: LaybuyConfig,
    /// Payment method fields of the default scope, e.g. `merchant_id`.
    #[serde(default)]
    pub payment: HashMap<String, String>,
    /// Per-store overrides of `payment`, keyed by store id.
    #[serde(default)]
    pub stores: HashMap<String, HashMap<String, String>>,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ServerConfig {
    pub address: String,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct LaybuyConfig {
    pub live_url: String,
    pub sandbox_url: String,
}

impl LaybuyConfig {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            live: self.live_url.clone(),
            sandbox: self.sandbox_url.clone(),
        }
    }
}

impl Settings {
    /// Reads `.env`, an optional `configuration.{yaml,toml,json}` file and
    /// `LAYBUY_`-prefixed environment variables, later sources winning.
    /// Nested keys use `__`, e.g. `LAYBUY_STORES__2__MERCHANT_ID`.
    pub fn new() -> Result<Self, config::ConfigError> {
        dotenv().ok();
        let cfg = Config::builder()
            .set_default("server.address", "127.0.0.1:8080")?
            .set_default("laybuy.live_url", API_ENDPOINT_LIVE)?
            .set_default("laybuy.sandbox_url", API_ENDPOINT_SANDBOX)?
            .add_source(config::File::with_name("configuration").required(false))
            .add_source(
                config::Environment::with_prefix("LAYBUY")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;
        cfg.try_deserialize::<Settings>()
    }
}
