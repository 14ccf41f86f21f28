use std::sync::Arc;

use reqwest::Client;

use crate::client::{encryptor::PlaintextEncryptor, scope_config::InMemoryScopeConfig};
use crate::config::Settings;
use crate::service::laybuy::{
    client::LaybuyClient,
    config::{path_for, Config},
    constants::{CODE, DEFAULT_PATH_PATTERN},
};

pub fn new_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Wires a `LaybuyClient` over the payment settings. The api key is expected
/// in clear text in this setup.
pub fn new_laybuy_client(cfg: &Settings) -> Result<LaybuyClient, reqwest::Error> {
    let scope_config = InMemoryScopeConfig::from_settings(cfg, |field| {
        path_for(DEFAULT_PATH_PATTERN, CODE, field)
    });
    let config = Config::new(Arc::new(scope_config), Arc::new(PlaintextEncryptor));
    Ok(LaybuyClient::new(
        config,
        cfg.laybuy.endpoints(),
        new_http_client()?,
    ))
}
