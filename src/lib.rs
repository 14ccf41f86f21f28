pub mod client;
pub mod config;
pub mod handler;
pub mod http_server;
pub mod service;
pub mod telemetry;

use crate::service::laybuy::client::LaybuyClient;

pub struct AppState {
    pub laybuy_client: LaybuyClient,
}
