use crate::{client::http::new_laybuy_client, config::Settings, handler, AppState};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::{io, net::TcpListener};
use tower_http::trace::TraceLayer;

pub type SharedState = Arc<AppState>;

pub struct HttpServer {
    router: Router,
    listener: TcpListener,
    port: u16,
}

impl HttpServer {
    pub async fn build(cfg: Settings) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let laybuy_client = new_laybuy_client(&cfg)?;
        let shared_state = Arc::new(AppState { laybuy_client });

        let router = get_router(shared_state);
        let listener = TcpListener::bind(cfg.server.address.as_str()).await?;
        let port = listener.local_addr()?.port();
        tracing::info!("listening on {}", listener.local_addr()?);
        Ok(HttpServer {
            router,
            listener,
            port,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run(self) -> Result<(), io::Error> {
        axum::serve(self.listener, self.router).await
    }
}

pub fn get_router(shared_state: SharedState) -> Router {
    let order_routes = Router::new()
        .route("/", post(handler::api::laybuy::create_order))
        .route("/confirm", post(handler::api::laybuy::confirm_order))
        .route("/cancel", post(handler::api::laybuy::cancel_order))
        .route("/refund", post(handler::api::laybuy::refund_order))
        .route(
            "/merchant/:reference",
            get(handler::api::laybuy::check_merchant_order),
        );

    let laybuy_routes = Router::new()
        .nest("/orders", order_routes)
        .route("/settings", get(handler::api::laybuy::settings));

    Router::new()
        .nest("/api/v1/laybuy", laybuy_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}
