use laybuy_gateway::config;
use laybuy_gateway::http_server::HttpServer;
use laybuy_gateway::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() {
    let cfg = config::Settings::new().expect("cannot parse configuration");
    let subscriber = get_subscriber("laybuy-gateway-server".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let http_server = HttpServer::build(cfg)
        .await
        .expect("cannot build http server");
    http_server.run().await.expect("http server stopped");
}
