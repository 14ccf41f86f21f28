use std::process::ExitCode;

use laybuy_gateway::client::http::new_laybuy_client;
use laybuy_gateway::config;
use laybuy_gateway::handler::cmd;
use laybuy_gateway::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> ExitCode {
    let cfg = config::Settings::new().expect("cannot parse configuration");
    let subscriber = get_subscriber("laybuy-gateway-cli".into(), "warn".into(), std::io::stderr);
    init_subscriber(subscriber);

    let cli_app = cmd::command::command().subcommands(cmd::laybuy::commands());
    let matches = cli_app.get_matches();

    let client = new_laybuy_client(&cfg).expect("cannot create laybuy client");
    match cmd::laybuy::LaybuyCommand::new(client).run(&matches).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
