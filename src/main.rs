use cinema_tickets::{api::Server, config::Config, PurchaseError, TicketService};
use std::process::ExitCode;
use tracing::{error, info};

const CONFIG_PATH: &str = "config/default.toml";

const USAGE: &str = "usage:
  cinema-tickets serve
  cinema-tickets purchase '<order json>'

order json:
  {\"accountId\": 1, \"ticketTypeRequests\": [{\"type\": \"ADULT\", \"noOfTickets\": 2}]}";

/// Entry point.
///
/// `serve` starts the JSON-RPC server; `purchase` runs a single order and
/// prints the outcome.
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let config = Config::load(CONFIG_PATH)?;
    tracing_subscriber::fmt()
        .with_max_level(config.logging.max_level()?)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["serve"] => {
            info!("Cinema tickets starting with config: {:?}", config);
            let server = Server::new(config.api, TicketService::with_default_gateways());
            server.start().await?;
            Ok(ExitCode::SUCCESS)
        }
        ["purchase", order] => {
            let order: serde_json::Value = serde_json::from_str(order)?;
            Ok(run_purchase(&TicketService::with_default_gateways(), &order))
        }
        _ => {
            eprintln!("{USAGE}");
            Ok(ExitCode::from(2))
        }
    }
}

fn run_purchase(service: &TicketService, order: &serde_json::Value) -> ExitCode {
    match service.purchase_json(order) {
        Ok(confirmation) => {
            println!("{confirmation}");
            ExitCode::SUCCESS
        }
        Err(e @ PurchaseError::Contract(_)) => {
            error!("Invalid purchase request: {}", e);
            eprintln!("invalid request: {e}");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("purchase failed: {e}");
            ExitCode::FAILURE
        }
    }
}
