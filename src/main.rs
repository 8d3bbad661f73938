use std::fmt::Debug;
use std::process::ExitCode;

use bank_gateway_clients::fakers::RandomFaker;
use bank_gateway_clients::scenarios::{self, Gateways, ScenarioError};
use bank_gateway_clients::Settings;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Run linear scenarios against the banking-demo gateway
#[derive(Parser)]
#[command(name = "bank-gateway")]
#[command(version)]
struct Cli {
    /// Which gateway surface to talk to
    #[arg(long, value_enum, env = "GATEWAY_TRANSPORT", default_value = "http")]
    transport: Transport,

    /// Overrides GATEWAY_GRPC_HOST
    #[arg(long)]
    grpc_host: Option<String>,

    /// Overrides GATEWAY_GRPC_PORT
    #[arg(long)]
    grpc_port: Option<u16>,

    #[command(subcommand)]
    scenario: Scenario,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Transport {
    Http,
    Grpc,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum Scenario {
    /// Create a user and read it back
    GetUser,
    /// Create a user and open a deposit account
    OpenDepositAccount,
    /// Create a user and open a debit card account
    OpenDebitCardAccount,
    /// Issue a virtual and a physical card for a new debit card account
    IssueCards,
    /// Top up a new debit card account
    MakeTopUpOperation,
    /// Top up a new account and fetch the receipt
    GetOperationReceipt,
    /// Fetch tariff and contract of a new credit card account
    GetDocuments,
    /// Make a few operations and list them with a summary
    GetOperations,
}

fn report<T: Debug>(result: Result<T, ScenarioError>) -> Result<(), ScenarioError> {
    let outcome = result?;
    println!("{:#?}", outcome);
    Ok(())
}

async fn run(scenario: Scenario, gateways: &Gateways) -> Result<(), ScenarioError> {
    match scenario {
        Scenario::GetUser => report(scenarios::get_user(gateways).await),
        Scenario::OpenDepositAccount => report(scenarios::open_deposit_account(gateways).await),
        Scenario::OpenDebitCardAccount => {
            report(scenarios::open_debit_card_account(gateways).await)
        }
        Scenario::IssueCards => report(scenarios::issue_cards(gateways).await),
        Scenario::MakeTopUpOperation => report(scenarios::make_top_up_operation(gateways).await),
        Scenario::GetOperationReceipt => report(scenarios::get_operation_receipt(gateways).await),
        Scenario::GetDocuments => report(scenarios::get_documents(gateways).await),
        Scenario::GetOperations => report(scenarios::get_operations(gateways).await),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bank_gateway_clients=debug,bank_gateway=info")),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();

    let mut settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(host) = cli.grpc_host {
        settings.grpc_client.host = host;
    }
    if let Some(port) = cli.grpc_port {
        settings.grpc_client.port = port;
    }

    let faker = RandomFaker::shared();
    let gateways = match cli.transport {
        Transport::Http => {
            info!("Using HTTP gateway at {}", settings.http_client.url);
            Gateways::http(&settings.http_client, faker)
        }
        Transport::Grpc => {
            info!("Using gRPC gateway at {}", settings.grpc_client.endpoint());
            Gateways::grpc(&settings.grpc_client, faker)
        }
    };
    let gateways = match gateways {
        Ok(gateways) => gateways,
        Err(e) => {
            error!("Failed to build gateway clients: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(cli.scenario, &gateways).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Scenario {:?} failed: {}", cli.scenario, e);
            ExitCode::FAILURE
        }
    }
}
