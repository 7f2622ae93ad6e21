use clap::Parser;
use dotenv::dotenv;
use log::{debug, error, info, LevelFilter};
use thiserror::Error;

use config::{Config, ConfigError};
use fee_estimator::{AxelarClientError, AxelarGmpClient, GasFeeReporter, ReportError};

#[derive(Parser, Debug)]
struct Args {
    /// Config file path, the built-in testnet configuration is used when omitted
    #[arg(short, long)]
    config: Option<String>,
}

#[derive(Error, Debug)]
enum RunError {
    #[error("Failed to load config: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to instantiate Axelar GMP client: {0}")]
    Client(#[from] AxelarClientError),

    #[error(transparent)]
    Report(#[from] ReportError<AxelarClientError>),
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
        .expect("Failed to initialise logger");

    let args = Args::parse();
    debug!("Args: {:?}", args);

    if let Err(e) = run(args).await {
        error!("Gas fee report failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), RunError> {
    let config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path);
            Config::from_file(path)?
        }
        None => {
            info!("Using built-in testnet config");
            Config::testnet()?
        }
    };

    info!("Estimating gas fees against {} ({})", config.environment, config.gmp_api_url());

    let client = AxelarGmpClient::new(&config)?;
    let reporter = GasFeeReporter::new(&config, &client);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    reporter.run(&mut out).await?;

    Ok(())
}
