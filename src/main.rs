//! Maintenance Dashboard - Main Entry Point

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use maintenance_dashboard::api::{Command, Session};
use maintenance_dashboard::constants::{API_URL_ENV, APP_NAME, APP_VERSION};
use maintenance_dashboard::{Config, MachineType, PredictionClient};

#[derive(Parser)]
#[command(name = "maintenance-dashboard")]
#[command(about = "Predictive maintenance dashboard for the failure-prediction API")]
#[command(version)]
struct Cli {
    /// Base URL of the prediction API
    #[arg(long = "api-url", env = API_URL_ENV, value_name = "URL", global = true)]
    api_url: Option<String>,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Score one reading and print the result
    Predict(ReadingArgs),
    /// Score the reading in a single-row CSV file
    Load {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
    /// Check that the prediction API is reachable
    Health,
}

#[derive(Args)]
struct ReadingArgs {
    /// Machine identifier
    #[arg(long)]
    id: String,
    /// Machine type (H, L or M)
    #[arg(long = "type", default_value = "H")]
    machine_type: MachineType,
    /// Air temperature [K]
    #[arg(long)]
    air: f64,
    /// Process temperature [K]
    #[arg(long)]
    process: f64,
    /// Rotational speed [rpm]
    #[arg(long)]
    rpm: f64,
    /// Torque [Nm]
    #[arg(long)]
    torque: f64,
    /// Tool wear [min]
    #[arg(long, default_value_t = 0.0)]
    wear: f64,
}

impl ReadingArgs {
    fn into_command(self) -> Command {
        let pairs = [
            ("id", self.id),
            ("type", self.machine_type.to_string()),
            ("air", self.air.to_string()),
            ("process", self.process.to_string()),
            ("rpm", self.rpm.to_string()),
            ("torque", self.torque.to_string()),
            ("wear", self.wear.to_string()),
        ];
        Command::Predict(pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = Config::from_env().with_api_url(cli.api_url.as_deref());
    log::info!("Starting {} v{}", APP_NAME, APP_VERSION);
    log::info!("Prediction API: {}", config.api_url);

    let client = PredictionClient::new(config).context("Failed to create HTTP client")?;
    let mut session = Session::new(client);

    let command = match cli.command {
        None => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            return session.run(stdin, tokio::io::stdout()).await;
        }
        Some(CliCommand::Predict(args)) => args.into_command(),
        Some(CliCommand::Load { path }) => Command::Load(path),
        Some(CliCommand::Health) => Command::Health,
    };

    let reply = session.execute(command).await;
    if reply.success {
        println!("{}", reply.text);
        Ok(())
    } else {
        anyhow::bail!("{}", reply.text)
    }
}
