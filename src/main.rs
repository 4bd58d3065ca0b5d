use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trendcast::config::Config;
use trendcast::error::AppError;
use trendcast::services::ForecastService;
use trendcast::sources;
use trendcast::types::{ForecastResponse, PeriodPreset};

/// Short-horizon trend forecast for a candle series.
#[derive(Parser)]
#[command(name = "trendcast", version, about)]
struct Cli {
    /// JSON file with candles (rows or columns).
    #[arg(long, short, env = "TRENDCAST_INPUT")]
    input: PathBuf,

    /// Period preset: 1d, 5d or 1mo.
    #[arg(long, short)]
    period: Option<String>,

    /// Symbol label used in logs.
    #[arg(long, short, default_value = "UNKNOWN")]
    symbol: String,

    /// Pretty-print the JSON response.
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    // Initialize tracing on stderr; stdout carries the payload
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let pretty = cli.pretty || config.pretty;

    match run(&cli, &config) {
        Ok(response) => {
            if let Err(e) = print_response(&response, pretty) {
                error!("Failed to write response: {:#}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Forecast failed: {}", e);
            let code = e.exit_code();
            if let Err(e) = print_response(&ForecastResponse::failure(e.to_string()), pretty) {
                error!("Failed to write response: {:#}", e);
            }
            ExitCode::from(code)
        }
    }
}

fn run(cli: &Cli, config: &Config) -> Result<ForecastResponse, AppError> {
    let service = ForecastService::new(PeriodPreset::resolve(&config.default_period));
    let preset = service.resolve_preset(cli.period.as_deref());

    info!("Reading candles from {}", cli.input.display());
    let candles = sources::load_candles(&cli.input)?;

    service.forecast_series(&cli.symbol, &candles, preset)
}

fn print_response(response: &ForecastResponse, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(response)?
    } else {
        serde_json::to_string(response)?
    };
    println!("{}", json);
    Ok(())
}
