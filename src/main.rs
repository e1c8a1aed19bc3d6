use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use finadvice::connector::api::{Container, ContainerConfig, Router};
use finadvice::connector::{DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use finadvice::{Commands, DomainError};

#[derive(Parser)]
#[command(name = "finadvice")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Provider API key
    #[arg(long, global = true, env = "FINADVICE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, global = true, env = "FINADVICE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, global = true, env = "FINADVICE_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    #[arg(long, global = true, env = "FINADVICE_TEMPERATURE", default_value = "0.7")]
    temperature: f32,

    #[arg(long, global = true, env = "FINADVICE_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Minimum spacing between two requests, in milliseconds
    #[arg(long, global = true, env = "FINADVICE_MIN_INTERVAL_MS", default_value = "1000")]
    min_interval_ms: u64,

    /// Delay before retrying a rate-limited request without retry-after, in milliseconds
    #[arg(long, global = true, env = "FINADVICE_RETRY_DELAY_MS", default_value = "1000")]
    retry_delay_ms: u64,

    #[arg(long, global = true, env = "FINADVICE_MAX_RETRIES", default_value = "3")]
    max_retries: u32,

    /// Per-request timeout in seconds (0 disables)
    #[arg(long, global = true, env = "FINADVICE_TIMEOUT_SECS", default_value = "60")]
    timeout_secs: u64,

    /// Answer offline with a mock assistant
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let container = Container::new(ContainerConfig {
        api_key: cli.api_key,
        base_url: cli.base_url,
        model: cli.model,
        temperature: cli.temperature,
        max_tokens: cli.max_tokens,
        min_request_interval: Duration::from_millis(cli.min_interval_ms),
        retry_delay: Duration::from_millis(cli.retry_delay_ms),
        max_retries: cli.max_retries,
        request_timeout: (cli.timeout_secs > 0).then(|| Duration::from_secs(cli.timeout_secs)),
        mock: cli.mock,
    })?;

    let router = Router::new(&container);
    match router.route(cli.command).await {
        Ok(output) => {
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => match e.downcast_ref::<DomainError>() {
            Some(domain_error) if domain_error.is_completion_error() => {
                eprintln!("{}", domain_error);
                Ok(ExitCode::FAILURE)
            }
            _ => Err(e),
        },
    }
}
