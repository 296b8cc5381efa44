mod chart;
mod cli;
mod error;
mod render;
mod routes;

use clap::Parser;
use std::process::ExitCode;

use tickdeck_core::ProviderSetBuilder;

use crate::cli::Cli;
use crate::error::ServeError;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<(), ServeError> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "tickdeck_web=info,tickdeck_core=info,tower_http=info".into()
            }),
        )
        .init();

    let mut builder = ProviderSetBuilder::new()
        .mock(cli.mock)
        .timeout_ms(cli.timeout_ms);
    if let Some(key) = cli.alphavantage_key {
        builder = builder.alphavantage_key(key);
    }
    let providers = builder.build()?;

    let app = routes::router(providers);

    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .map_err(|source| ServeError::Bind {
            addr: cli.bind,
            source,
        })?;

    tracing::info!(addr = %cli.bind, mock = cli.mock, "tickdeck dashboard listening");
    axum::serve(listener, app).await?;

    Ok(())
}
