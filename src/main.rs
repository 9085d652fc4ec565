use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use cpc_salary_engine::api::{AppState, SalaryRequest, create_router};
use cpc_salary_engine::calculation::calculate_salary;
use cpc_salary_engine::config::ConfigLoader;
use cpc_salary_engine::models::SalaryInput;
use cpc_salary_engine::report::render_report;
use tracing::info;

#[derive(Parser)]
#[command(name = "cpc-salary", version, about = "CPC salary calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        /// Directory holding commission.yaml, pay_matrix.yaml and cities.yaml
        #[arg(long, env = "CPC_SALARY_CONFIG")]
        config: Option<PathBuf>,
        /// Address to listen on
        #[arg(long, env = "CPC_SALARY_ADDR", default_value = "127.0.0.1:3000")]
        addr: String,
    },
    /// Calculate a salary from a JSON request file
    Calculate {
        /// Path to the request JSON
        request: PathBuf,
        /// Directory holding commission.yaml, pay_matrix.yaml and cities.yaml
        #[arg(long, env = "CPC_SALARY_CONFIG")]
        config: Option<PathBuf>,
        /// Print the JSON result instead of the text report
        #[arg(long)]
        json: bool,
    },
}

fn load_tables(dir: Option<&Path>) -> anyhow::Result<ConfigLoader> {
    let loader = match dir {
        Some(dir) => ConfigLoader::load(dir)
            .with_context(|| format!("loading pay tables from {}", dir.display()))?,
        None => ConfigLoader::bundled().context("loading bundled pay tables")?,
    };
    info!(
        commission = %loader.commission().name,
        levels = loader.pay_levels().len(),
        "Pay tables loaded"
    );
    Ok(loader)
}

async fn serve(config: Option<PathBuf>, addr: String) -> anyhow::Result<()> {
    let tables = load_tables(config.as_deref())?;
    let router = create_router(AppState::new(tables));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(addr = %addr, "cpc-salary v{} listening", env!("CARGO_PKG_VERSION"));

    axum::serve(listener, router).await?;
    Ok(())
}

fn calculate(request: &Path, config: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let tables = load_tables(config)?;

    let body = std::fs::read_to_string(request)
        .with_context(|| format!("reading {}", request.display()))?;
    let request: SalaryRequest =
        serde_json::from_str(&body).with_context(|| format!("parsing {}", request.display()))?;
    let input: SalaryInput = request.into();

    let results = calculate_salary(&input, tables.config())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", render_report(&results));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { config, addr } => serve(config, addr).await,
        Commands::Calculate {
            request,
            config,
            json,
        } => calculate(&request, config.as_deref(), json),
    }
}
