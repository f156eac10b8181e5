mod cli;
mod config;
mod db;
mod error;
mod models;
mod validation;

use clap::Parser;
use cli::{display, menus, App, Cli};
use colored::*;
use config::Config;
use db::Database;
use error::Result;
use std::path::Path;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "ups-logistics.log";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match Config::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            println!("{} {}", "Configuration error:".red().bold(), e);
            return Err(e);
        },
    };

    // Logs go to a file so they never interleave with the menus
    let _guard = init_logging(&config.log_dir)?;
    info!("Starting UPS logistics console ({})", config.database.describe());

    let db = match Database::connect(config.database.connect_options()?).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to the database: {:?}", e);
            println!(
                "{} {}",
                "Error: could not connect to the database:".red(),
                e.to_string().red()
            );
            return Err(e);
        },
    };
    let app = App::new(db);

    if cli.init_schema {
        app.init_schema().await?;
        display::success("Schema is ready.");
    }

    match app.missing_tables().await {
        Ok(missing) if !missing.is_empty() => {
            warn!("Missing tables: {:?}", missing);
            display::warning(&format!(
                "Missing tables: {}. Use \"Initialize Database Schema\" to create them.",
                missing.join(", ")
            ));
        },
        Ok(_) => {},
        Err(e) => warn!("Could not inspect the schema: {:?}", e),
    }

    println!("{}", "Connected to MySQL database.".green());
    let outcome = menus::run(&app).await;

    app.repository().close().await;
    info!("Session ended");
    outcome
}

fn init_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;
    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
