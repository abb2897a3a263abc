// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fulfil - Dialogflow webhook toolkit.
//!
//! Binary entry point: inspect request documents and check configuration.

mod inspect;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fulfil_core::ApiVersion;

/// Fulfil - Dialogflow webhook toolkit.
#[derive(Parser, Debug)]
#[command(name = "fulfil", version, about, long_about = None)]
struct Cli {
    /// Explicit configuration file instead of the default search path.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a webhook request and print what was extracted from it.
    Inspect {
        /// Path to the request JSON document.
        request: PathBuf,
        /// Schema version of the document (overrides `webhook.version`).
        #[arg(long = "schema", value_name = "VERSION")]
        schema: Option<ApiVersion>,
        /// Verify the identity token against the configured key set.
        #[arg(long)]
        verify: bool,
    },
    /// Validate and print the effective configuration.
    Config,
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fulfil={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => fulfil_config::load_and_validate_path(path),
        None => fulfil_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            fulfil_config::render_errors(&errors);
            std::process::exit(1);
        }
    };
    init_tracing(&config.webhook.log_level.to_lowercase());

    match cli.command {
        Some(Commands::Inspect {
            request,
            schema,
            verify,
        }) => match inspect::run(&request, schema, verify, &config).await {
            Ok(summary) => match serde_json::to_string_pretty(&summary) {
                Ok(text) => println!("{text}"),
                Err(e) => {
                    eprintln!("fulfil: cannot render summary: {e}");
                    std::process::exit(1);
                }
            },
            Err(e) => {
                eprintln!("fulfil: {e}");
                std::process::exit(1);
            }
        },
        Some(Commands::Config) => match toml::to_string_pretty(&config) {
            Ok(text) => print!("{text}"),
            Err(e) => {
                eprintln!("fulfil: cannot render configuration: {e}");
                std::process::exit(1);
            }
        },
        None => {
            println!("fulfil: use --help for available commands");
        }
    }
}
