//! ontapctl
//!
//! Command-line interface for reading and adjusting NetApp ONTAP
//! configuration through the cluster management REST API.

mod commands;
mod config;
mod output;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, handle_command};
use config::{Config, OutputConfig};
use ontap_client::Credentials;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ontapctl")]
#[command(about = "NetApp ONTAP management CLI", long_about = None)]
struct Cli {
    /// Cluster management address (host or host:port)
    #[arg(short = 'c', long, env = "ONTAP_CLUSTER")]
    cluster: String,

    /// API username
    #[arg(short = 'u', long, env = "ONTAP_USER", default_value = "admin")]
    api_user: String,

    /// API password (prompted without echo when omitted)
    #[arg(short = 'p', long, env = "ONTAP_PASSWORD", hide_env_values = true)]
    api_pass: Option<String>,

    /// Accept self-signed TLS certificates on the management endpoint
    #[arg(long)]
    insecure: bool,

    /// Naming prefix of provisioned SVMs
    #[arg(long, env = "ONTAP_SVM_PREFIX", default_value = "ifs_prod")]
    svm_prefix: String,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30)]
    request_timeout: u64,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Write the JSON rendering of the result to a file
    #[arg(long, global = true, value_name = "PATH")]
    output_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let password = match cli.api_pass {
        Some(password) => password,
        None => rpassword::prompt_password(format!("Password for {}: ", cli.api_user))
            .context("Failed to read password")?,
    };

    let config = Config {
        cluster: cli.cluster,
        credentials: Credentials::new(cli.api_user, password),
        accept_invalid_certs: cli.insecure,
        request_timeout: Duration::from_secs(cli.request_timeout),
        svm_prefix: cli.svm_prefix,
        output: OutputConfig {
            json: cli.json,
            file: cli.output_file,
        },
    };
    config.validate()?;
    debug!(
        "Using cluster {} as {}",
        config.cluster,
        config.credentials.username()
    );

    handle_command(cli.command, &config).await
}

/// Log to stderr so stdout only carries command output
///
/// `RUST_LOG` overrides the level chosen by `--verbose`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "ontapctl=debug,ontap_client=debug"
    } else {
        "ontapctl=info,ontap_client=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
