mod catalog;
mod config;
mod forms;
mod http_server;
mod logging;
mod ports;
mod remote;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use url::Url;

use crate::{
    config::Config,
    http_server::app::HttpServerConfig,
    logging::setup_logging,
    remote::RemoteEnv,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The config file to use
    #[arg(short, long, env = "CATALOG_MANAGER_CONFIG")]
    config: Option<PathBuf>,

    /// Console log level (default: info)
    #[arg(long, default_value = "info", global = true, env = "LOG_LEVEL")]
    log_level: log::LevelFilter,

    /// File log level (default: debug)
    #[arg(long, default_value = "debug", global = true)]
    log_file_level: log::LevelFilter,

    /// Path to log file
    #[arg(long, env = "CATALOG_MANAGER_LOG_FILE", global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the catalog HTTP routes
    Serve {
        /// The port to run the server on
        #[arg(short, long, default_value = "3000", env = "CATALOG_MANAGER_HTTP_PORT")]
        port: u16,

        /// Remote GraphQL endpoint (overrides the config file)
        #[arg(long, env = "GRAPHQL_ENDPOINT")]
        graphql_endpoint: Option<String>,

        /// Remote GraphQL credential (overrides the config file)
        #[arg(long, env = "GRAPHQL_AUTH")]
        graphql_auth: Option<String>,
    },
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Create a default config file, if it doesn't exist
    CreateDefault,
    /// Print the path to the config file
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    setup_logging(args.log_level, args.log_file.clone(), args.log_file_level)?;

    log::debug!("Catalog manager starting");

    match args.command {
        Commands::Serve {
            port,
            graphql_endpoint,
            graphql_auth,
        } => {
            // Args and environment win over the config file, but a config
            // file that fails to load is an error, not a silent fallback.
            let config = Config::resolve(args.config.as_ref())
                .with_context(|| "Failed to load catalog-manager config")?;

            let endpoint = graphql_endpoint
                .or_else(|| config.remote_endpoint())
                .ok_or_else(|| {
                    eyre!(
                        "No GraphQL endpoint configured. Set it via --graphql-endpoint, \
                         GRAPHQL_ENDPOINT, or the config file"
                    )
                })?;
            let auth = graphql_auth
                .or_else(|| config.remote_auth())
                .ok_or_else(|| {
                    eyre!(
                        "No GraphQL credential configured. Set it via --graphql-auth, \
                         GRAPHQL_AUTH, or the config file"
                    )
                })?;

            let endpoint = Url::parse(&endpoint)
                .map_err(|e| eyre!("Invalid GraphQL endpoint `{endpoint}`: {e}"))?;

            log::info!("Starting HTTP server on port: {}", port);
            http_server::app::start(HttpServerConfig {
                port,
                env: RemoteEnv { endpoint, auth },
            })
            .await?;
        }
        Commands::Config(config_commands) => match config_commands {
            ConfigCommands::CreateDefault => {
                log::debug!("Creating default config");
                Config::create_default()?;
                log::info!("Default config created successfully");
            }
            ConfigCommands::Path => match Config::config_path() {
                Some(path) => println!("{}", path.display()),
                None => println!("No default config path found"),
            },
        },
    }

    Ok(())
}
