//! fshelper - command line access to a Freshservice tenant
//!
//! Prints resources as JSON on stdout. Logs go to stderr.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `FreshServiceDomain`: tenant name or base URL
//! - `FreshServiceUsername`: API key
//!
//! # Usage
//!
//! ```bash
//! fshelper get assets 1
//! fshelper list assets --query include=type_fields
//! fshelper requests 1
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

use fshelper::resources::{
    AssetTypesEndpoint, AssetsEndpoint, LocationsEndpoint, ServiceItemsEndpoint,
    TicketFormFieldsEndpoint, TicketsEndpoint,
};
use fshelper::{config, Endpoint, RequestService};

#[derive(Debug, Parser)]
#[command(name = "fshelper", version, about = "Query a Freshservice tenant")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch a single resource by ID.
    Get {
        resource: Resource,
        id: u64,
    },
    /// Fetch every page of a listing.
    List {
        resource: Resource,
        /// Extra query string, e.g. `include=type_fields`.
        #[arg(long)]
        query: Option<String>,
    },
    /// List the requests associated with an asset.
    Requests {
        /// Asset display ID.
        id: u64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Resource {
    Assets,
    Tickets,
    ServiceItems,
    TicketFormFields,
    AssetTypes,
    Locations,
}

impl Resource {
    fn endpoint(self, service: &RequestService) -> Endpoint<'_> {
        match self {
            Resource::Assets => AssetsEndpoint::new(service).into_inner(),
            Resource::Tickets => TicketsEndpoint::new(service).into_inner(),
            Resource::ServiceItems => ServiceItemsEndpoint::new(service).into_inner(),
            Resource::TicketFormFields => TicketFormFieldsEndpoint::new(service).into_inner(),
            Resource::AssetTypes => AssetTypesEndpoint::new(service).into_inner(),
            Resource::Locations => LocationsEndpoint::new(service).into_inner(),
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // stdout is reserved for JSON output
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fshelper=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let config = config::Config::from_env().context("Failed to load configuration")?;
    tracing::debug!("Configuration loaded, base_url: {}", config.base_url);

    let mut service = RequestService::from_config(&config);
    let output = service
        .scoped(|svc| run(&cli.command, svc))
        .context("Freshservice request failed")?;

    let rendered = serde_json::to_string_pretty(&output).context("Failed to render output")?;
    println!("{}", rendered);

    Ok(())
}

fn run(command: &Command, service: &RequestService) -> Result<Value, fshelper::FsError> {
    match command {
        Command::Get { resource, id } => resource.endpoint(service).get(*id),
        Command::List { resource, query } => {
            let endpoint = resource.endpoint(service);
            let items = endpoint.collect_all(query.as_deref())?;
            tracing::info!(count = items.len(), resource = ?resource, "Listing complete");
            Ok(Value::Array(items))
        }
        Command::Requests { id } => AssetsEndpoint::new(service).get_associated_requests(*id),
    }
}
