//! CLI command implementations

use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Subcommand;
use showreel_core::{Catalog, ShowreelConfig};
use showreel_web::{RenderedSite, ShowreelServer, export_site};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<IpAddr>,
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory served under /photos
        #[arg(long)]
        photos_dir: Option<PathBuf>,
    },
    /// Write the site as static files
    Export {
        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Directory whose photos are copied into the export
        #[arg(long)]
        photos_dir: Option<PathBuf>,
    },
    /// List every catalog entry with its resolved video id
    Catalog {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Handle the CLI command
///
/// Flags override the environment, which overrides the defaults.
///
/// # Errors
/// - `anyhow::Error` - The command failed, with context attached
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    let config = ShowreelConfig::from_env();

    match command {
        Commands::Serve {
            host,
            port,
            photos_dir,
        } => serve(config, host, port, photos_dir).await,
        Commands::Export { output, photos_dir } => export(config, output, photos_dir).await,
        Commands::Catalog { json } => {
            let catalog = Catalog::portfolio();
            if json {
                print_catalog_json(&catalog)
            } else {
                list_catalog(&catalog);
                Ok(())
            }
        }
    }
}

/// Start the web server
///
/// # Errors
/// - `WebError::Core` - Invalid configuration
/// - `WebError::ServerStartFailed` - Address could not be bound
/// - `WebError::ServerFailed` - Server stopped with an error
pub async fn serve(
    mut config: ShowreelConfig,
    host: Option<IpAddr>,
    port: Option<u16>,
    photos_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(dir) = photos_dir {
        config.server.photos_dir = dir;
    }

    let address = config.server.socket_addr();
    let server = ShowreelServer::bind(Catalog::portfolio(), config)
        .await
        .with_context(|| format!("Failed to start server on {address}"))?;

    let local = server.local_addr()?;
    println!("Showreel running on http://{local}");

    server.serve().await.context("Server stopped unexpectedly")
}

/// Write the rendered site to disk
///
/// # Errors
/// - `WebError::Core` - Invalid configuration
/// - `WebError::ExportFailed` - A file could not be written
pub async fn export(
    mut config: ShowreelConfig,
    output: Option<PathBuf>,
    photos_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    if let Some(output) = output {
        config.export.output_dir = output;
    }
    let output = config.export.output_dir.clone();
    let photos_dir = photos_dir.unwrap_or_else(|| config.server.photos_dir.clone());

    let site = RenderedSite::build(Catalog::portfolio(), config).context("Failed to render site")?;
    let summary = export_site(&site, &output, Some(&photos_dir))
        .await
        .with_context(|| format!("Failed to export site to {}", output.display()))?;

    println!("Exported site to {}", output.display());
    println!("  Pages:     {}", summary.pages);
    println!("  Fragments: {}", summary.fragments);
    println!("  Assets:    {}", summary.assets);
    println!("  Photos:    {}", summary.photos);

    Ok(())
}

/// Print the catalog, flagging entries that will render as placeholders.
pub fn list_catalog(catalog: &Catalog) {
    for collection in catalog.collections() {
        println!("{} ({} entries)", collection.kind.anchor(), collection.len());
        println!("{:-<60}", "");

        for entry in collection.entries() {
            match entry.video_id() {
                Some(id) => println!("  {:<14} {}", id.as_str(), entry.title),
                None => {
                    tracing::warn!(title = entry.title, url = entry.url, "Unresolvable video URL");
                    println!("  {:<14} {}", "(placeholder)", entry.title);
                }
            }
        }
        println!();
    }
}

/// Print the catalog as a JSON array, one object per entry.
///
/// # Errors
/// - `serde_json::Error` - Serialization failed
pub fn print_catalog_json(catalog: &Catalog) -> anyhow::Result<()> {
    let rows: Vec<_> = catalog
        .collections()
        .into_iter()
        .flat_map(|collection| {
            collection.entries().iter().map(move |entry| {
                serde_json::json!({
                    "collection": collection.kind,
                    "entry": entry,
                    "video_id": entry.video_id().map(|id| id.as_str().to_string()),
                })
            })
        })
        .collect();

    println!(
        "{}",
        serde_json::to_string_pretty(&rows).context("Failed to serialize catalog")?
    );
    Ok(())
}
