use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use object_store_client::{
    ClientConfig, CreateObjectInput, DeleteObjectInput, GetObjectInput, ObjectClient,
    ObjectDescriptor, config::ConnectionArgs,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Command-line interface to the object API.
#[derive(Parser, Debug)]
#[command(author, version, about = "Create, inspect and delete storage objects")]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upload a file (or copy an existing object) and print its descriptor
    Create {
        container: String,
        name: String,

        /// File to upload as the object body
        #[arg(long, conflicts_with = "copy_from")]
        file: Option<PathBuf>,

        /// Existing `container/object` to copy server-side
        #[arg(long)]
        copy_from: Option<String>,

        #[arg(long)]
        content_type: Option<String>,

        #[arg(long)]
        content_encoding: Option<String>,

        #[arg(long)]
        content_disposition: Option<String>,

        /// Expiry instant in seconds since the epoch
        #[arg(long)]
        delete_at: Option<u64>,

        /// Metadata entry as key=value, may be repeated
        #[arg(long = "meta", value_parser = parse_meta)]
        meta: Vec<(String, String)>,

        /// Send the MD5 of the body as ETag
        #[arg(long)]
        compute_etag: bool,
    },
    /// Print an object's descriptor
    Get {
        /// Compound identifier `container/object`
        #[arg(long, conflicts_with_all = ["container", "name"])]
        id: Option<String>,

        container: Option<String>,
        name: Option<String>,

        /// Byte range, e.g. `bytes=0-99`
        #[arg(long, default_value = "")]
        range: String,

        /// Ask every replica for the most recent copy
        #[arg(long)]
        newest: bool,
    },
    /// Delete an object
    Delete {
        #[arg(long, conflicts_with_all = ["container", "name"])]
        id: Option<String>,

        container: Option<String>,
        name: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // --- Logging setup ---
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = ClientConfig::from_env_and_args(&cli.connection)?;
    tracing::debug!("Using endpoint {} (container path `{}`)", cfg.endpoint, cfg.container_path);

    let client = ObjectClient::connect(cfg)?;

    match cli.command {
        Command::Create {
            container,
            name,
            file,
            copy_from,
            content_type,
            content_encoding,
            content_disposition,
            delete_at,
            meta,
            compute_etag,
        } => {
            let mut input = CreateObjectInput {
                container,
                name,
                copy_from,
                content_type,
                content_encoding,
                content_disposition,
                delete_at,
                metadata: meta.into_iter().collect(),
                ..Default::default()
            };
            if let Some(path) = file {
                let body = tokio::fs::read(&path)
                    .await
                    .with_context(|| format!("reading {}", path.display()))?;
                input = input.with_body(body);
            }
            if compute_etag {
                input = input.with_computed_etag();
            }
            print_descriptor(&client.create_object(&input).await?)?;
        }
        Command::Get {
            id,
            container,
            name,
            range,
            newest,
        } => {
            let input = GetObjectInput {
                id: id.unwrap_or_default(),
                container: container.unwrap_or_default(),
                name: name.unwrap_or_default(),
                range,
                newest,
            };
            print_descriptor(&client.get_object(&input).await?)?;
        }
        Command::Delete {
            id,
            container,
            name,
        } => {
            let input = DeleteObjectInput {
                id: id.unwrap_or_default(),
                container: container.unwrap_or_default(),
                name: name.unwrap_or_default(),
            };
            client.delete_object(&input).await?;
        }
    }

    Ok(())
}

fn print_descriptor(object: &ObjectDescriptor) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(object)?);
    Ok(())
}

/// Parse a `key=value` metadata argument.
fn parse_meta(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got `{}`", raw)),
    }
}
