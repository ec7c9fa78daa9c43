use anyhow::Result;
use clap::{Parser, Subcommand};
use cloudinary_uploader::{resize, Config, Service};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "cloudinary-uploader")]
#[command(about = "Upload images to Cloudinary and build resized delivery URLs")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Upload a local image file.
    UploadFile {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
    /// Have the service fetch and store an image from a URL.
    UploadUrl {
        #[arg(value_name = "URL", value_parser = parse_url_arg)]
        url: Url,
    },
    /// Print a delivery URL rewritten to a resized variant.
    Resize {
        #[arg(value_name = "URL", value_parser = parse_url_arg)]
        url: Url,
        #[arg(long)]
        width: u32,
        #[arg(long)]
        height: u32,
    },
    /// Delete an uploaded image.
    Delete {
        #[arg(value_name = "URL", value_parser = parse_url_arg)]
        url: Url,
    },
}

fn parse_url_arg(input: &str) -> std::result::Result<Url, String> {
    Url::parse(input).map_err(|e| format!("Invalid URL '{}': {}", input, e))
}

fn connect() -> cloudinary_uploader::Result<Service> {
    let config = Config::from_env()?;
    Service::from_config(&config)
}

async fn run(command: Command) -> cloudinary_uploader::Result<Url> {
    match command {
        Command::UploadFile { path } => {
            info!("Uploading {}", path.display());
            connect()?.upload_image_path(&path).await
        }
        Command::UploadUrl { url } => {
            info!("Uploading from {}", url);
            connect()?.upload_image_url(&url).await
        }
        Command::Resize { url, width, height } => resize::resized_image_url(&url, width, height),
        Command::Delete { url } => {
            connect()?.delete(&url).await?;
            Ok(url)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cloudinary_uploader=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    match run(args.command).await {
        Ok(url) => {
            println!("{}", url);
            Ok(())
        }
        Err(e) => {
            error!("Command failed: {}", e);
            std::process::exit(1);
        }
    }
}
