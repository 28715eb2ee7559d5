use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cvinsight_client::config::Config;
use cvinsight_client::models::SelectedFile;
use cvinsight_client::{Controller, Gateway, UploadOutcome};

#[derive(Parser)]
#[command(name = "cvinsight", version, about = "Upload resumes and browse parsed records")]
struct Cli {
    /// Service origin; overrides CVINSIGHT_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the stored resumes
    List,
    /// Upload a resume, then show the response and the refreshed list
    Upload {
        /// Document to upload
        path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "cvinsight_client={0},{1}={0}",
                &config.rust_log,
                env!("CARGO_CRATE_NAME")
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let gateway = Gateway::new(cli.api_url.unwrap_or(config.api_url));
    info!("Using CVInsight API at {}", gateway.base_url());
    let controller = Controller::new(gateway);

    let initial_load = controller.mount();

    match cli.command {
        Command::List => {
            initial_load.await?;
        }
        Command::Upload { path } => {
            if let Some(path) = path {
                controller.select_file(SelectedFile::from_path(&path).await?);
            }
            let outcome = controller.upload().await;
            initial_load.await?;
            if let UploadOutcome::Rejected { alert } = outcome {
                eprintln!("{alert}");
            }
        }
    }

    print!("{}", controller.view());
    Ok(())
}
