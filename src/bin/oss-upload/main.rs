// oss-upload - upload a local directory tree to an S3 compatible bucket

mod cli;
mod progress;

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use oss_upload::action::{self, ActionOutput};
use oss_upload::{load_config, AwsS3ObjectStore, ConfigLayer, UploadError, Uploader};
use progress::{format_bytes, UploadProgressBar};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stdout)
        .try_init();
}

/// Render an error with its context, skipping causes the message already shows
fn render_error(err: &anyhow::Error) -> String {
    let mut message = String::new();
    for cause in err.chain() {
        let cause = cause.to_string();
        if message.contains(&cause) {
            break;
        }
        if !message.is_empty() {
            message.push_str(": ");
        }
        message.push_str(&cause);
    }
    message
}

async fn run(cli: &Cli, output: &ActionOutput) -> Result<()> {
    // Configuration is complete and validated before any file or network I/O
    let inputs = ConfigLayer::from_inputs(action::get_input).context("failed to read inputs")?;
    let config = load_config(cli.config.as_deref(), inputs, cli.overrides())
        .context("failed to load configuration")?;
    tracing::debug!("{:?}", config);

    let store = AwsS3ObjectStore::new(config.store_config())
        .await
        .context("failed to create S3 client")?;

    let progress_bar = cli.progress.then(|| Arc::new(UploadProgressBar::new()));
    let mut uploader = Uploader::new(&store, &config);
    if let Some(bar) = &progress_bar {
        uploader = uploader.with_progress(bar.clone());
    }

    let result = uploader.run().await?;
    if let Some(bar) = &progress_bar {
        bar.finish();
    }

    tracing::info!(
        "uploaded {} files ({}) to bucket {}",
        result.objects.len(),
        format_bytes(result.total_bytes),
        store.bucket()
    );

    result.write_outputs(output).map_err(UploadError::Output)?;

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli, &ActionOutput::from_env()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = render_error(&err);
            tracing::error!("{}", message);
            action::issue_error(&message);
            ExitCode::FAILURE
        }
    }
}
