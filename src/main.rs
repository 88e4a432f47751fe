use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use dogviewer::{Outcome, ViewerConfig, Viewport};

/// Fetch random dogs from the demo server and show what the page would render.
#[derive(Parser, Debug)]
#[command(name = "dogviewer", version)]
struct Args {
    /// Base URL of the demo server
    #[arg(long, env = "DOGVIEWER_ENDPOINT", default_value = "http://127.0.0.1:8000")]
    endpoint: String,

    /// Path of the dog endpoint
    #[arg(long, default_value = "/dog")]
    path: String,

    /// Number of "new dog" presses
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Issue all presses at once instead of one after another
    #[arg(long)]
    overlap: bool,

    /// Viewport height used to fit tall images
    #[arg(long, default_value_t = 720)]
    viewport_height: u32,

    /// Natural height of the loaded image, to exercise image fitting
    #[arg(long)]
    natural_height: Option<u32>,

    /// Request timeout in milliseconds (0 = none)
    #[arg(long, default_value_t = 0)]
    timeout_ms: u64,

    /// Write the final page HTML to this file
    #[arg(long)]
    html: Option<PathBuf>,
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Loaded { url } => println!("dog: {}", url),
        Outcome::Failed(failure) => println!("no dog: {}", failure),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("LOGLEVEL", "info")).init();
    let args = Args::parse();

    let config = ViewerConfig {
        endpoint: args.endpoint,
        dog_path: args.path,
        viewport: Viewport {
            height: args.viewport_height,
            ..Default::default()
        },
        timeout_ms: args.timeout_ms,
        ..Default::default()
    };
    let viewer = dogviewer::new_viewer(config)?;

    if args.overlap {
        let presses = (0..args.count).map(|_| viewer.request_new_dog());
        for outcome in futures::future::join_all(presses).await {
            print_outcome(&outcome);
        }
    } else {
        for _ in 0..args.count {
            let outcome = viewer.request_new_dog().await;
            print_outcome(&outcome);
        }
    }

    if let Some(height) = args.natural_height {
        match viewer.adjust_media_fit(height) {
            Some(shrink) => info!("Image fitted, flex-shrink {}", shrink),
            None => info!("No image to fit"),
        }
    }

    let snapshot = viewer.render_text_snapshot()?;
    println!("{}\n{}", snapshot.title, snapshot.text.trim());

    if let Some(path) = args.html {
        std::fs::write(&path, viewer.html())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote {}", path.display());
    }

    Ok(())
}
