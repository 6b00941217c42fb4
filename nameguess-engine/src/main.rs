//! nameguess - guess a first name from quiz answers
//!
//! Reads an answer object (JSON) from a file or stdin, loads the name data
//! under the root folder (or from the configured base URL) and prints the
//! ranked guesses as JSON.

use std::io::Read;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use nameguess_common::config::{load_config_or_default, RootFolderResolver};
use nameguess_common::AnswerSet;
use nameguess_engine::{Engine, NoNoise};
use tracing::info;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for nameguess
#[derive(Parser, Debug)]
#[command(name = "nameguess")]
#[command(about = "Guess a first name from quiz answers")]
#[command(version)]
struct Args {
    /// Folder holding yobYYYY.txt national files (and the state file folder)
    #[arg(short, long, env = "NAMEGUESS_ROOT_FOLDER")]
    root_folder: Option<PathBuf>,

    /// Configuration file (default: ~/.config/nameguess/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON answers file; stdin when omitted
    #[arg(short, long)]
    answers: Option<PathBuf>,

    /// Number of guesses
    #[arg(short, long)]
    top: Option<usize>,

    /// Disable the confidence perturbation
    #[arg(long)]
    deterministic: bool,

    /// Secondary predictor model file (overrides the config)
    #[arg(long)]
    model: Option<PathBuf>,
}

fn read_answers(path: Option<&PathBuf>) -> Result<AnswerSet> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read answers from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read answers from stdin")?;
            buf
        }
    };
    AnswerSet::from_json_str(&json).context("Invalid answers")
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config =
        load_config_or_default(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(model) = &args.model {
        config.engine.model_path = Some(model.clone());
    }
    if let Some(top) = args.top {
        config.engine.top_k = top;
    }

    // Logs go to stderr (or the configured file) so stdout stays valid JSON
    let writer = match &config.logging.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    let level = &config.logging.level;
                    format!("nameguess_engine={0},nameguess_common={0}", level).into()
                }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
        .init();

    let root_folder = RootFolderResolver::new().resolve(args.root_folder.as_deref(), &config);
    info!("Root folder: {}", root_folder.display());

    let answers = read_answers(args.answers.as_ref())?;
    info!(answered = answers.answered_count(), "Answers accepted");

    let mut engine =
        Engine::from_config(&root_folder, &config).context("Failed to initialize engine")?;
    if args.deterministic {
        engine = engine.with_noise(Arc::new(NoNoise));
    }

    let report = engine.ensure_loaded().await;
    info!(
        records = report.records,
        sources_ok = report.sources_ok,
        sources_failed = report.sources_failed,
        used_fallback = report.used_fallback,
        "Name data loaded"
    );

    let guesses = engine
        .top_guesses(&answers)
        .await
        .context("Failed to rank guesses")?;
    println!("{}", serde_json::to_string_pretty(&guesses)?);
    Ok(())
}
