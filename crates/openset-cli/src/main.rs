//! Command-line entry point: split, (optionally) train, score, sweep, report.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use openset_core::config::{CliOverrides, OpensetConfig};
use openset_core::errors::{DataError, PipelineError};
use openset_data::{open_set_split, FsSource};
use openset_eval::{report, score_checkpoint, sweep, train};
use openset_model::{LinearClassifier, Lookahead, RAdam};

/// Open-set identification evaluator.
///
/// By default only evaluates an existing checkpoint; pass `--train` to fit
/// the classifier on the enrolled partition first.
#[derive(Debug, Parser)]
#[command(name = "openset", version, about)]
struct Cli {
    /// Run root; `openset.toml` is read from here when present.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Dataset root directory (overrides config).
    #[arg(long)]
    dataset_root: Option<PathBuf>,

    /// Output directory for artifacts (overrides config).
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Split seed (overrides config).
    #[arg(long)]
    seed: Option<u64>,

    /// Train the classifier before evaluating.
    #[arg(long)]
    train: bool,

    /// Number of training epochs (overrides config).
    #[arg(long)]
    epochs: Option<u32>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "run failed");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), PipelineError> {
    let overrides = CliOverrides {
        dataset_root: cli.dataset_root.clone(),
        output_dir: cli.output_dir.clone(),
        seed: cli.seed,
        epochs: cli.epochs,
    };
    let mut config = OpensetConfig::load(&cli.root, Some(&overrides))?;

    if config.dataset.subjects.is_empty() {
        config.dataset.subjects = discover_subjects(&config.dataset.root())?;
        tracing::info!(
            subjects = config.dataset.subjects.len(),
            root = %config.dataset.root().display(),
            "discovered subjects from dataset root"
        );
    }

    let split = open_set_split(&config.dataset)?;
    let batch_size = config.dataset.batch_size();
    let feature_len = config.dataset.feature_len();
    let checkpoint_path = config.output.checkpoint();

    let mut model = LinearClassifier::new(split.mapping.len(), feature_len, config.dataset.seed());

    if cli.train {
        let mut train_source = FsSource::new(split.train, batch_size, feature_len);
        let mut optimizer = Lookahead::new(
            RAdam::new(
                config.training.learning_rate(),
                config.training.weight_decay(),
            ),
            config.training.lookahead_k(),
            config.training.lookahead_alpha(),
        );
        train(
            &mut model,
            &mut train_source,
            &mut optimizer,
            config.training.epochs(),
            &checkpoint_path,
        )?;
    }

    let mut test_source = FsSource::new(split.test, batch_size, feature_len);
    let scores = score_checkpoint(&mut model, &mut test_source, &checkpoint_path)?;

    let curve = sweep(&scores);
    if let Some(idx) = curve.eer_index() {
        tracing::info!(
            threshold = format!("{:.4}", curve.thresholds[idx]),
            far = format!("{:.4}", curve.far[idx]),
            frr = format!("{:.4}", curve.frr[idx]),
            "equal error rate"
        );
    }

    report::write_all(&curve, &config.output)?;
    tracing::info!(dir = %config.output.dir().display(), "artifacts written");
    Ok(())
}

/// Every directory directly under the dataset root is a subject.
fn discover_subjects(root: &std::path::Path) -> Result<Vec<String>, DataError> {
    let entries = std::fs::read_dir(root).map_err(|e| DataError::Io {
        path: root.display().to_string(),
        message: e.to_string(),
    })?;

    let mut subjects = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DataError::Io {
            path: root.display().to_string(),
            message: e.to_string(),
        })?;
        if entry.path().is_dir() {
            subjects.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    subjects.sort();
    Ok(subjects)
}
