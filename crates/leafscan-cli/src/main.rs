mod display;
mod serve;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use leafscan_ai::{OnnxModel, Predictor};
use tracing_subscriber::EnvFilter;

const DEFAULT_MODEL_PATH: &str = "models/trained_plant_disease_model.onnx";

#[derive(Debug, Parser)]
#[command(name = "leafscan", version, about = "Plant leaf disease recognition")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the browser UI and JSON API.
    Serve(serve::ServeArgs),
    /// Classify a single image and print the advice.
    Predict(PredictArgs),
    /// List the class labels the model predicts.
    Labels {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Args)]
pub struct ModelArgs {
    /// Path to the ONNX export of the trained classifier.
    #[arg(long = "model", env = "LEAFSCAN_MODEL", default_value = DEFAULT_MODEL_PATH)]
    pub path: PathBuf,
}

#[derive(Debug, Args)]
struct PredictArgs {
    /// Image file to classify.
    image: PathBuf,
    #[command(flatten)]
    model: ModelArgs,
    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve(args) => serve::run(args).await,
        Command::Predict(args) => predict(args),
        Command::Labels { json } => display::print_labels(json),
    }
}

fn predict(args: PredictArgs) -> anyhow::Result<()> {
    let model = OnnxModel::load(&args.model.path)
        .with_context(|| format!("loading model {}", args.model.path.display()))?;
    let predictor = Predictor::new(Arc::new(model));

    let result = predictor
        .predict_path(&args.image)
        .with_context(|| format!("classifying {}", args.image.display()))?
        .into_result();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display::print_prediction(&result);
    }
    Ok(())
}
