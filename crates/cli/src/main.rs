//! Entry point for the `model-pipeline` binary.
//!
//! Builds the model, work queue, pipeline and controller, feeds one input
//! record through them and reports the resulting pipeline state.

use clap::Parser;
use color_eyre::eyre::WrapErr;
use colored::Colorize;
use mp_core::config::loader::load_config;
use mp_core::controller::Controller;
use mp_core::model::ModelFactory;
use mp_core::pipeline::Pipeline;
use mp_core::queue::WorkQueue;
use mp_protocol::pipeline_models::PipelineState;
use mp_protocol::record::Record;
use std::path::PathBuf;
use tracing::info;

const DEFAULT_INPUT: &str = r#"{"feature1": 10, "feature2": 20}"#;

#[derive(Parser, Debug)]
#[command(
    name = "model-pipeline",
    about = "Run an input record through a model and into the data pipeline",
    version
)]
struct Args {
    /// Project root containing the `.model-pipeline/` directory
    #[arg(long, default_value = ".")]
    root: PathBuf,
    /// Input record as a flat JSON object
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: String,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn paint(state: PipelineState) -> colored::ColoredString {
    match state {
        PipelineState::Idle => state.as_str().normal(),
        PipelineState::Running => state.as_str().green(),
        PipelineState::Paused => state.as_str().yellow(),
        PipelineState::Failed => state.as_str().red(),
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_tracing(args.verbose);

    let input = Record::from_json(&args.input)
        .wrap_err_with(|| format!("Invalid --input record: {}", args.input))?;

    let config = load_config(&args.root).await?;
    let model = ModelFactory::create(&config.global.model, &config.config_dir)
        .map_err(|e| color_eyre::eyre::eyre!(e))?;

    let (queue, worker) = WorkQueue::spawn();
    let pipeline = Pipeline::new(queue.clone());
    let mut controller = Controller::new(model, pipeline);

    info!(model = controller.model().name(), %input, "submitting input");
    controller.control_data_pipeline(&input).await;

    let state = controller.pipeline().state();
    println!("pipeline state: {}", paint(state));

    // Let queued work finish before the runtime shuts down.
    drop(controller);
    drop(queue);
    worker.join().await;

    Ok(())
}
