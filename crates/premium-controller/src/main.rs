//! `premium` - request an insurance premium estimate from the command line.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use premium_controller::render::render_estimate;
use premium_controller::{Controller, ControllerConfig, ControllerError};
use premium_protocol::bmi::{calculate_bmi, category_for};
use premium_protocol::FormInput;

#[derive(Parser)]
#[command(name = "premium", version, about = "Insurance premium estimator")]
struct Cli {
    /// Config file (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Prediction service base URL; overrides config and API_URL.
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Request an estimate and its feature contributions.
    Estimate(EstimateArgs),
    /// Compute BMI from height and weight.
    Bmi {
        #[arg(long)]
        height_cm: f64,
        #[arg(long)]
        weight_kg: f64,
    },
    /// Check whether the prediction service is reachable.
    Health,
}

#[derive(Args)]
struct EstimateArgs {
    #[arg(long, default_value = "")]
    age: String,
    /// Leave empty to compute it from --height-cm and --weight-kg.
    #[arg(long, default_value = "")]
    bmi: String,
    #[arg(long, default_value = "")]
    children: String,
    /// "yes" or "no".
    #[arg(long, default_value = "")]
    smoker: String,
    #[arg(long, requires = "weight_kg")]
    height_cm: Option<f64>,
    #[arg(long, requires = "height_cm")]
    weight_kg: Option<f64>,
    /// Include per-feature explanations.
    #[arg(long)]
    details: bool,
    /// Print the session view as JSON.
    #[arg(long)]
    json: bool,
}

fn init_tracing(config: &ControllerConfig, verbose: bool) {
    let default = if verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ControllerConfig::load(cli.config.as_deref())?.with_api_url(cli.api_url);
    init_tracing(&config, cli.verbose);
    tracing::debug!(api_url = %config.api_url, "Configuration loaded");

    match cli.command {
        Command::Estimate(args) => run_estimate(&config, args).await,
        Command::Bmi { height_cm, weight_kg } => {
            let bmi = calculate_bmi(height_cm, weight_kg)?;
            println!("BMI: {bmi:.2} ({})", category_for(bmi));
            Ok(())
        }
        Command::Health => {
            let controller = Controller::from_config(&config)?;
            controller
                .probe_health()
                .await
                .with_context(|| format!("Prediction service at {} is unreachable", config.api_url))?;
            println!("Prediction service at {} is reachable", config.api_url);
            Ok(())
        }
    }
}

async fn run_estimate(config: &ControllerConfig, args: EstimateArgs) -> Result<()> {
    let controller = Controller::from_config(config)?;
    if config.warm_up {
        // Best effort; the handle is dropped and the outcome only logged.
        let _ = controller.warm_up();
    }

    controller
        .set_form(FormInput::new(args.age, args.bmi, args.children, args.smoker))
        .await;

    if let (Some(height_cm), Some(weight_kg)) = (args.height_cm, args.weight_kg) {
        if controller.form().await.bmi.trim().is_empty() {
            let bmi = controller.apply_bmi(height_cm, weight_kg).await?;
            tracing::info!(bmi, category = %category_for(bmi), "BMI computed from height and weight");
        }
    }

    match controller.submit().await {
        Ok(_) => {}
        Err(ControllerError::Validation(e)) => bail!("{e}"),
        // Service failures are diagnostic only and already logged.
        Err(_) => bail!("estimate unavailable"),
    }

    if args.details {
        controller.toggle_details().await;
    }

    let view = controller.view().await;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else if let Some(estimate) = &view.estimate {
        print!("{}", render_estimate(estimate, view.show_details));
    }
    Ok(())
}
