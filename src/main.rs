use std::sync::Arc;

use anyhow::anyhow;
use clap::{Arg, Command};
use tracing::info;

mod config;
mod error;
mod http_client;
mod inference;
mod pipeline;
mod prompt;
mod validation;

use inference::{GeminiProvider, InferenceProvider, MockProvider};
use pipeline::IconPipeline;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let matches = Command::new("icogen")
        .about("AI-powered SVG icon generator")
        .long_about("icogen turns a natural-language description into SVG icon markup by delegating generation to a Gemini model and validating the result")
        .arg(Arg::new("description")
            .help("Description of the icon to generate")
            .num_args(1..))
        .arg(Arg::new("set-api-key")
            .long("set-api-key")
            .help("Set the Gemini API key")
            .value_name("API_KEY")
            .num_args(1))
        .arg(Arg::new("config")
            .long("config")
            .help("Show configuration information")
            .action(clap::ArgAction::SetTrue))
        .arg(Arg::new("output")
            .long("output")
            .short('o')
            .help("Write the generated markup to a file instead of stdout")
            .value_name("FILE")
            .num_args(1))
        .get_matches();

    // Handle configuration commands
    if let Some(api_key) = matches.get_one::<String>("set-api-key") {
        let mut config = config::Config::load()?;
        config.set_api_key(api_key.clone())?;
        println!("✅ API key saved successfully");
        return Ok(());
    }

    if matches.get_flag("config") {
        config::Config::show_config_info()?;
        return Ok(());
    }

    let description: Vec<String> = matches
        .get_many::<String>("description")
        .unwrap_or_default()
        .map(|s| s.to_string())
        .collect();

    if description.is_empty() {
        eprintln!("No description provided. Use 'icogen --help' for usage information.");
        return Ok(());
    }

    let description = description.join(" ");
    info!("Generating icon for: {}", description);

    // Composition root: pick the backend here and inject it, so the
    // pipeline never knows which model it is talking to.
    let config = config::Config::load()?;
    let provider: Arc<dyn InferenceProvider> = if config.is_mock_mode() {
        info!("Using mock provider (ICOGEN_USE_MOCK=1)");
        Arc::new(MockProvider::new())
    } else {
        let api_key = config.get_api_key().ok_or_else(|| {
            anyhow!(
                "No Gemini API key found. Please set it using one of these methods:\n\
                \n\
1. Set API key in config:\n\
   icogen --set-api-key your-key-here\n\
   \n\
2. Set environment variable:\n\
   export GEMINI_API_KEY=your-key-here\n\
   \n\
3. Check current config:\n\
   icogen --config\n\
   \n\
Get your API key from: https://aistudio.google.com/apikey"
            )
        })?;
        Arc::new(GeminiProvider::new(api_key.clone(), config.model().to_string()))
    };

    let generation_pipeline = IconPipeline::new(provider);
    let svg = generation_pipeline.generate(&description).await?;

    match matches.get_one::<String>("output") {
        Some(path) => {
            std::fs::write(path, &svg)?;
            println!("✅ Icon written to {path}");
        }
        None => println!("{svg}"),
    }

    Ok(())
}
