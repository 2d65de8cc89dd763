mod config;
mod error;
mod ai {
    pub mod client;
    pub mod prompts;
}
mod generator;
mod ui;

use ai::client::{CompletionClient, OpenRouterClient};
use config::AppConfig;
use dotenv::dotenv;
use error::PromptError;
use generator::PromptGenerator;
use std::io;
use std::sync::Arc;
use ui::Form;

fn build_client() -> Result<Arc<dyn CompletionClient>, PromptError> {
    let config = AppConfig::from_env()?;
    let client = OpenRouterClient::new(&config)?;
    log::info!("OpenRouter client ready (model: {})", config.model);
    Ok(Arc::new(client))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let (client, banner) = match build_client() {
        Ok(client) => (Some(client), None),
        Err(e) => {
            log::error!("API client unavailable: {e}");
            (None, Some(ui::startup_banner(&e)))
        }
    };

    let generator = PromptGenerator::new(client);
    if !generator.is_loaded() {
        log::warn!("Running in disabled mode; every request returns a placeholder");
    }

    let mut form = Form::new(io::stdin().lock(), io::stdout()).with_banner(banner);
    form.run(&generator).await?;

    Ok(())
}
