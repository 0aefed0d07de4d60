use clap::Parser;
use log::info;
use recipe_grid::{render_page, AppConfig, Error};
use std::path::PathBuf;

/// Render the recipe grid page from the recipes API
#[derive(Parser, Debug)]
#[command(name = "recipe-grid", version, about)]
struct Cli {
    /// Configuration file (defaults to ./recipe-grid.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Recipes endpoint, overriding the configuration
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Write the page here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(endpoint) = cli.endpoint {
        config.api.endpoint = endpoint;
    }

    let page = render_page(&config).await?;

    match cli.output {
        Some(path) => {
            tokio::fs::write(&path, page).await?;
            info!("Wrote page to {}", path.display());
        }
        None => println!("{}", page),
    }

    Ok(())
}
