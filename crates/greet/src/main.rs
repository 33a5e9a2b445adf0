//! Greet - Entry Point
//!
//! Demo binary for the greet library. Loads configuration, builds the
//! composition root, and prints one greeting — the command-line
//! counterpart of the original sample's demo screen.

// Force-link greet-providers to ensure linkme registrations are included
extern crate greet_providers;

use clap::Parser;
use greet_application::ports::registry::list_greeting_providers;
use greet_domain::value_objects::GreetingStyle;
use greet_infrastructure::config::ConfigLoader;
use greet_infrastructure::di::init_app;
use greet_infrastructure::logging::init_logging;

/// Command line interface for the greet demo
#[derive(Parser, Debug)]
#[command(name = "greet")]
#[command(about = "Greeting demo - layered DI composition around a one-line function")]
#[command(version)]
pub struct Cli {
    /// Name to greet
    #[arg(default_value = "Android")]
    pub name: String,

    /// Greeting style (default, formal, casual)
    #[arg(short, long)]
    pub style: Option<GreetingStyle>,

    /// Use the formal greeting (shorthand for --style formal via the
    /// contextual use case)
    #[arg(long, conflicts_with = "style")]
    pub formal: bool,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// List registered greeting providers and exit
    #[arg(long)]
    pub list_providers: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.list_providers {
        for (name, description) in list_greeting_providers() {
            println!("{name:<10} {description}");
        }
        return Ok(());
    }

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;

    init_logging(&config.logging)?;
    let context = init_app(config)?;

    let greeting = match cli.style {
        Some(style) => context.provider_for(style).greet(&cli.name),
        None => context
            .contextual_greeting()
            .execute_with_formality(&cli.name, cli.formal),
    };

    println!("{greeting}");
    Ok(())
}
