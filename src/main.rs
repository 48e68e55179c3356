mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use finhealth::settings::load_settings;

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let settings = load_settings();
    init_logging(&settings.log_level);

    let result = match cli.command {
        Commands::Analyze {
            file,
            industry,
            locale,
            json,
        } => cli::analyze::run(&settings, &file, industry, locale, json),
        Commands::Detect { file } => cli::detect::run(&file),
        Commands::Keywords => cli::keywords::run(),
        Commands::Config {
            locale,
            industry,
            log_level,
            output,
        } => cli::config::run(settings, locale, industry, log_level, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
