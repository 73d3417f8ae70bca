use clap::Parser;
use std::io::{self, BufWriter};
use vaccine_registry::core::ConfigProvider;
use vaccine_registry::utils::{logger, validation::Validate};
use vaccine_registry::{CliConfig, CommandEngine, Messages, RegistryError, TomlConfig, VaccinationSystem};

fn exit_with(e: &RegistryError) -> ! {
    tracing::error!("❌ Startup failed: {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

fn build<C: ConfigProvider + Validate>(config: &C) -> (VaccinationSystem, Messages) {
    if let Err(e) = config.validate() {
        exit_with(&e);
    }
    (
        VaccinationSystem::from_config(config),
        Messages::new(config.locale()),
    )
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(mut config) => {
                cli.apply_to(&mut config);
                Some(config)
            }
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path.display(), e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => None,
    };

    match &file_config {
        Some(config) => logger::init_logger(config.log_format(), config.verbose()),
        None => logger::init_cli_logger(cli.verbose),
    }

    tracing::info!("Starting vaccine-registry");
    if let Some(language) = cli.unrecognized_language() {
        tracing::warn!("Unknown language '{}', using English", language);
    }

    let (system, messages) = match &file_config {
        Some(config) => {
            tracing::debug!("File config: {:?}", config);
            build(config)
        }
        None => build(&cli),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut engine = CommandEngine::new(system, messages, BufWriter::new(stdout.lock()));
    let summary = engine.run(stdin.lock())?;

    if summary.quit {
        tracing::info!("Quit requested, exiting");
    }
    Ok(())
}
