use super::toml_config::{resolve_max_batches, TomlConfig, MAX_BATCHES_LIMIT};
use crate::core::messages::Locale;
use crate::core::ConfigProvider;
use crate::domain::Date;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "vaccine-registry")]
#[command(about = "Vaccine batch and inoculation registry driven by line commands on stdin")]
pub struct CliConfig {
    /// Message language: `pt` selects Portuguese, anything else English
    pub language: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum number of batches kept at once (0 for no limit)
    #[arg(long)]
    pub max_batches: Option<usize>,

    /// Initial system date, D-M-Y
    #[arg(long)]
    pub start_date: Option<Date>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Command-line values win over the file.
    pub fn apply_to(&self, config: &mut TomlConfig) {
        if let Some(language) = &self.language {
            config.system.locale = Some(Locale::from_arg(language));
        }
        if let Some(start_date) = self.start_date {
            config.system.start_date = Some(start_date);
        }
        if let Some(max_batches) = self.max_batches {
            config.system.max_batches = Some(max_batches);
        }
        if self.verbose {
            config.logging.verbose = Some(true);
        }
    }

    /// Language argument that is neither absent nor `pt`.
    pub fn unrecognized_language(&self) -> Option<&str> {
        self.language.as_deref().filter(|l| *l != "pt")
    }
}

impl ConfigProvider for CliConfig {
    fn locale(&self) -> Locale {
        self.language
            .as_deref()
            .map(Locale::from_arg)
            .unwrap_or_default()
    }

    fn start_date(&self) -> Date {
        self.start_date.unwrap_or_default()
    }

    fn max_batches(&self) -> Option<usize> {
        resolve_max_batches(self.max_batches)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(max) = self.max_batches {
            validate_range("max_batches", max, 0, MAX_BATCHES_LIMIT)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_means_english_defaults() {
        let cli = CliConfig::parse_from(["vaccine-registry"]);
        assert_eq!(cli.locale(), Locale::En);
        assert_eq!(cli.start_date(), Date::default());
        assert_eq!(cli.max_batches(), Some(1000));
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_pt_argument() {
        let cli = CliConfig::parse_from(["vaccine-registry", "pt"]);
        assert_eq!(cli.locale(), Locale::Pt);
        assert_eq!(cli.unrecognized_language(), None);

        let cli = CliConfig::parse_from(["vaccine-registry", "fr"]);
        assert_eq!(cli.locale(), Locale::En);
        assert_eq!(cli.unrecognized_language(), Some("fr"));
    }

    #[test]
    fn test_flags() {
        let cli = CliConfig::parse_from([
            "vaccine-registry",
            "--start-date",
            "10-10-2030",
            "--max-batches",
            "0",
            "-v",
        ]);
        assert_eq!(cli.start_date().to_string(), "10-10-2030");
        assert_eq!(cli.max_batches(), None);
        assert!(cli.verbose);
    }

    #[test]
    fn test_rejects_bad_start_date() {
        let parsed = CliConfig::try_parse_from(["vaccine-registry", "--start-date", "31-04-2025"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_overrides_file_values() {
        let mut config =
            TomlConfig::from_toml_str("[system]\nlocale = \"en\"\nmax_batches = 5\n").unwrap();
        let cli = CliConfig::parse_from(["vaccine-registry", "pt", "--max-batches", "7"]);
        cli.apply_to(&mut config);

        assert_eq!(config.locale(), Locale::Pt);
        assert_eq!(config.max_batches(), Some(7));
        assert_eq!(config.start_date(), Date::default());
    }
}
