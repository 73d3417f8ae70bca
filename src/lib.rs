pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use crate::core::{
    engine::{CommandEngine, SessionSummary},
    messages::{Locale, Messages},
    system::VaccinationSystem,
};
pub use utils::error::{RegistryError, Result};
