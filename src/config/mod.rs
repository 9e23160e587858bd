#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::http::DEFAULT_BASE_URL;
use crate::core::map_widget::MapSettings;
use crate::core::time_slots::DEFAULT_SLOT_STEP_MINUTES;
use crate::domain::model::CompanyId;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{BookingError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use toml_config::{LogFormat, TomlConfig};

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Settings after merging defaults, the config file and CLI flags (later wins).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub company_id: Option<CompanyId>,
    pub slot_step_minutes: u32,
    pub map: MapSettings,
    pub log_format: LogFormat,
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            company_id: None,
            slot_step_minutes: DEFAULT_SLOT_STEP_MINUTES,
            map: MapSettings::default(),
            log_format: LogFormat::default(),
            verbose: false,
        }
    }
}

impl AppConfig {
    pub fn from_toml(file: TomlConfig) -> Self {
        let defaults = Self::default();
        let map_defaults = defaults.map;

        Self {
            base_url: file.api.base_url.unwrap_or(defaults.base_url),
            timeout_seconds: file.api.timeout_seconds.unwrap_or(defaults.timeout_seconds),
            company_id: file.api.company_id,
            slot_step_minutes: file
                .booking
                .slot_step_minutes
                .unwrap_or(defaults.slot_step_minutes),
            map: MapSettings {
                widget_base: file.map.widget_base.unwrap_or(map_defaults.widget_base),
                zoom: file.map.zoom.unwrap_or(map_defaults.zoom),
                width: file.map.width.unwrap_or(map_defaults.width),
                height: file.map.height.unwrap_or(map_defaults.height),
            },
            log_format: file.logging.format,
            verbose: false,
        }
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &cli::Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        let mut config = Self::from_toml(file);
        if let Some(base_url) = &cli.base_url {
            config.base_url = base_url.clone();
        }
        if cli.company_id.is_some() {
            config.company_id = cli.company_id;
        }
        config.verbose = cli.verbose;
        Ok(config)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.base_url)?;
        validate_positive_number("api.timeout_seconds", self.timeout_seconds, 1)?;
        validate_range("booking.slot_step_minutes", self.slot_step_minutes, 1, 60)?;
        if 60 % self.slot_step_minutes != 0 {
            return Err(BookingError::InvalidConfigValueError {
                field: "booking.slot_step_minutes".to_string(),
                value: self.slot_step_minutes.to_string(),
                reason: "Step must divide an hour evenly".to_string(),
            });
        }
        validate_url("map.widget_base", &self.map.widget_base)?;
        validate_non_empty_string("map.width", &self.map.width)?;
        validate_non_empty_string("map.height", &self.map.height)?;
        Ok(())
    }
}

impl ConfigProvider for AppConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn company_id(&self) -> Option<CompanyId> {
        self.company_id
    }

    fn slot_step_minutes(&self) -> u32 {
        self.slot_step_minutes
    }
}
