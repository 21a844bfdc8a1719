use chrono_tz::Tz;
use log::LevelFilter;
use std::env;
use std::str::FromStr;

use crate::shared::errors::{AppError, AppResult};

pub const LOG_LEVEL_VAR: &str = "ZOO_LOG_LEVEL";
pub const TIMEZONE_VAR: &str = "ZOO_TIMEZONE";
pub const FEEDING_PERSIST_ALL_VAR: &str = "ZOO_FEEDING_PERSIST_ALL";
pub const AUDIT_CAPACITY_VAR: &str = "ZOO_AUDIT_CAPACITY";

/// Runtime settings of the zoo core
#[derive(Debug, Clone, PartialEq)]
pub struct ZooConfig {
    pub log_level: LevelFilter,
    /// Zone of the statistics "today" window; `None` means the server's local zone
    pub timezone: Option<Tz>,
    /// Whether a feeding sweep writes back every schedule or only the fed ones
    pub persist_all_schedules: bool,
    pub audit_capacity: usize,
}

impl Default for ZooConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            timezone: None,
            persist_all_schedules: true,
            audit_capacity: 1000,
        }
    }
}

impl ZooConfig {
    /// Read the process environment, loading `.env` first when present
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys keep their default
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(level) = read(LOG_LEVEL_VAR) {
            config.log_level = LevelFilter::from_str(&level).map_err(|_| {
                AppError::ValidationError(format!("{LOG_LEVEL_VAR}: unknown log level '{level}'"))
            })?;
        }

        if let Some(zone) = read(TIMEZONE_VAR) {
            let tz = zone.parse::<Tz>().map_err(|_| {
                AppError::ValidationError(format!("{TIMEZONE_VAR}: unknown time zone '{zone}'"))
            })?;
            config.timezone = Some(tz);
        }

        if let Some(flag) = read(FEEDING_PERSIST_ALL_VAR) {
            config.persist_all_schedules = parse_bool(&flag).ok_or_else(|| {
                AppError::ValidationError(format!(
                    "{FEEDING_PERSIST_ALL_VAR}: expected a boolean, got '{flag}'"
                ))
            })?;
        }

        if let Some(capacity) = read(AUDIT_CAPACITY_VAR) {
            config.audit_capacity = capacity.parse::<usize>().map_err(|_| {
                AppError::ValidationError(format!(
                    "{AUDIT_CAPACITY_VAR}: expected a non-negative integer, got '{capacity}'"
                ))
            })?;
        }

        Ok(config)
    }

    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = Some(timezone);
        self
    }

    pub fn with_persist_all_schedules(mut self, persist_all: bool) -> Self {
        self.persist_all_schedules = persist_all;
        self
    }

    pub fn with_audit_capacity(mut self, capacity: usize) -> Self {
        self.audit_capacity = capacity;
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
