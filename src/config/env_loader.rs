use crate::config::model::Config;
use crate::error::ConfigError;
use chrono::NaiveDate;
use chrono_tz::Tz;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_VENUES_FILE: &str = "venues.toml";
const DEFAULT_TIMEZONE: &str = "Europe/Madrid";
const DEFAULT_FETCH_TIMEOUT_SECONDS: u64 = 30;

pub fn load_config() -> Result<Config, ConfigError> {
    let venues_file = PathBuf::from(load_string_config("VENUES_FILE", DEFAULT_VENUES_FILE));
    let timezone = load_timezone_config("TIMEZONE")?;
    let fetch_timeout = Duration::from_secs(
        load_u64_config("FETCH_TIMEOUT_SECONDS")?.unwrap_or(DEFAULT_FETCH_TIMEOUT_SECONDS),
    );
    let reference_date = load_date_config("REFERENCE_DATE")?;
    let include_non_danceable = load_bool_config("INCLUDE_NON_DANCEABLE", false)?;

    Ok(Config {
        venues_file,
        timezone,
        fetch_timeout,
        reference_date,
        include_non_danceable,
    })
}

fn load_string_config(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn load_timezone_config(name: &'static str) -> Result<Tz, ConfigError> {
    let value = load_string_config(name, DEFAULT_TIMEZONE);

    value.parse().map_err(|_| ConfigError::InvalidValue {
        name,
        reason: format!("'{}' is not a known IANA timezone", value),
    })
}

fn load_bool_config(name: &'static str, default: bool) -> Result<bool, ConfigError> {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            name,
            reason: "Expected either 'true' or 'false'".to_string(),
        })
}

fn load_u64_config(name: &'static str) -> Result<Option<u64>, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                name,
                reason: "Expected a positive integer number".to_string(),
            }),
        Err(_) => Ok(None),
    }
}

fn load_date_config(name: &'static str) -> Result<Option<NaiveDate>, ConfigError> {
    match env::var(name) {
        Ok(value) => NaiveDate::parse_from_str(&value, "%Y-%m-%d")
            .map(Some)
            .map_err(|err| ConfigError::InvalidValue {
                name,
                reason: format!("Expected a YYYY-MM-DD date ({})", err),
            }),
        Err(_) => Ok(None),
    }
}
