use chrono::NaiveDate;
use chrono_tz::Tz;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug)]
pub struct Config {
    pub venues_file: PathBuf,
    pub timezone: Tz,
    pub fetch_timeout: Duration,
    pub reference_date: Option<NaiveDate>,
    pub include_non_danceable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueSource {
    pub name: String,
    pub city: String,
    pub url: String,
    pub source_type: SourceType,
    pub notes: String,
}

impl VenueSource {
    pub fn new(name: &str, url: &str, source_type: SourceType) -> Self {
        Self {
            name: name.to_string(),
            city: String::new(),
            url: url.to_string(),
            source_type,
            notes: String::new(),
        }
    }
}

/// How a source's listing is published. Only plain HTML can be scraped for now.
#[derive(strum::EnumString, strum::Display, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SourceType {
    Html,
    Js,
}
