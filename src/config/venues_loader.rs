use crate::config::model::{SourceType, VenueSource};
use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct VenuesFile {
    #[serde(default)]
    venues: Vec<VenueEntry>,
}

// Required fields are optional here so a missing one can be reported by name
#[derive(Debug, Deserialize)]
struct VenueEntry {
    name: Option<String>,
    url: Option<String>,
    #[serde(default)]
    city: String,
    #[serde(rename = "type")]
    source_type: Option<String>,
    #[serde(default)]
    notes: String,
}

impl VenueEntry {
    fn to_model(self, index: usize) -> Result<VenueSource, ConfigError> {
        let name = self.name.ok_or(ConfigError::MissingField {
            index,
            field: "name",
        })?;
        let url = self.url.ok_or(ConfigError::MissingField {
            index,
            field: "url",
        })?;
        let source_type = match self.source_type {
            None => SourceType::Html,
            Some(value) => SourceType::from_str(value.trim()).map_err(|_| {
                ConfigError::UnknownSourceType {
                    venue: name.clone(),
                    value,
                }
            })?,
        };

        Ok(VenueSource {
            name,
            city: self.city,
            url,
            source_type,
            notes: self.notes,
        })
    }
}

/// Reads the venues file. A missing file or venue without `name`/`url` is fatal.
#[tracing::instrument]
pub fn load_venues(path: &Path) -> Result<Vec<VenueSource>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let venues = parse_venues(&content)?;

    info!("Loaded {} venues", venues.len());

    Ok(venues)
}

pub fn parse_venues(content: &str) -> Result<Vec<VenueSource>, ConfigError> {
    let file: VenuesFile = toml::from_str(content)?;

    file.venues
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            debug!("Venue #{}: {:?}", index, entry);
            entry.to_model(index)
        })
        .collect()
}
