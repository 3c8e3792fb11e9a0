use crate::agenda::fetcher::ContentFetcher;
use crate::agenda::model::Event;
use crate::config::model::{SourceType, VenueSource};
use crate::error::SourceError;
use crate::parsers::registry::{ParserRegistry, ParserSelection};
use chrono::NaiveDate;
use std::fmt::Display;
use std::time::Duration;
use tracing::{error, info, warn};

#[derive(Debug)]
pub enum SourceOutcome {
    Parsed(usize),
    /// Registered venue without a working parser yet
    IntegrationPending,
    NoParser,
    UnsupportedType(SourceType),
    Failed(SourceError),
}

impl Display for SourceOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceOutcome::Parsed(count) => write!(f, "OK: {} events", count),
            SourceOutcome::IntegrationPending => write!(f, "OK: 0 events (integration pending)"),
            SourceOutcome::NoParser => write!(f, "OK: 0 events (no parser registered)"),
            SourceOutcome::UnsupportedType(source_type) => {
                write!(f, "SKIPPED: type '{}' not supported yet", source_type)
            }
            SourceOutcome::Failed(err) => write!(f, "ERROR: {}", err),
        }
    }
}

#[derive(Debug)]
pub struct SourceReport {
    pub venue: String,
    pub outcome: SourceOutcome,
}

#[derive(Debug, Default)]
pub struct CollectedEvents {
    pub events: Vec<Event>,
    pub reports: Vec<SourceReport>,
}

/**
Fetches and parses every source in turn.

A source that fails is reported and skipped; it never stops the others.
Sources without a ready parser aren't fetched at all.
*/
pub async fn collect_events<F: ContentFetcher>(
    sources: &[VenueSource],
    fetcher: &F,
    registry: &ParserRegistry,
    reference_today: NaiveDate,
    timeout: Duration,
) -> CollectedEvents {
    let mut collected = CollectedEvents::default();

    for source in sources {
        let outcome = collect_source(
            source,
            fetcher,
            registry,
            reference_today,
            timeout,
            &mut collected.events,
        )
        .await;

        collected.reports.push(SourceReport {
            venue: source.name.to_string(),
            outcome,
        });
    }

    collected
}

#[tracing::instrument(skip_all, fields(venue = %source.name, url = %source.url))]
async fn collect_source<F: ContentFetcher>(
    source: &VenueSource,
    fetcher: &F,
    registry: &ParserRegistry,
    reference_today: NaiveDate,
    timeout: Duration,
    events: &mut Vec<Event>,
) -> SourceOutcome {
    if source.source_type != SourceType::Html {
        warn!("Source type '{}' is not supported yet", source.source_type);
        return SourceOutcome::UnsupportedType(source.source_type);
    }

    let selection = registry.select_parser(source);

    match selection {
        ParserSelection::Ready { host, .. } => info!("Using '{}' parser", host),
        ParserSelection::Pending { host } => {
            warn!("Integration pending for '{}', no events extracted", host);
            return SourceOutcome::IntegrationPending;
        }
        ParserSelection::Unmatched => {
            warn!("No parser registered for this source");
            return SourceOutcome::NoParser;
        }
    }

    let parsed = match fetcher.fetch(&source.url, timeout).await {
        Ok(content) => selection.parse(&content, source, reference_today),
        Err(err) => Err(err),
    };

    match parsed {
        Ok(mut parsed_events) => {
            info!("Extracted {} events", parsed_events.len());

            let count = parsed_events.len();
            events.append(&mut parsed_events);

            SourceOutcome::Parsed(count)
        }
        Err(err) => {
            error!("Failed getting events: {}", err);
            SourceOutcome::Failed(err)
        }
    }
}
