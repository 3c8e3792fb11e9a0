use crate::agenda::aggregator::{collect_events, SourceReport};
use crate::agenda::danceability::is_danceable_event;
use crate::agenda::fetcher::ContentFetcher;
use crate::agenda::model::Event;
use crate::agenda::sequencer::{dedupe, sequence};
use crate::agenda::weekend_filter::filter_to_window;
use crate::config::model::{Config, VenueSource};
use crate::dates::week_window::WeekWindow;
use crate::parsers::registry::ParserRegistry;
use chrono::{NaiveDate, Utc};
use std::time::Duration;
use tracing::info;

#[derive(Debug)]
pub struct WeekendAgenda {
    pub window: WeekWindow,
    pub reports: Vec<SourceReport>,
    pub weekend_event_count: usize,
    pub danceable: Vec<Event>,
    pub other: Vec<Event>,
}

/// "Today" in the configured timezone, unless a reference date overrides it.
pub fn reference_today(config: &Config) -> NaiveDate {
    config
        .reference_date
        .unwrap_or_else(|| Utc::now().with_timezone(&config.timezone).date_naive())
}

/**
Runs the whole pipeline for the weekend following `reference_today`: collect,
keep Friday/Saturday, drop repeats, split danceable from the rest, sort.
*/
pub async fn get_weekend_agenda<F: ContentFetcher>(
    sources: &[VenueSource],
    fetcher: &F,
    registry: &ParserRegistry,
    reference_today: NaiveDate,
    timeout: Duration,
) -> WeekendAgenda {
    let window = WeekWindow::upcoming(reference_today);

    info!("Looking for events on {}", window);

    let collected = collect_events(sources, fetcher, registry, reference_today, timeout).await;

    info!("Collected {} events in total", collected.events.len());

    let weekend_events = filter_to_window(collected.events, &window);
    let weekend_event_count = weekend_events.len();

    let (danceable, other): (Vec<Event>, Vec<Event>) = dedupe(weekend_events)
        .into_iter()
        .partition(is_danceable_event);

    info!(
        "{} weekend events, {} danceable",
        weekend_event_count,
        danceable.len()
    );

    WeekendAgenda {
        window,
        reports: collected.reports,
        weekend_event_count,
        danceable: sequence(danceable),
        other: sequence(other),
    }
}
