use crate::agenda::model::Event;
use itertools::Itertools;

/// Orders events by date, time (untimed last), venue and title. Stable.
pub fn sequence(events: Vec<Event>) -> Vec<Event> {
    events
        .into_iter()
        .sorted_by(|a, b| {
            (a.event_date, a.time_or_last(), &a.venue, &a.title).cmp(&(
                b.event_date,
                b.time_or_last(),
                &b.venue,
                &b.title,
            ))
        })
        .collect()
}

/// Drops repeats of the same date, venue, title and link, keeping the first one.
pub fn dedupe(events: Vec<Event>) -> Vec<Event> {
    events
        .into_iter()
        .unique_by(|event| {
            (
                event.event_date,
                event.venue.to_string(),
                event.title.to_string(),
                event.url.to_string(),
            )
        })
        .collect()
}
