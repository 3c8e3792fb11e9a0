use chrono::NaiveDate;
use std::fmt::Display;

/// Sorts after every real "HH:MM" time.
pub const MISSING_TIME: &str = "99:99";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub title: String,
    pub venue: String,
    pub event_date: NaiveDate,
    /// "HH:MM", when the listing gives one
    pub event_time: Option<String>,
    pub url: String,
    pub source_url: String,
    pub raw_genre_text: String,
}

impl Event {
    pub fn new(
        title: String,
        venue: String,
        event_date: NaiveDate,
        event_time: Option<String>,
        url: String,
        source_url: String,
    ) -> Self {
        Self {
            raw_genre_text: title.clone(),
            title,
            venue,
            event_date,
            event_time,
            url,
            source_url,
        }
    }

    pub fn time_or_last(&self) -> &str {
        self.event_time.as_deref().unwrap_or(MISSING_TIME)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} | {} | {} | {}",
            self.event_date,
            self.event_time.as_deref().unwrap_or("--:--"),
            self.venue,
            self.title,
            self.url
        )
    }
}
