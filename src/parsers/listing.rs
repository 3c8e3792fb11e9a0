use crate::agenda::model::Event;
use crate::config::model::VenueSource;
use crate::dates::resolver::{month_from_name, normalize, resolve_year, PartialDate};
use crate::error::SourceError;
use crate::parsers::html::{info_links, visible_lines};
use crate::parsers::registry::SourceParser;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Url;
use tracing::{debug, trace};

lazy_static! {
    static ref LISTING_HEADER: Regex =
        Regex::new(r"\b(\d{1,2})\s+([a-z]+)\.?\s*\|\s*(\d{1,2}):(\d{2})\b").unwrap();
}

/**
Listings where each event is a `<day> <month> | <HH:MM>` line followed by the
event's title, with a "+ info" link per event in the same order.
*/
pub struct ListingParser;

#[derive(Debug)]
struct ListingHeader {
    date: Option<PartialDate>,
    time: String,
}

impl ListingHeader {
    // Only a known month makes a header, "18 años | 20:00" is just text
    fn parse(line: &str) -> Option<Self> {
        let line = normalize(line);
        let captures = LISTING_HEADER.captures(&line)?;
        let month = month_from_name(&captures[2])?;
        let day: u32 = captures[1].parse().ok()?;
        let hour: u32 = captures[3].parse().ok()?;

        Some(Self {
            date: (1..=31)
                .contains(&day)
                .then(|| PartialDate::new(day, month)),
            time: format!("{:02}:{}", hour, &captures[4]),
        })
    }
}

impl SourceParser for ListingParser {
    #[tracing::instrument(skip(self, content, source), fields(venue = %source.name))]
    fn parse(
        &self,
        content: &str,
        source: &VenueSource,
        reference_today: NaiveDate,
    ) -> Result<Vec<Event>, SourceError> {
        let lines = visible_lines(content);

        if lines.is_empty() {
            return Err(SourceError::Parse("page has no visible text".to_string()));
        }

        let mut links = info_links(content).into_iter();
        let mut events = Vec::new();
        let mut index = 0;

        while index < lines.len() {
            let Some(header) = ListingHeader::parse(&lines[index]) else {
                index += 1;
                continue;
            };

            // every header owns one info link, even if its event gets dropped
            let link = links.next();

            let Some(title) = lines.get(index + 1) else {
                debug!("Header '{}' has no title line after it", lines[index]);
                break;
            };

            match header.date.and_then(|date| resolve_year(date, reference_today)) {
                Some(event_date) => {
                    trace!("Found '{}' on {} at {}", title, event_date, header.time);

                    let url = link
                        .map(|href| absolute_url(&href, &source.url))
                        .unwrap_or_else(|| source.url.to_string());

                    events.push(Event::new(
                        title.to_string(),
                        source.name.to_string(),
                        event_date,
                        Some(header.time),
                        url,
                        source.url.to_string(),
                    ));
                }
                None => {
                    debug!("Couldn't resolve date of '{}', skipping it", lines[index]);
                }
            }

            index += 2;
        }

        debug!("Parsed {} events", events.len());

        Ok(events)
    }
}

fn absolute_url(href: &str, base: &str) -> String {
    Url::parse(base)
        .and_then(|base| base.join(href))
        .map(|url| url.to_string())
        .unwrap_or_else(|_| href.to_string())
}
