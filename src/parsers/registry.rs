use crate::agenda::model::Event;
use crate::config::model::VenueSource;
use crate::error::SourceError;
use crate::parsers::listing::ListingParser;
use chrono::NaiveDate;

/// Turns one venue's page into events.
pub trait SourceParser: Send + Sync {
    fn parse(
        &self,
        content: &str,
        source: &VenueSource,
        reference_today: NaiveDate,
    ) -> Result<Vec<Event>, SourceError>;
}

enum Integration {
    Ready(Box<dyn SourceParser>),
    Pending,
}

pub struct ParserRegistry {
    integrations: Vec<(String, Integration)>,
}

pub enum ParserSelection<'a> {
    Ready {
        host: &'a str,
        parser: &'a dyn SourceParser,
    },
    /// Known venue whose page isn't scraped yet
    Pending { host: &'a str },
    Unmatched,
}

impl ParserSelection<'_> {
    pub fn parse(
        &self,
        content: &str,
        source: &VenueSource,
        reference_today: NaiveDate,
    ) -> Result<Vec<Event>, SourceError> {
        match self {
            ParserSelection::Ready { parser, .. } => parser.parse(content, source, reference_today),
            ParserSelection::Pending { .. } | ParserSelection::Unmatched => Ok(Vec::new()),
        }
    }
}

impl ParserRegistry {
    pub fn empty() -> Self {
        Self {
            integrations: Vec::new(),
        }
    }

    pub fn register(mut self, host_fragment: &str, parser: impl SourceParser + 'static) -> Self {
        self.integrations.push((
            host_fragment.to_lowercase(),
            Integration::Ready(Box::new(parser)),
        ));
        self
    }

    pub fn register_pending(mut self, host_fragment: &str) -> Self {
        self.integrations
            .push((host_fragment.to_lowercase(), Integration::Pending));
        self
    }

    /// First registered fragment found in the source URL (ignoring case) wins.
    pub fn select_parser(&self, source: &VenueSource) -> ParserSelection<'_> {
        let url = source.url.to_lowercase();

        self.integrations
            .iter()
            .find(|(host, _)| url.contains(host.as_str()))
            .map(|(host, integration)| match integration {
                Integration::Ready(parser) => ParserSelection::Ready {
                    host,
                    parser: parser.as_ref(),
                },
                Integration::Pending => ParserSelection::Pending { host },
            })
            .unwrap_or(ParserSelection::Unmatched)
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        ParserRegistry::empty()
            .register_pending("teatrodelbarrio.com")
            .register_pending("tempoclub.es")
            .register("cafeberlinentradas.com", ListingParser)
            .register_pending("salariviera.com")
    }
}
