use agendafinde::agenda::aggregator::{collect_events, SourceOutcome};
use agendafinde::agenda::fetcher::ContentFetcher;
use agendafinde::api::get_weekend_agenda;
use agendafinde::config::model::{SourceType, VenueSource};
use agendafinde::error::SourceError;
use agendafinde::parsers::registry::ParserRegistry;
use chrono::NaiveDate;
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);
const CAFE_BERLIN: &str = "https://cafeberlinentradas.com/agenda/";
const CAFE_BERLIN_MIRROR: &str = "https://mirror.cafeberlinentradas.com/agenda/";

const CAFE_BERLIN_PAGE: &str = r#"
<html>
  <body>
    <h1>Agenda</h1>
    <div><p>Viernes 30 enero | 21:00</p><h3>Noche de Jazz-Funk</h3><a href="/evento/1">+ Info</a></div>
    <div><p>Sábado 31 enero | 22:30</p><h3>Recital de piano clásico</h3><a href="/evento/2">+ Info</a></div>
    <div><p>Sábado 31 enero | 20:00</p><h3>Swing en la sala</h3><a href="/evento/3">+ Info</a></div>
    <div><p>Jueves 5 febrero | 21:00</p><h3>Soul Sessions</h3><a href="/evento/4">+ Info</a></div>
  </body>
</html>
"#;

struct FakeFetcher {
    pages: HashMap<&'static str, &'static str>,
    requested: RefCell<Vec<String>>,
}

impl FakeFetcher {
    fn new(pages: &[(&'static str, &'static str)]) -> Self {
        Self {
            pages: pages.iter().copied().collect(),
            requested: RefCell::new(Vec::new()),
        }
    }
}

impl ContentFetcher for FakeFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, SourceError> {
        self.requested.borrow_mut().push(url.to_string());

        self.pages
            .get(url)
            .map(|page| page.to_string())
            .ok_or(SourceError::Timeout(timeout.as_secs()))
    }
}

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 26).unwrap()
}

fn venue(name: &str, url: &str) -> VenueSource {
    VenueSource::new(name, url, SourceType::Html)
}

#[test_log::test(tokio::test)]
async fn when_one_source_fails_should_still_return_the_others_events() {
    let fetcher = FakeFetcher::new(&[(
        CAFE_BERLIN,
        "<p>30 enero | 21:00</p><p>Funk</p><p>31 enero | 21:00</p><p>Disco</p>",
    )]);
    let sources = vec![
        venue("Caída", CAFE_BERLIN_MIRROR),
        venue("Café Berlín", CAFE_BERLIN),
    ];

    let collected = collect_events(
        &sources,
        &fetcher,
        &ParserRegistry::default(),
        monday(),
        TIMEOUT,
    )
    .await;

    assert_eq!(collected.events.len(), 2);
    assert!(matches!(
        collected.reports[0].outcome,
        SourceOutcome::Failed(SourceError::Timeout(5))
    ));
    assert!(matches!(collected.reports[1].outcome, SourceOutcome::Parsed(2)));
}

#[test_log::test(tokio::test)]
async fn sources_without_a_parser_should_yield_nothing_and_not_be_fetched() {
    let fetcher = FakeFetcher::new(&[]);
    let sources = vec![
        venue("Desconocida", "https://example.org/agenda"),
        venue("Sala Riviera", "https://salariviera.com/"),
        VenueSource::new("Tempo Club", "https://tempoclub.es/", SourceType::Js),
    ];

    let collected = collect_events(
        &sources,
        &fetcher,
        &ParserRegistry::default(),
        monday(),
        TIMEOUT,
    )
    .await;

    assert!(collected.events.is_empty());
    assert!(fetcher.requested.borrow().is_empty());
    assert!(matches!(collected.reports[0].outcome, SourceOutcome::NoParser));
    assert!(matches!(
        collected.reports[1].outcome,
        SourceOutcome::IntegrationPending
    ));
    assert!(matches!(
        collected.reports[2].outcome,
        SourceOutcome::UnsupportedType(SourceType::Js)
    ));
}

#[test_log::test(tokio::test)]
async fn should_keep_source_order_when_collecting() {
    let fetcher = FakeFetcher::new(&[
        (CAFE_BERLIN, "<p>31 enero | 21:00</p><p>Segundo día</p>"),
        (CAFE_BERLIN_MIRROR, "<p>30 enero | 21:00</p><p>Primer día</p>"),
    ]);
    let sources = vec![
        venue("Café Berlín", CAFE_BERLIN),
        venue("Café Berlín (espejo)", CAFE_BERLIN_MIRROR),
    ];

    let collected = collect_events(
        &sources,
        &fetcher,
        &ParserRegistry::default(),
        monday(),
        TIMEOUT,
    )
    .await;

    let titles: Vec<&str> = collected
        .events
        .iter()
        .map(|event| event.title.as_str())
        .collect();

    assert_eq!(titles, vec!["Segundo día", "Primer día"]);
}

#[test_log::test(tokio::test)]
async fn should_list_danceable_weekend_events_in_order() {
    let fetcher = FakeFetcher::new(&[(CAFE_BERLIN, CAFE_BERLIN_PAGE)]);
    let sources = vec![venue("Café Berlín", CAFE_BERLIN)];

    let agenda = get_weekend_agenda(
        &sources,
        &fetcher,
        &ParserRegistry::default(),
        monday(),
        TIMEOUT,
    )
    .await;

    let listing: Vec<String> = agenda
        .danceable
        .iter()
        .map(|event| event.to_string())
        .collect();

    assert_eq!(
        agenda.window.friday,
        NaiveDate::from_ymd_opt(2026, 1, 30).unwrap()
    );
    assert_eq!(agenda.weekend_event_count, 3);
    assert_eq!(
        listing,
        vec![
            "2026-01-30 21:00 | Café Berlín | Noche de Jazz-Funk | https://cafeberlinentradas.com/evento/1",
            "2026-01-31 20:00 | Café Berlín | Swing en la sala | https://cafeberlinentradas.com/evento/3",
        ]
    );
    assert_eq!(agenda.other.len(), 1);
    assert_eq!(agenda.other[0].title, "Recital de piano clásico");
}

#[test_log::test(tokio::test)]
async fn when_two_sources_list_the_same_event_should_show_it_once() {
    let page = r#"<p>30 enero | 21:00</p><p>Funk Night</p><a href="https://tickets.example/funk">info</a>"#;
    let fetcher = FakeFetcher::new(&[(CAFE_BERLIN, page), (CAFE_BERLIN_MIRROR, page)]);
    let sources = vec![
        venue("Café Berlín", CAFE_BERLIN),
        venue("Café Berlín", CAFE_BERLIN_MIRROR),
    ];

    let agenda = get_weekend_agenda(
        &sources,
        &fetcher,
        &ParserRegistry::default(),
        monday(),
        TIMEOUT,
    )
    .await;

    assert_eq!(agenda.weekend_event_count, 2);
    assert_eq!(agenda.danceable.len(), 1);
}
