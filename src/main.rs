use agendafinde::agenda::fetcher::HttpFetcher;
use agendafinde::api::{get_weekend_agenda, reference_today, WeekendAgenda};
use agendafinde::config::env_loader::load_config;
use agendafinde::config::venues_loader::load_venues;
use agendafinde::error::ConfigError;
use agendafinde::parsers::registry::ParserRegistry;
use agendafinde::tracing::setup_logging;
use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let loki = setup_logging().await;

    let exit_code = match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("ERROR: {}", err);
            ExitCode::FAILURE
        }
    };

    if let Some((controller, handle)) = loki {
        controller.shutdown().await;
        let _ = handle.await;
    }

    exit_code
}

async fn run() -> Result<(), ConfigError> {
    let config = load_config()?;
    let today = reference_today(&config);

    println!("Hoy ({}): {}", config.timezone, today);

    let venues = load_venues(&config.venues_file)?;

    println!("Fuentes cargadas: {}", venues.len());

    let agenda = get_weekend_agenda(
        &venues,
        &HttpFetcher,
        &ParserRegistry::default(),
        today,
        config.fetch_timeout,
    )
    .await;

    print_agenda(&agenda, config.include_non_danceable);

    Ok(())
}

fn print_agenda(agenda: &WeekendAgenda, include_non_danceable: bool) {
    println!("Buscando conciertos para: {}", agenda.window);

    for report in &agenda.reports {
        println!("[{}] {}", report.venue, report.outcome);
    }

    println!(
        "Eventos viernes/sábado encontrados: {}",
        agenda.weekend_event_count
    );
    println!("Bailables: {}", agenda.danceable.len());

    agenda
        .danceable
        .iter()
        .for_each(|event| println!("{}", event));

    if include_non_danceable && !agenda.other.is_empty() {
        println!("Otros eventos: {}", agenda.other.len());

        agenda.other.iter().for_each(|event| println!("{}", event));
    }
}
