//! tripPlanner - demo itinerary
//!
//! Generates a demo itinerary, prints it in the configured sort order and
//! renders the blank "new event" form.
//!
//! Run with: cargo run -- --events 6 --sort price --seed 42

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trip_planner::mock;
use trip_planner::utilities::{
    duration_to_string, is_future, is_past, sort_events, DateFormat,
};
use trip_planner::view::render_event_form;
use trip_planner::{AppError, AppResult, Catalog, Config, Event, EventForm};

/// Initialize tracing/logging
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "trip_planner=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Apply `--events`, `--sort` and `--seed` on top of the environment
fn apply_args(mut config: Config, args: &[String]) -> AppResult<Config> {
    let value_of = |flag: &str| {
        args.iter()
            .position(|a| a == flag)
            .and_then(|i| args.get(i + 1))
    };

    if let Some(value) = value_of("--events") {
        config.event_count = value
            .parse()
            .map_err(|_| AppError::InvalidArgument(format!("--events {value}")))?;
    }
    if let Some(value) = value_of("--sort") {
        config.sort = value.parse()?;
    }
    if let Some(value) = value_of("--seed") {
        config.random_seed = Some(
            value
                .parse()
                .map_err(|_| AppError::InvalidArgument(format!("--seed {value}")))?,
        );
    }

    Ok(config)
}

fn load_catalog(config: &Config) -> AppResult<Catalog> {
    match &config.catalog_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading catalog");
            let json = std::fs::read_to_string(path)?;
            Ok(Catalog::from_json(&json)?)
        }
        None => Ok(mock::demo_catalog()),
    }
}

fn status(event: &Event, now: DateTime<Utc>) -> &'static str {
    if is_future(event, now) {
        "future"
    } else if is_past(event, now) {
        "past"
    } else {
        "present"
    }
}

fn print_itinerary(events: &[Event], catalog: &Catalog, now: DateTime<Utc>) {
    for event in events {
        let destination = catalog
            .destination_by_id(&event.destination)
            .map(|d| d.name.as_str())
            .unwrap_or("?");

        println!(
            "{day} {label} {destination}  {from} - {to}  {duration:<12} €{price:<5} [{status}]{favorite}",
            day = DateFormat::Day.format(&event.date_from),
            label = event.event_type.label(),
            from = DateFormat::Time.format(&event.date_from),
            to = DateFormat::Time.format(&event.date_to),
            duration = duration_to_string(&event.date_from, &event.date_to),
            price = event.base_price,
            status = status(event, now),
            favorite = if event.is_favorite { " ★" } else { "" },
        );
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    let config = apply_args(Config::from_env()?, &args)?;

    init_tracing(&config);

    tracing::info!(
        events = config.event_count,
        sort = config.sort.as_str(),
        seed = ?config.random_seed,
        "Starting tripPlanner"
    );

    let catalog = Arc::new(load_catalog(&config)?);
    let mut rng = match config.random_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let now = Utc::now();
    let mut events = mock::generate_events(&mut rng, config.event_count, &catalog, now)?;
    sort_events(&mut events, config.sort);

    tracing::debug!(count = events.len(), "Generated demo events");

    print_itinerary(&events, &catalog, now);
    println!();

    let form = EventForm::new(Arc::clone(&catalog))?;
    println!("{}", render_event_form(&form)?);

    Ok(())
}
