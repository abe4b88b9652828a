use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use catalog_prefs::{
    app::{commands::HELP, AppState, Command},
    config::Config,
    models::Catalog,
    views::ActivationEvent,
};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let catalog = Catalog::from_json_file(&config.data_path)
        .with_context(|| format!("Failed to load catalog from {}", config.data_path))?;
    let mut state = AppState::new(catalog, config.preferences_seed());
    state.preference_state_mut().subscribe(|prefs| {
        tracing::info!(
            price_range = %prefs.price_range,
            categories = ?prefs.categories,
            brands = ?prefs.brands,
            "Preferences changed"
        );
    });

    println!("{}", HELP);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Catalog => print!("{}", state.catalog_view()),
            Command::Filtered => print!("{}", state.filtered_catalog_view()),
            Command::View(id) => {
                if !state.activate_product(&id, ActivationEvent::Click) {
                    println!("No product with id {}", id);
                }
            }
            Command::History => print!("{}", state.history_view()),
            Command::Clear => state.clear_history(),
            Command::Prefs => print!("{}", state.preferences_form()),
            Command::Price(raw) => {
                if let Err(e) = state.select_price_range(&raw) {
                    println!("{}", e);
                }
            }
            Command::Category { name, included } => {
                state.toggle_category(&name, included);
            }
            Command::Brand { name, included } => {
                state.toggle_brand(&name, included);
            }
            Command::Recs => print!("{}", state.recommendation_view()),
            Command::LoadRecs(path) => match state.load_recommendations(&path) {
                Ok(()) => print!("{}", state.recommendation_view()),
                Err(e) => println!("{}", e),
            },
            Command::Request => {
                println!("{}", serde_json::to_string_pretty(&state.recommendation_request())?)
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }

    Ok(())
}
