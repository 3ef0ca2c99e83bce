mod cli;
mod config;
mod insight;
mod models;
mod store;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use store::{GoalStore, HistoryStore, JsonStore};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = AppConfig::load().context("Loading config")?;

    let data_dir = AppConfig::ensure_data_dir()?;
    let store = JsonStore::open(data_dir).context("Opening data directory")?;
    let mut history = HistoryStore::load(store.clone());
    let mut goals = GoalStore::load(store);

    match cli.command {
        Some(Commands::Mark { prayer, date }) => {
            handlers::handle_mark(&mut history, &prayer, date.as_deref())?;
        }
        Some(Commands::Quran { prayer, date }) => {
            handlers::handle_quran(&mut history, &prayer, date.as_deref())?;
        }
        Some(Commands::Tarawih { rakahs, date }) => {
            handlers::handle_tarawih(&mut history, rakahs, date.as_deref())?;
        }
        Some(Commands::Note { text, date }) => {
            handlers::handle_note(&mut history, &text, date.as_deref())?;
        }
        Some(Commands::Day { date }) => {
            handlers::handle_day(&history, &config, date.as_deref())?;
        }
        Some(Commands::Goals { action }) => {
            handlers::handle_goals(&mut goals, &action)?;
        }
        Some(Commands::Stats { week }) => {
            handlers::handle_stats(&history, &config, week)?;
        }
        Some(Commands::Reflect) => {
            handlers::handle_reflect(&history)?;
        }
        Some(Commands::Export) => {
            handlers::handle_export(&history, &goals, &config)?;
        }
        Some(Commands::Reset { day, all, yes }) => {
            handlers::handle_reset(&mut history, &mut goals, day.as_deref(), all, yes)?;
        }
        Some(Commands::Config {
            start_date,
            hijri_offset,
        }) => {
            handlers::handle_config(&mut config, start_date.as_deref(), hijri_offset)?;
        }

        // No subcommand → launch the dashboard
        None => {
            tui::app::run(config, history, goals)?;
        }
    }

    Ok(())
}
