//! MySquad CLI
//!
//! A football season management game played from the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use mysquad_cli::commands::{self, prompt, prompt_country};
use mysquad_cli::config::{Paths, LOG_ENV};
use mysquad_cli::TextTable;
use mysquad_core::{LeagueCatalog, SaveManager, Session};

#[derive(Parser)]
#[command(name = "mysquad")]
#[command(about = "MySquad is a CLI game about football (or soccer for Americans)", long_about = None)]
struct Cli {
    /// League catalog JSON (overrides MYSQUAD_CATALOG_PATH)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Session save file (overrides MYSQUAD_SAVE_PATH)
    #[arg(long, global = true)]
    save: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new game. The current progress is lost.
    New {
        /// Team's name that you are going to play with
        #[arg(long)]
        name: Option<String>,

        /// Country that you want to play
        #[arg(long)]
        country: Option<String>,

        /// Seed for squad generation
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Save the game
    Save,

    /// Show the name of my current team
    ShowTeam,

    /// Show my current league and country
    ShowLeague,

    /// Show the table of my current league
    ShowLeagueDetails,

    /// Show the players of my current squad
    ShowSquadDetails,

    /// Show the league's top scorers
    ShowTopScorers,

    /// Show what the save file holds
    Status,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let paths = Paths::resolve(cli.catalog, cli.save);
    let store = SaveManager::new(&paths.save);
    debug!(catalog = %paths.catalog.display(), save = %paths.save.display(), "paths resolved");

    match cli.command {
        Commands::New { name, country, seed } => {
            let catalog = LeagueCatalog::load(&paths.catalog)
                .with_context(|| format!("Failed to load catalog: {}", paths.catalog.display()))?;

            let mut input = io::stdin().lock();
            let mut output = io::stdout();

            let name = match name {
                Some(name) => name,
                None => prompt(&mut input, &mut output, "Your team's name")?,
            };
            let country = match country {
                Some(country) => country,
                None => prompt_country(&mut input, &mut output, &catalog)?,
            };

            let session = commands::new_game(&name, &country, &catalog, seed)?;
            save_session(&store, &session)?;
            info!(path = %store.path().display(), "new game saved");
        }

        Commands::Save => {
            let session = load_session(&store)?;
            save_session(&store, &session)?;
            println!("Done.");
        }

        Commands::ShowTeam => {
            println!("{}", commands::show_team(&load_session(&store)?)?);
        }

        Commands::ShowLeague => {
            println!("{}", commands::show_league(&load_session(&store)?)?);
        }

        Commands::ShowLeagueDetails => {
            print!("{}", commands::show_league_details(&load_session(&store)?, &TextTable)?);
        }

        Commands::ShowSquadDetails => {
            print!("{}", commands::show_squad_details(&load_session(&store)?, &TextTable)?);
        }

        Commands::ShowTopScorers => {
            print!("{}", commands::show_top_scorers(&load_session(&store)?, &TextTable)?);
        }

        Commands::Status => match store.info()? {
            Some(info) => println!("{}", info.display_text()),
            None => println!("No saved game at {}.", store.path().display()),
        },
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn load_session(store: &SaveManager) -> Result<Session> {
    let session = store
        .load()
        .with_context(|| format!("Failed to load save: {}", store.path().display()))?;
    debug!(started = session.is_started(), "session loaded");
    Ok(session)
}

fn save_session(store: &SaveManager, session: &Session) -> Result<()> {
    store
        .save(session)
        .with_context(|| format!("Failed to write save: {}", store.path().display()))
}
