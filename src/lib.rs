pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod output;
pub mod services;
pub mod swiss;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::config::settings::AppConfig;
use crate::domain::{PlayerId, TournamentId};
use crate::services::server::ServerService;
use crate::services::tournament::TournamentService;
use crate::swiss::{MatchRecorder, StandingsProvider};

pub fn interpret() -> Cli {
    Cli::parse()
}

/// Environment configuration with the command line database path on top.
pub fn load_config(cli: &Cli) -> AppConfig {
    let config = AppConfig::from_env();
    match &cli.database {
        Some(path) => config.with_database_path(path.clone()),
        None => config,
    }
}

pub fn handle_serve(config: AppConfig, port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(config.with_port(port));
        service.run().await
    })
}

pub fn handle_init(config: &AppConfig, reset: bool) -> Result<()> {
    let pool = database::create_pool(&config.database)?;
    let conn = database::get_connection(&pool)?;
    if reset {
        database::setup::reset_database(&conn)
    } else {
        database::setup::ensure_schema(&conn)
    }
}

pub fn handle_register_tournament(config: &AppConfig, name: &str) -> Result<()> {
    let tournament = open_service(config)?
        .register_tournament(name)
        .context("Failed to register tournament")?;
    println!("{}", tournament.id);
    Ok(())
}

pub fn handle_register_player(
    config: &AppConfig,
    name: &str,
    tournament_id: Option<TournamentId>,
) -> Result<()> {
    let player = open_service(config)?
        .register_player(name, tournament_id)
        .context("Failed to register player")?;
    println!("{}", player.id);
    Ok(())
}

pub fn handle_enroll(config: &AppConfig, tournament_id: TournamentId, player_id: PlayerId) -> Result<()> {
    open_service(config)?
        .enroll(tournament_id, player_id)
        .with_context(|| format!("Failed to enroll player {player_id} in tournament {tournament_id}"))?;
    Ok(())
}

pub fn handle_report(
    config: &AppConfig,
    tournament_id: TournamentId,
    winner_id: PlayerId,
    loser_id: PlayerId,
) -> Result<()> {
    let record = open_service(config)?
        .report_match(tournament_id, winner_id, loser_id)
        .context("Failed to report match")?;
    println!("{}", record.id);
    Ok(())
}

pub fn handle_standings(config: &AppConfig, tournament_id: TournamentId) -> Result<()> {
    let rows = open_service(config)?
        .standings(tournament_id)
        .with_context(|| format!("Failed to load standings for tournament {tournament_id}"))?;
    print!("{}", output::render_standings(&rows));
    Ok(())
}

pub fn handle_pairings(config: &AppConfig, tournament_id: TournamentId) -> Result<()> {
    let pairings = open_service(config)?
        .pairings(tournament_id)
        .with_context(|| format!("Failed to pair tournament {tournament_id}"))?;
    print!("{}", output::render_pairings(&pairings));
    Ok(())
}

pub fn handle_tournaments(config: &AppConfig) -> Result<()> {
    let tournaments = open_service(config)?.list_tournaments()?;
    print!("{}", output::render_tournaments(&tournaments));
    Ok(())
}

pub fn handle_matches(config: &AppConfig, tournament_id: TournamentId) -> Result<()> {
    let records = open_service(config)?
        .list_matches(tournament_id)
        .with_context(|| format!("Failed to list matches of tournament {tournament_id}"))?;
    print!("{}", output::render_matches(&records));
    Ok(())
}

pub fn handle_count(config: &AppConfig, tournament_id: Option<TournamentId>) -> Result<()> {
    let count = open_service(config)?
        .count_players(tournament_id)
        .context("Failed to count players")?;
    println!("{count}");
    Ok(())
}

pub fn handle_delete_matches(config: &AppConfig, tournament_id: Option<TournamentId>) -> Result<()> {
    open_service(config)?
        .delete_matches(tournament_id)
        .context("Failed to delete matches")?;
    Ok(())
}

pub fn handle_delete_players(config: &AppConfig) -> Result<()> {
    open_service(config)?
        .delete_players()
        .context("Failed to delete players")?;
    Ok(())
}

pub fn handle_delete_tournaments(config: &AppConfig) -> Result<()> {
    open_service(config)?
        .delete_tournaments()
        .context("Failed to delete tournaments")?;
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn open_service(config: &AppConfig) -> Result<TournamentService> {
    TournamentService::open(&config.database)
}
