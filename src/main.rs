use anyhow::Result;

use swiss_tournament::cli::{Cli, Command};
use swiss_tournament::config::settings::AppConfig;
use swiss_tournament::{
    handle_completions, handle_count, handle_delete_matches, handle_delete_players,
    handle_delete_tournaments, handle_enroll, handle_init, handle_matches, handle_pairings,
    handle_register_player, handle_register_tournament, handle_report, handle_serve,
    handle_standings, handle_tournaments, interpret, load_config,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli: Cli = interpret();
    let config = load_config(&cli);
    execute_command(&cli.command, config)
}

fn execute_command(command: &Command, config: AppConfig) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(config, *port),
        Command::Init { reset } => handle_init(&config, *reset),
        Command::RegisterTournament { name } => handle_register_tournament(&config, name),
        Command::RegisterPlayer { name, tournament } => {
            handle_register_player(&config, name, *tournament)
        }
        Command::Enroll { tournament, player } => handle_enroll(&config, *tournament, *player),
        Command::Report {
            tournament,
            winner,
            loser,
        } => handle_report(&config, *tournament, *winner, *loser),
        Command::Standings { tournament } => handle_standings(&config, *tournament),
        Command::Pairings { tournament } => handle_pairings(&config, *tournament),
        Command::Tournaments => handle_tournaments(&config),
        Command::Matches { tournament } => handle_matches(&config, *tournament),
        Command::Count { tournament } => handle_count(&config, *tournament),
        Command::DeleteMatches { tournament } => handle_delete_matches(&config, *tournament),
        Command::DeletePlayers => handle_delete_players(&config),
        Command::DeleteTournaments => handle_delete_tournaments(&config),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
