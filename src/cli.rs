use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss-system tournament manager")]
pub struct Cli {
    /// SQLite database file (overrides DATABASE_PATH)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Create the database schema
    Init {
        /// Drop all existing tables and data first
        #[arg(long)]
        reset: bool,
    },
    /// Create a tournament and print its id
    RegisterTournament { name: String },
    /// Create a player, optionally registering them to a tournament
    RegisterPlayer {
        name: String,
        #[arg(short, long)]
        tournament: Option<i64>,
    },
    /// Register an existing player to a tournament
    Enroll { tournament: i64, player: i64 },
    /// Record the result of a match
    Report {
        tournament: i64,
        winner: i64,
        loser: i64,
    },
    /// Show the standings of a tournament
    Standings { tournament: i64 },
    /// Show the pairings for the next round
    Pairings { tournament: i64 },
    /// List tournaments
    Tournaments,
    /// List reported matches of a tournament
    Matches { tournament: i64 },
    /// Count players, globally or in one tournament
    Count {
        #[arg(short, long)]
        tournament: Option<i64>,
    },
    /// Delete matches, globally or in one tournament
    DeleteMatches {
        #[arg(short, long)]
        tournament: Option<i64>,
    },
    /// Delete all players and their registrations and matches
    DeletePlayers,
    /// Delete all tournaments and their registrations and matches
    DeleteTournaments,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
