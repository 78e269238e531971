use colored::Colorize;

use crate::database::{MatchRecord, Tournament};
use crate::domain::{Pairing, StandingsRow};

pub fn render_standings(rows: &[StandingsRow]) -> String {
    let mut out = format!(
        "{}\n",
        format!("{:>4}  {:>6}  {:<28} {:>4} {:>7}", "#", "ID", "Name", "Wins", "Matches").bold()
    );
    for (idx, row) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:>6}  {:<28} {:>4} {:>7}\n",
            idx + 1,
            row.player_id,
            row.name,
            row.wins,
            row.matches
        ));
    }
    out
}

pub fn render_pairings(pairings: &[Pairing]) -> String {
    if pairings.is_empty() {
        return format!("{}\n", "No players to pair".dimmed());
    }

    let mut out = String::new();
    for (idx, pairing) in pairings.iter().enumerate() {
        out.push_str(&format!(
            "{} {} ({}) {} {} ({})\n",
            format!("Table {}:", idx + 1).bold(),
            pairing.player1_name,
            pairing.player1_id,
            "vs".cyan(),
            pairing.player2_name,
            pairing.player2_id
        ));
    }
    out
}

pub fn render_tournaments(tournaments: &[Tournament]) -> String {
    let mut out = format!("{}\n", format!("{:>6}  {}", "ID", "Name").bold());
    for tournament in tournaments {
        out.push_str(&format!("{:>6}  {}\n", tournament.id, tournament.name));
    }
    out
}

pub fn render_matches(records: &[MatchRecord]) -> String {
    let mut out = format!(
        "{}\n",
        format!("{:>6}  {:>6}  {:>6}  {:>6}", "Match", "Home", "Away", "Winner").bold()
    );
    for record in records {
        out.push_str(&format!(
            "{:>6}  {:>6}  {:>6}  {:>6}\n",
            record.id, record.home_player_id, record.away_player_id, record.winner_id
        ));
    }
    out
}
