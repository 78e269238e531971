use std::cmp::Ordering;
use std::collections::HashSet;

use crate::domain::{StandingsRow, TournamentId};
use crate::errors::{TournamentError, TournamentResult};

/// Source of ordered standings for a tournament.
///
/// Implementations must return every registered player exactly once, ordered
/// by wins descending and then by registration sequence ascending.
pub trait StandingsProvider {
    fn standings(&self, tournament_id: TournamentId) -> TournamentResult<Vec<StandingsRow>>;
}

/// Ranking order used across the crate: more wins first, earlier registration
/// breaks ties.
pub fn compare_rows(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.wins
        .cmp(&a.wins)
        .then_with(|| a.registration_seq.cmp(&b.registration_seq))
}

pub fn sort_standings(rows: &mut [StandingsRow]) {
    rows.sort_by(compare_rows);
}

/// Checks the invariants every standings snapshot has to satisfy before it
/// can be paired.
pub fn validate_standings(rows: &[StandingsRow]) -> TournamentResult<()> {
    let mut seen = HashSet::with_capacity(rows.len());

    for row in rows {
        if !seen.insert(row.player_id) {
            return Err(inconsistent(format!(
                "player {} appears more than once",
                row.player_id
            )));
        }
        if row.wins > row.matches {
            return Err(inconsistent(format!(
                "player {} has {} wins in {} matches",
                row.player_id, row.wins, row.matches
            )));
        }
    }

    if let Some(pos) = rows
        .windows(2)
        .position(|pair| compare_rows(&pair[0], &pair[1]) == Ordering::Greater)
    {
        return Err(inconsistent(format!(
            "rows {} and {} are out of order",
            pos,
            pos + 1
        )));
    }

    // One winner and two appearances per match.
    let total_wins: u64 = rows.iter().map(|r| u64::from(r.wins)).sum();
    let total_matches: u64 = rows.iter().map(|r| u64::from(r.matches)).sum();
    if total_wins * 2 != total_matches {
        return Err(inconsistent(format!(
            "{total_wins} wins do not account for {total_matches} match appearances"
        )));
    }

    Ok(())
}

fn inconsistent(reason: String) -> TournamentError {
    TournamentError::InconsistentStandings(reason)
}
