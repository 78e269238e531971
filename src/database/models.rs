use chrono::NaiveDateTime;

use crate::domain::{PlayerId, TournamentId};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

// A reported match joined with its result row.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub id: i64,
    pub tournament_id: TournamentId,
    pub home_player_id: PlayerId,
    pub away_player_id: PlayerId,
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
    pub created_at: Option<NaiveDateTime>,
}
