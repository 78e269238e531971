use serde::{Deserialize, Serialize};

pub type PlayerId = i64;
pub type TournamentId = i64;

/// One player's record within a tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRow {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches: u32,
    /// Registration sequence within the tournament; lower registered earlier
    pub registration_seq: i64,
}

impl StandingsRow {
    pub fn losses(&self) -> u32 {
        self.matches.saturating_sub(self.wins)
    }
}

/// Next-round matchup between two adjacent players in the standings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pairing {
    pub player1_id: PlayerId,
    pub player1_name: String,
    pub player2_id: PlayerId,
    pub player2_name: String,
}

impl Pairing {
    pub fn player_ids(&self) -> [PlayerId; 2] {
        [self.player1_id, self.player2_id]
    }
}

/// Which side of a reported match is listed as home. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Seating {
    WinnerHome,
    LoserHome,
}

impl Seating {
    /// Returns `(home, away)` for the given winner and loser.
    pub fn arrange(self, winner: PlayerId, loser: PlayerId) -> (PlayerId, PlayerId) {
        match self {
            Seating::WinnerHome => (winner, loser),
            Seating::LoserHome => (loser, winner),
        }
    }
}
