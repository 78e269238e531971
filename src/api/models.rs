use serde::{Deserialize, Serialize};

use crate::database::{MatchRecord, Tournament};
use crate::domain::{Pairing, PlayerId, StandingsRow, TournamentId};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTournamentRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPlayerRequest {
    pub name: String,
    pub tournament_id: Option<TournamentId>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    pub player_id: PlayerId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMatchRequest {
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentFilter {
    pub tournament_id: Option<TournamentId>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedResponse {
    pub id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountResponse {
    pub count: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResponse {
    pub deleted: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentItem {
    pub id: TournamentId,
    pub name: String,
    pub created_at: Option<String>,
}

impl From<Tournament> for TournamentItem {
    fn from(t: Tournament) -> Self {
        Self {
            id: t.id,
            name: t.name,
            created_at: t.created_at.map(|d| d.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchItem {
    pub id: i64,
    pub home_player_id: PlayerId,
    pub away_player_id: PlayerId,
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
}

impl From<MatchRecord> for MatchItem {
    fn from(m: MatchRecord) -> Self {
        Self {
            id: m.id,
            home_player_id: m.home_player_id,
            away_player_id: m.away_player_id,
            winner_id: m.winner_id,
            loser_id: m.loser_id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsResponse {
    pub tournament_id: TournamentId,
    pub standings: Vec<StandingsRow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingsResponse {
    pub tournament_id: TournamentId,
    pub pairings: Vec<Pairing>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
