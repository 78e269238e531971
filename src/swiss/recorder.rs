use rand::Rng;

use crate::database::MatchRecord;
use crate::domain::{PlayerId, Seating, TournamentId};
use crate::errors::{ensure_positive_id, Entity, TournamentError, TournamentResult};

/// Sink for reported match outcomes.
///
/// A report stores the match and its result together or not at all.
pub trait MatchRecorder {
    fn report_match(
        &self,
        tournament_id: TournamentId,
        winner_id: PlayerId,
        loser_id: PlayerId,
    ) -> TournamentResult<MatchRecord>;
}

/// Coin flip for the home/away labels. Has no bearing on scoring.
pub fn choose_seating<R: Rng + ?Sized>(rng: &mut R) -> Seating {
    if rng.random_bool(0.5) {
        Seating::WinnerHome
    } else {
        Seating::LoserHome
    }
}

pub fn validate_report(
    tournament_id: TournamentId,
    winner_id: PlayerId,
    loser_id: PlayerId,
) -> TournamentResult<()> {
    ensure_positive_id(Entity::Tournament, tournament_id)?;
    ensure_positive_id(Entity::Player, winner_id)?;
    ensure_positive_id(Entity::Player, loser_id)?;
    if winner_id == loser_id {
        return Err(TournamentError::Validation(format!(
            "player {winner_id} cannot play against themselves"
        )));
    }
    Ok(())
}
