use std::sync::{Mutex, PoisonError};

use anyhow::Result;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rusqlite::Connection;

use crate::config::settings::DatabaseSettings;
use crate::database::{self, matches, players, standings, tournaments, with_transaction, DbPool};
use crate::database::{MatchRecord, Player, Tournament};
use crate::domain::{Pairing, PlayerId, Seating, StandingsRow, TournamentId};
use crate::errors::{ensure_positive_id, Entity, TournamentError, TournamentResult};
use crate::swiss::{self, MatchRecorder, StandingsProvider};

/// Entry point for every tournament operation. Each public method runs in
/// exactly one store transaction.
pub struct TournamentService {
    pool: DbPool,
    rng: Mutex<Box<dyn RngCore + Send>>,
}

impl TournamentService {
    pub fn new(pool: DbPool) -> Self {
        Self::with_rng(pool, StdRng::from_os_rng())
    }

    /// Uses the given random source for home/away seating.
    pub fn with_rng<R>(pool: DbPool, rng: R) -> Self
    where
        R: RngCore + Send + 'static,
    {
        Self {
            pool,
            rng: Mutex::new(Box::new(rng)),
        }
    }

    /// Opens (or creates) the database file and makes sure the schema exists.
    pub fn open(settings: &DatabaseSettings) -> Result<Self> {
        let pool = database::create_pool(settings)?;
        Self::prepare(&pool)?;
        info!("Opened tournament database at {}", settings.path);
        Ok(Self::new(pool))
    }

    fn prepare(pool: &DbPool) -> Result<()> {
        let conn = database::get_connection(pool)?;
        database::setup::ensure_schema(&conn)
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn register_tournament(&self, name: &str) -> TournamentResult<Tournament> {
        let name = validate_name(name)?;
        let tournament = with_transaction(&self.pool, |tx| tournaments::insert_tournament(tx, name))?;

        info!("Registered tournament {} ({})", tournament.id, tournament.name);
        Ok(tournament)
    }

    /// Creates a player and, when a tournament is given, registers them to it.
    pub fn register_player(
        &self,
        name: &str,
        tournament_id: Option<TournamentId>,
    ) -> TournamentResult<Player> {
        let name = validate_name(name)?;
        let player = with_transaction(&self.pool, |tx| {
            if let Some(tournament_id) = tournament_id {
                require_tournament(tx, tournament_id)?;
            }
            let player = players::insert_player(tx, name)?;
            if let Some(tournament_id) = tournament_id {
                players::register(tx, tournament_id, player.id)?;
            }
            Ok(player)
        })?;

        info!("Registered player {} ({})", player.id, player.name);
        Ok(player)
    }

    /// Registers an existing player to a tournament; returns the registration
    /// sequence used as the standings tie-break.
    pub fn enroll(&self, tournament_id: TournamentId, player_id: PlayerId) -> TournamentResult<i64> {
        let seq = with_transaction(&self.pool, |tx| {
            require_tournament(tx, tournament_id)?;
            require_player(tx, player_id)?;
            players::register(tx, tournament_id, player_id)
        })?;

        info!("Player {player_id} enrolled in tournament {tournament_id}");
        Ok(seq)
    }

    /// Players overall, or registrations of one tournament.
    pub fn count_players(&self, tournament_id: Option<TournamentId>) -> TournamentResult<i64> {
        with_transaction(&self.pool, |tx| match tournament_id {
            Some(tournament_id) => {
                require_tournament(tx, tournament_id)?;
                players::count_registered(tx, tournament_id)
            }
            None => players::count_all(tx),
        })
    }

    pub fn list_tournaments(&self) -> TournamentResult<Vec<Tournament>> {
        with_transaction(&self.pool, |tx| tournaments::list_all(tx))
    }

    pub fn list_matches(&self, tournament_id: TournamentId) -> TournamentResult<Vec<MatchRecord>> {
        with_transaction(&self.pool, |tx| {
            require_tournament(tx, tournament_id)?;
            matches::list_by_tournament(tx, tournament_id)
        })
    }

    pub fn pairings(&self, tournament_id: TournamentId) -> TournamentResult<Vec<Pairing>> {
        swiss::generate_pairings(self, tournament_id)
    }

    /// Deletes matches (and their results) of one tournament, or all of them.
    pub fn delete_matches(&self, tournament_id: Option<TournamentId>) -> TournamentResult<usize> {
        if let Some(tournament_id) = tournament_id {
            ensure_positive_id(Entity::Tournament, tournament_id)?;
        }
        let deleted = with_transaction(&self.pool, |tx| match tournament_id {
            Some(tournament_id) => matches::delete_by_tournament(tx, tournament_id),
            None => matches::delete_all(tx),
        })?;

        info!("Deleted {deleted} matches");
        Ok(deleted)
    }

    pub fn delete_players(&self) -> TournamentResult<usize> {
        let deleted = with_transaction(&self.pool, |tx| players::delete_all(tx))?;

        info!("Deleted {deleted} players");
        Ok(deleted)
    }

    pub fn delete_tournaments(&self) -> TournamentResult<usize> {
        let deleted = with_transaction(&self.pool, |tx| tournaments::delete_all(tx))?;

        info!("Deleted {deleted} tournaments");
        Ok(deleted)
    }

    fn flip_seating(&self) -> Seating {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        swiss::choose_seating(&mut **rng)
    }
}

impl StandingsProvider for TournamentService {
    fn standings(&self, tournament_id: TournamentId) -> TournamentResult<Vec<StandingsRow>> {
        let mut rows = with_transaction(&self.pool, |tx| {
            require_tournament(tx, tournament_id)?;
            standings::query_standings(tx, tournament_id)
        })?;
        swiss::sort_standings(&mut rows);

        debug!("Computed standings for {} players in tournament {}", rows.len(), tournament_id);
        Ok(rows)
    }
}

impl MatchRecorder for TournamentService {
    fn report_match(
        &self,
        tournament_id: TournamentId,
        winner_id: PlayerId,
        loser_id: PlayerId,
    ) -> TournamentResult<MatchRecord> {
        swiss::validate_report(tournament_id, winner_id, loser_id)?;
        let (home, away) = self.flip_seating().arrange(winner_id, loser_id);

        let record = with_transaction(&self.pool, |tx| {
            require_tournament(tx, tournament_id)?;
            require_player(tx, winner_id)?;
            require_player(tx, loser_id)?;

            let match_id = matches::insert_match(tx, tournament_id, home, away)?;
            matches::insert_result(tx, match_id, winner_id, loser_id)?;
            matches::find_by_id(tx, match_id)
        })?;

        info!(
            "Recorded match {} in tournament {}: {} beat {}",
            record.id, tournament_id, winner_id, loser_id
        );
        Ok(record)
    }
}

fn validate_name(name: &str) -> TournamentResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TournamentError::Validation("name must not be empty".to_string()));
    }
    Ok(trimmed)
}

fn require_tournament(conn: &Connection, tournament_id: TournamentId) -> TournamentResult<Tournament> {
    ensure_positive_id(Entity::Tournament, tournament_id)?;
    tournaments::find_by_id(conn, tournament_id)?
        .ok_or_else(|| TournamentError::not_found(Entity::Tournament, tournament_id))
}

fn require_player(conn: &Connection, player_id: PlayerId) -> TournamentResult<Player> {
    ensure_positive_id(Entity::Player, player_id)?;
    players::find_by_id(conn, player_id)?
        .ok_or_else(|| TournamentError::not_found(Entity::Player, player_id))
}
