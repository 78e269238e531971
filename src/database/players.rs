use rusqlite::{params, Connection, OptionalExtension};

use super::models::Player;
use crate::domain::{PlayerId, TournamentId};
use crate::errors::TournamentResult;

pub fn insert_player(conn: &Connection, name: &str) -> TournamentResult<Player> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id, name, created_at";

    let player = conn.query_row(sql, params![name], parse_player_row)?;
    Ok(player)
}

/// Registers a player to a tournament and returns the registration sequence.
/// Registering the same pair twice keeps the original sequence.
pub fn register(
    conn: &Connection,
    tournament_id: TournamentId,
    player_id: PlayerId,
) -> TournamentResult<i64> {
    conn.execute(
        "INSERT OR IGNORE INTO registrations (tournament_id, player_id) VALUES (?1, ?2)",
        params![tournament_id, player_id],
    )?;

    let seq = conn.query_row(
        "SELECT id FROM registrations WHERE tournament_id = ?1 AND player_id = ?2",
        params![tournament_id, player_id],
        |row| row.get(0),
    )?;
    Ok(seq)
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
    })
}

pub fn find_by_id(conn: &Connection, id: PlayerId) -> TournamentResult<Option<Player>> {
    let sql = "SELECT id, name, created_at FROM players WHERE id = ?1";

    let player = conn.query_row(sql, params![id], parse_player_row).optional()?;
    Ok(player)
}

pub fn count_all(conn: &Connection) -> TournamentResult<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?;
    Ok(count)
}

pub fn count_registered(conn: &Connection, tournament_id: TournamentId) -> TournamentResult<i64> {
    let sql = "SELECT COUNT(*) FROM registrations WHERE tournament_id = ?1";

    let count = conn.query_row(sql, params![tournament_id], |row| row.get(0))?;
    Ok(count)
}

/// Removes every player. Registrations, matches and results follow by cascade.
pub fn delete_all(conn: &Connection) -> TournamentResult<usize> {
    let deleted = conn.execute("DELETE FROM players", [])?;
    Ok(deleted)
}
