use rusqlite::{params, Connection};

use super::models::MatchRecord;
use crate::domain::{PlayerId, TournamentId};
use crate::errors::TournamentResult;

pub fn insert_match(
    conn: &Connection,
    tournament_id: TournamentId,
    home_player_id: PlayerId,
    away_player_id: PlayerId,
) -> TournamentResult<i64> {
    let sql = "INSERT INTO matches (tournament_id, home_player_id, away_player_id) VALUES (?1, ?2, ?3) RETURNING id";

    let id = conn.query_row(
        sql,
        params![tournament_id, home_player_id, away_player_id],
        |row| row.get(0),
    )?;
    Ok(id)
}

pub fn insert_result(
    conn: &Connection,
    match_id: i64,
    winner_id: PlayerId,
    loser_id: PlayerId,
) -> TournamentResult<()> {
    let sql = "INSERT INTO match_results (match_id, winner_id, loser_id) VALUES (?1, ?2, ?3)";

    conn.execute(sql, params![match_id, winner_id, loser_id])?;
    Ok(())
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<MatchRecord> {
    Ok(MatchRecord {
        id: row.get(0)?,
        tournament_id: row.get(1)?,
        home_player_id: row.get(2)?,
        away_player_id: row.get(3)?,
        winner_id: row.get(4)?,
        loser_id: row.get(5)?,
        created_at: row.get(6)?,
    })
}

pub fn find_by_id(conn: &Connection, match_id: i64) -> TournamentResult<MatchRecord> {
    let sql = "
        SELECT m.id, m.tournament_id, m.home_player_id, m.away_player_id, r.winner_id, r.loser_id, m.created_at
        FROM matches m
        JOIN match_results r ON r.match_id = m.id
        WHERE m.id = ?1
    ";

    let record = conn.query_row(sql, params![match_id], parse_match_row)?;
    Ok(record)
}

pub fn list_by_tournament(
    conn: &Connection,
    tournament_id: TournamentId,
) -> TournamentResult<Vec<MatchRecord>> {
    let sql = "
        SELECT m.id, m.tournament_id, m.home_player_id, m.away_player_id, r.winner_id, r.loser_id, m.created_at
        FROM matches m
        JOIN match_results r ON r.match_id = m.id
        WHERE m.tournament_id = ?1
        ORDER BY m.id
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Results go with their matches through the cascade on `match_results.match_id`.
pub fn delete_all(conn: &Connection) -> TournamentResult<usize> {
    let deleted = conn.execute("DELETE FROM matches", [])?;
    Ok(deleted)
}

pub fn delete_by_tournament(conn: &Connection, tournament_id: TournamentId) -> TournamentResult<usize> {
    let deleted = conn.execute(
        "DELETE FROM matches WHERE tournament_id = ?1",
        params![tournament_id],
    )?;
    Ok(deleted)
}

pub fn count_results(conn: &Connection) -> TournamentResult<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM match_results", [], |row| row.get(0))?;
    Ok(count)
}
