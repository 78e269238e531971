use rusqlite::{params, Connection, OptionalExtension};

use super::models::Tournament;
use crate::domain::TournamentId;
use crate::errors::TournamentResult;

pub fn insert_tournament(conn: &Connection, name: &str) -> TournamentResult<Tournament> {
    let sql = "INSERT INTO tournaments (name) VALUES (?1) RETURNING id, name, created_at";

    let tournament = conn.query_row(sql, params![name], parse_tournament_row)?;
    Ok(tournament)
}

fn parse_tournament_row(row: &rusqlite::Row) -> rusqlite::Result<Tournament> {
    Ok(Tournament {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
    })
}

pub fn find_by_id(conn: &Connection, id: TournamentId) -> TournamentResult<Option<Tournament>> {
    let sql = "SELECT id, name, created_at FROM tournaments WHERE id = ?1";

    let tournament = conn.query_row(sql, params![id], parse_tournament_row).optional()?;
    Ok(tournament)
}

pub fn list_all(conn: &Connection) -> TournamentResult<Vec<Tournament>> {
    let sql = "SELECT id, name, created_at FROM tournaments ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_tournament_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Removes every tournament along with its registrations and matches.
pub fn delete_all(conn: &Connection) -> TournamentResult<usize> {
    let deleted = conn.execute("DELETE FROM tournaments", [])?;
    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::{create_memory_pool, get_connection};
    use crate::database::setup;

    #[test]
    fn test_insert_and_find_tournament() {
        let pool = create_memory_pool().unwrap();
        let conn = get_connection(&pool).unwrap();
        setup::ensure_schema(&conn).unwrap();

        let created = insert_tournament(&conn, "The Thunderdome").unwrap();
        let found = find_by_id(&conn, created.id).unwrap().unwrap();

        assert_eq!(found.name, "The Thunderdome");
        assert!(found.created_at.is_some());
        assert!(find_by_id(&conn, created.id + 1).unwrap().is_none());
    }

    #[test]
    fn test_list_all_in_creation_order() {
        let pool = create_memory_pool().unwrap();
        let conn = get_connection(&pool).unwrap();
        setup::ensure_schema(&conn).unwrap();

        insert_tournament(&conn, "Spring Open").unwrap();
        insert_tournament(&conn, "Autumn Open").unwrap();

        let names: Vec<String> = list_all(&conn).unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Spring Open", "Autumn Open"]);

        assert_eq!(delete_all(&conn).unwrap(), 2);
        assert!(list_all(&conn).unwrap().is_empty());
    }
}
