use rusqlite::{params, Connection};

use crate::domain::{StandingsRow, TournamentId};
use crate::errors::TournamentResult;

/// Aggregates wins and matches for every player registered to the tournament.
/// Players without matches come back with zero counts. Rows are returned in
/// registration order; ranking is left to `swiss::sort_standings`.
pub fn query_standings(
    conn: &Connection,
    tournament_id: TournamentId,
) -> TournamentResult<Vec<StandingsRow>> {
    let sql = "
        SELECT
            p.id,
            p.name,
            SUM(CASE WHEN r.winner_id = reg.player_id THEN 1 ELSE 0 END) AS wins,
            COUNT(r.match_id) AS matches,
            reg.id AS registration_seq
        FROM registrations reg
        JOIN players p ON p.id = reg.player_id
        LEFT JOIN matches m
            ON m.tournament_id = reg.tournament_id
           AND (m.home_player_id = reg.player_id OR m.away_player_id = reg.player_id)
        LEFT JOIN match_results r ON r.match_id = m.id
        WHERE reg.tournament_id = ?1
        GROUP BY reg.id, p.id, p.name
        ORDER BY reg.id
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_standings_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_standings_row(row: &rusqlite::Row) -> rusqlite::Result<StandingsRow> {
    Ok(StandingsRow {
        player_id: row.get(0)?,
        name: row.get(1)?,
        wins: row.get(2)?,
        matches: row.get(3)?,
        registration_seq: row.get(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::{create_memory_pool, get_connection};
    use crate::database::{matches, players, setup, tournaments};

    #[test]
    fn test_standings_only_include_registered_players() {
        let pool = create_memory_pool().unwrap();
        let conn = get_connection(&pool).unwrap();
        setup::ensure_schema(&conn).unwrap();

        let thunderdome = tournaments::insert_tournament(&conn, "The Thunderdome").unwrap().id;
        let other = tournaments::insert_tournament(&conn, "Other Cup").unwrap().id;
        let melpomene = players::insert_player(&conn, "Melpomene Murray").unwrap().id;
        let randy = players::insert_player(&conn, "Randy Schwartz").unwrap().id;
        let stranger = players::insert_player(&conn, "Stranger").unwrap().id;
        players::register(&conn, thunderdome, melpomene).unwrap();
        players::register(&conn, thunderdome, randy).unwrap();
        players::register(&conn, other, stranger).unwrap();
        players::register(&conn, other, randy).unwrap();

        // A match in another tournament must not leak into these standings.
        let match_id = matches::insert_match(&conn, other, randy, stranger).unwrap();
        matches::insert_result(&conn, match_id, randy, stranger).unwrap();

        let rows = query_standings(&conn, thunderdome).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.wins == 0 && r.matches == 0));
        assert_eq!(rows[0].player_id, melpomene);
        assert_eq!(rows[1].player_id, randy);
    }

    #[test]
    fn test_standings_count_wins_and_matches() {
        let pool = create_memory_pool().unwrap();
        let conn = get_connection(&pool).unwrap();
        setup::ensure_schema(&conn).unwrap();

        let t = tournaments::insert_tournament(&conn, "Springfield Cup").unwrap().id;
        let ids: Vec<i64> = ["Homer Simpson", "Marge Simpson", "Bart Simpson", "Lisa Simpson"]
            .iter()
            .map(|name| {
                let id = players::insert_player(&conn, name).unwrap().id;
                players::register(&conn, t, id).unwrap();
                id
            })
            .collect();

        // Lisa beats Bart twice.
        for _ in 0..2 {
            let match_id = matches::insert_match(&conn, t, ids[2], ids[3]).unwrap();
            matches::insert_result(&conn, match_id, ids[3], ids[2]).unwrap();
        }

        let rows = query_standings(&conn, t).unwrap();
        let order: Vec<i64> = rows.iter().map(|r| r.player_id).collect();
        assert_eq!(order, ids);
        assert!(rows.windows(2).all(|w| w[0].registration_seq < w[1].registration_seq));
        assert_eq!((rows[0].wins, rows[0].matches), (0, 0));
        assert_eq!((rows[2].wins, rows[2].matches), (0, 2));
        assert_eq!((rows[3].wins, rows[3].matches), (2, 2));
    }

    #[test]
    fn test_unknown_tournament_has_empty_standings() {
        let pool = create_memory_pool().unwrap();
        let conn = get_connection(&pool).unwrap();
        setup::ensure_schema(&conn).unwrap();

        assert!(query_standings(&conn, 42).unwrap().is_empty());
    }
}
