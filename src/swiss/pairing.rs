use log::debug;

use super::standings::{validate_standings, StandingsProvider};
use crate::domain::{Pairing, StandingsRow, TournamentId};
use crate::errors::{TournamentError, TournamentResult};

/// Pairs the next round for a tournament from its current standings.
///
/// Deterministic: the same standings always yield the same pairings.
pub fn generate_pairings<P>(provider: &P, tournament_id: TournamentId) -> TournamentResult<Vec<Pairing>>
where
    P: StandingsProvider + ?Sized,
{
    let standings = provider.standings(tournament_id)?;
    validate_standings(&standings)?;

    let pairings = pair_adjacent(&standings)?;
    debug!(
        "Paired {} players into {} matches for tournament {}",
        standings.len(),
        pairings.len(),
        tournament_id
    );
    Ok(pairings)
}

/// Pairs rows (0, 1), (2, 3), ... in the given order. No byes: an odd number
/// of rows is rejected.
pub fn pair_adjacent(standings: &[StandingsRow]) -> TournamentResult<Vec<Pairing>> {
    if standings.len() % 2 != 0 {
        return Err(TournamentError::OddPlayerCount(standings.len()));
    }

    let pairings = standings
        .chunks_exact(2)
        .map(|pair| Pairing {
            player1_id: pair[0].player_id,
            player1_name: pair[0].name.clone(),
            player2_id: pair[1].player_id,
            player2_name: pair[1].name.clone(),
        })
        .collect();

    Ok(pairings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedStandings(HashMap<TournamentId, Vec<StandingsRow>>);

    impl StandingsProvider for FixedStandings {
        fn standings(&self, tournament_id: TournamentId) -> TournamentResult<Vec<StandingsRow>> {
            self.0
                .get(&tournament_id)
                .cloned()
                .ok_or_else(|| TournamentError::not_found(crate::errors::Entity::Tournament, tournament_id))
        }
    }

    fn rows(records: &[(i64, &str, u32, u32)]) -> Vec<StandingsRow> {
        records
            .iter()
            .enumerate()
            .map(|(idx, &(player_id, name, wins, matches))| StandingsRow {
                player_id,
                name: name.to_string(),
                wins,
                matches,
                registration_seq: idx as i64 + 1,
            })
            .collect()
    }

    #[test]
    fn test_empty_standings_give_no_pairings() {
        assert!(pair_adjacent(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_two_players_give_single_pair() {
        let standings = rows(&[(7, "Ross Gynn", 0, 0), (9, "Randy Schwartz", 0, 0)]);
        let pairings = pair_adjacent(&standings).unwrap();

        assert_eq!(
            pairings,
            vec![Pairing {
                player1_id: 7,
                player1_name: "Ross Gynn".to_string(),
                player2_id: 9,
                player2_name: "Randy Schwartz".to_string(),
            }]
        );
    }

    #[test]
    fn test_odd_count_is_rejected() {
        let standings = rows(&[(1, "A", 0, 0), (2, "B", 0, 0), (3, "C", 0, 0)]);
        let err = pair_adjacent(&standings).unwrap_err();
        assert!(matches!(err, TournamentError::OddPlayerCount(3)));
    }

    #[test]
    fn test_every_player_appears_once() {
        let standings = rows(&[
            (1, "A", 0, 0),
            (2, "B", 0, 0),
            (3, "C", 0, 0),
            (4, "D", 0, 0),
            (5, "E", 0, 0),
            (6, "F", 0, 0),
        ]);
        let pairings = pair_adjacent(&standings).unwrap();
        assert_eq!(pairings.len(), 3);

        let mut ids: Vec<i64> = pairings.iter().flat_map(Pairing::player_ids).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_generate_pairings_groups_winners() {
        let provider = FixedStandings(HashMap::from([(
            1,
            rows(&[
                (10, "Homer Simpson", 1, 1),
                (12, "Bart Simpson", 1, 1),
                (11, "Marge Simpson", 0, 1),
                (13, "Lisa Simpson", 0, 1),
            ]),
        )]));

        let pairings = generate_pairings(&provider, 1).unwrap();
        assert_eq!(pairings[0].player_ids(), [10, 12]);
        assert_eq!(pairings[1].player_ids(), [11, 13]);
        assert_eq!(generate_pairings(&provider, 1).unwrap(), pairings);
    }

    #[test]
    fn test_generate_pairings_propagates_provider_errors() {
        let provider = FixedStandings(HashMap::new());
        let err = generate_pairings(&provider, 5).unwrap_err();
        assert!(matches!(err, TournamentError::NotFound { .. }));
    }

    #[test]
    fn test_generate_pairings_rejects_unordered_standings() {
        let provider = FixedStandings(HashMap::from([(
            1,
            rows(&[(1, "A", 0, 1), (2, "B", 1, 1)]),
        )]));
        let err = generate_pairings(&provider, 1).unwrap_err();
        assert!(matches!(err, TournamentError::InconsistentStandings(_)));
    }
}
