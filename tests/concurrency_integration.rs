//! Concurrent writers sharing one file-backed pool.

use std::sync::Arc;
use std::thread;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

use swiss_tournament::config::settings::DatabaseSettings;
use swiss_tournament::database::{self, get_connection};
use swiss_tournament::services::TournamentService;
use swiss_tournament::swiss::{MatchRecorder, StandingsProvider};

const THREADS: usize = 8;
const REPORTS_PER_THREAD: usize = 50;

fn file_service(path: &std::path::Path) -> TournamentService {
    let settings = DatabaseSettings {
        path: path.to_string_lossy().into_owned(),
        pool_size: THREADS as u32,
    };
    let pool = database::create_pool(&settings).unwrap();
    database::setup::ensure_schema(&get_connection(&pool).unwrap()).unwrap();
    TournamentService::with_rng(pool, StdRng::seed_from_u64(21))
}

#[test]
fn test_parallel_reports_on_file_database() {
    let dir = tempdir().unwrap();
    let service = Arc::new(file_service(&dir.path().join("tournament.db")));

    let t = service.register_tournament("Springfield Cup").unwrap().id;
    let homer = service.register_player("Homer Simpson", Some(t)).unwrap().id;
    let marge = service.register_player("Marge Simpson", Some(t)).unwrap().id;

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                let (winner, loser) = if i % 2 == 0 { (homer, marge) } else { (marge, homer) };
                (0..REPORTS_PER_THREAD)
                    .filter_map(|_| service.report_match(t, winner, loser).err())
                    .map(|err| err.to_string())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let errors: Vec<String> = handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect();
    assert!(errors.is_empty(), "{} reports failed, first: {:?}", errors.len(), errors.first());

    let total = (THREADS * REPORTS_PER_THREAD) as u32;
    assert_eq!(service.list_matches(t).unwrap().len(), total as usize);

    let standings = service.standings(t).unwrap();
    assert_eq!(standings.iter().map(|r| r.wins).sum::<u32>(), total);
    assert!(standings.iter().all(|r| r.matches == total));
}
