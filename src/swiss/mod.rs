pub mod pairing;
pub mod recorder;
pub mod standings;

pub use pairing::{generate_pairings, pair_adjacent};
pub use recorder::{choose_seating, validate_report, MatchRecorder};
pub use standings::{sort_standings, validate_standings, StandingsProvider};
