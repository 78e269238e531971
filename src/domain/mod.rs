pub mod models;

pub use models::{Pairing, PlayerId, Seating, StandingsRow, TournamentId};
