use thiserror::Error;

/// Kinds of records an id can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Player,
    Tournament,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entity::Player => write!(f, "player"),
            Entity::Tournament => write!(f, "tournament"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("{entity} {id} not found")]
    NotFound { entity: Entity, id: i64 },

    #[error("cannot pair an odd number of players ({0})")]
    OddPlayerCount(usize),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("standings are inconsistent: {0}")]
    InconsistentStandings(String),

    #[error("database error: {0}")]
    Persistence(#[from] rusqlite::Error),

    /// Pool exhaustion or a connection that failed its init pragmas.
    #[error("database connection error: {0}")]
    Connection(#[from] r2d2::Error),
}

impl TournamentError {
    pub fn not_found(entity: Entity, id: i64) -> Self {
        TournamentError::NotFound { entity, id }
    }

    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            TournamentError::Persistence(_) | TournamentError::Connection(_)
        )
    }

    /// Message safe to hand to API clients; store internals are not echoed back.
    pub fn client_message(&self) -> String {
        match self {
            TournamentError::Persistence(e) if is_constraint_violation(e) => {
                "Operation violates a data constraint".to_string()
            }
            TournamentError::Persistence(_) | TournamentError::Connection(_) => {
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        }
    }
}

pub fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

pub type TournamentResult<T> = Result<T, TournamentError>;

/// Ids are assigned from 1 upwards; zero or negative ids are malformed input
/// rather than missing records.
pub fn ensure_positive_id(entity: Entity, id: i64) -> TournamentResult<()> {
    if id <= 0 {
        return Err(TournamentError::Validation(format!(
            "{entity} id must be positive, got {id}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = TournamentError::not_found(Entity::Tournament, 7);
        assert_eq!(err.to_string(), "tournament 7 not found");
        assert!(!err.is_persistence());
    }

    #[test]
    fn test_ensure_positive_id() {
        assert!(ensure_positive_id(Entity::Player, 1).is_ok());
        let err = ensure_positive_id(Entity::Tournament, -1).unwrap_err();
        assert!(matches!(err, TournamentError::Validation(_)));
        assert_eq!(err.to_string(), "invalid input: tournament id must be positive, got -1");
        assert!(ensure_positive_id(Entity::Player, 0).is_err());
    }

    #[test]
    fn test_client_message_hides_database_details() {
        let err = TournamentError::Persistence(rusqlite::Error::InvalidQuery);
        assert!(err.is_persistence());
        assert_eq!(err.client_message(), "Internal server error");
    }

    #[test]
    fn test_client_message_keeps_domain_errors() {
        let err = TournamentError::OddPlayerCount(3);
        assert_eq!(err.client_message(), "cannot pair an odd number of players (3)");
    }
}
