use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::error;
use std::sync::Arc;
use tokio::task::JoinError;

use crate::api::models::ErrorResponse;
use crate::errors::{TournamentError, TournamentResult};
use crate::services::tournament::TournamentService;

pub mod matches;
pub mod players;
pub mod tournaments;

pub struct AppState {
    pub service: TournamentService,
}

/// Maps core errors onto HTTP statuses with a JSON body.
#[derive(Debug)]
pub enum ApiError {
    Tournament(TournamentError),
    /// The blocking task running the service call panicked or was cancelled.
    Task(JoinError),
}

impl From<TournamentError> for ApiError {
    fn from(err: TournamentError) -> Self {
        ApiError::Tournament(err)
    }
}

impl From<JoinError> for ApiError {
    fn from(err: JoinError) -> Self {
        ApiError::Task(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Tournament(err) => match err {
                TournamentError::NotFound { .. } => StatusCode::NOT_FOUND,
                TournamentError::OddPlayerCount(_) => StatusCode::CONFLICT,
                TournamentError::Validation(_) => StatusCode::BAD_REQUEST,
                TournamentError::Persistence(e) if crate::errors::is_constraint_violation(e) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                TournamentError::InconsistentStandings(_)
                | TournamentError::Persistence(_)
                | TournamentError::Connection(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Tournament(err) => {
                if status.is_server_error() {
                    error!("Request failed: {}", err);
                }
                err.client_message()
            }
            ApiError::Task(err) => {
                error!("Request task failed: {}", err);
                "Internal server error".to_string()
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Runs a service call on the blocking pool; SQLite access is synchronous.
pub async fn run_blocking<T, F>(state: &Arc<AppState>, op: F) -> ApiResult<T>
where
    F: FnOnce(&TournamentService) -> TournamentResult<T> + Send + 'static,
    T: Send + 'static,
{
    let state = Arc::clone(state);
    let value = tokio::task::spawn_blocking(move || op(&state.service)).await??;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Entity;
    use crate::swiss::StandingsProvider;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Tournament(TournamentError::not_found(Entity::Player, 1)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::Tournament(TournamentError::OddPlayerCount(3)).status(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::Tournament(TournamentError::Validation("empty".to_string())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Tournament(TournamentError::Persistence(rusqlite::Error::InvalidQuery)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_panicked_task_is_internal_error() {
        let join_err = tokio::task::spawn_blocking(|| -> i64 { panic!("boom") }).await.unwrap_err();
        let err = ApiError::from(join_err);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_run_blocking_returns_service_result() {
        let pool = crate::database::create_memory_pool().unwrap();
        crate::database::setup::ensure_schema(&crate::database::get_connection(&pool).unwrap())
            .unwrap();
        let state = Arc::new(AppState {
            service: TournamentService::new(pool),
        });

        let count = run_blocking(&state, |service| service.count_players(None)).await.unwrap();
        assert_eq!(count, 0);

        let err = run_blocking(&state, |service| service.standings(42)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
