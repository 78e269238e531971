use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use super::{run_blocking, ApiResult, AppState};
use crate::api::models::{
    CreatedResponse, DeletedResponse, EnrollRequest, PairingsResponse, RegisterTournamentRequest,
    StandingsResponse, TournamentItem,
};
use crate::domain::TournamentId;
use crate::swiss::StandingsProvider;

pub async fn register_tournament(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterTournamentRequest>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let tournament =
        run_blocking(&state, move |service| service.register_tournament(&request.name)).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: tournament.id })))
}

pub async fn list_tournaments(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<TournamentItem>>> {
    let tournaments = run_blocking(&state, |service| service.list_tournaments()).await?;
    Ok(Json(tournaments.into_iter().map(TournamentItem::from).collect()))
}

pub async fn delete_tournaments(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DeletedResponse>> {
    let deleted = run_blocking(&state, |service| service.delete_tournaments()).await?;
    Ok(Json(DeletedResponse { deleted }))
}

pub async fn enroll_player(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<TournamentId>,
    Json(request): Json<EnrollRequest>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let seq =
        run_blocking(&state, move |service| service.enroll(tournament_id, request.player_id)).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: seq })))
}

pub async fn get_standings(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<TournamentId>,
) -> ApiResult<Json<StandingsResponse>> {
    let standings = run_blocking(&state, move |service| service.standings(tournament_id)).await?;
    Ok(Json(StandingsResponse {
        tournament_id,
        standings,
    }))
}

pub async fn get_pairings(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<TournamentId>,
) -> ApiResult<Json<PairingsResponse>> {
    let pairings = run_blocking(&state, move |service| service.pairings(tournament_id)).await?;
    Ok(Json(PairingsResponse {
        tournament_id,
        pairings,
    }))
}
