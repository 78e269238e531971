use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use super::{run_blocking, ApiResult, AppState};
use crate::api::models::{DeletedResponse, MatchItem, ReportMatchRequest, TournamentFilter};
use crate::domain::TournamentId;
use crate::swiss::MatchRecorder;

pub async fn report_match(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<TournamentId>,
    Json(request): Json<ReportMatchRequest>,
) -> ApiResult<(StatusCode, Json<MatchItem>)> {
    let record = run_blocking(&state, move |service| {
        service.report_match(tournament_id, request.winner_id, request.loser_id)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(MatchItem::from(record))))
}

pub async fn list_matches(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<TournamentId>,
) -> ApiResult<Json<Vec<MatchItem>>> {
    let records = run_blocking(&state, move |service| service.list_matches(tournament_id)).await?;
    Ok(Json(records.into_iter().map(MatchItem::from).collect()))
}

pub async fn delete_matches(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<TournamentFilter>,
) -> ApiResult<Json<DeletedResponse>> {
    let deleted = run_blocking(&state, move |service| service.delete_matches(filter.tournament_id)).await?;
    Ok(Json(DeletedResponse { deleted }))
}
