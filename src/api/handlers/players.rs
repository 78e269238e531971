use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use super::{run_blocking, ApiResult, AppState};
use crate::api::models::{
    CountResponse, CreatedResponse, DeletedResponse, RegisterPlayerRequest, TournamentFilter,
};

pub async fn register_player(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterPlayerRequest>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let player = run_blocking(&state, move |service| {
        service.register_player(&request.name, request.tournament_id)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: player.id })))
}

pub async fn count_players(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<TournamentFilter>,
) -> ApiResult<Json<CountResponse>> {
    let count = run_blocking(&state, move |service| service.count_players(filter.tournament_id)).await?;
    Ok(Json(CountResponse { count }))
}

pub async fn delete_players(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DeletedResponse>> {
    let deleted = run_blocking(&state, |service| service.delete_players()).await?;
    Ok(Json(DeletedResponse { deleted }))
}
