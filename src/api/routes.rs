use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::api::handlers::{
    matches::{delete_matches, list_matches, report_match},
    players::{count_players, delete_players, register_player},
    tournaments::{
        delete_tournaments, enroll_player, get_pairings, get_standings, list_tournaments,
        register_tournament,
    },
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/tournaments",
            post(register_tournament)
                .get(list_tournaments)
                .delete(delete_tournaments),
        )
        .route("/api/tournaments/:id/registrations", post(enroll_player))
        .route("/api/tournaments/:id/matches", post(report_match).get(list_matches))
        .route("/api/tournaments/:id/standings", get(get_standings))
        .route("/api/tournaments/:id/pairings", get(get_pairings))
        .route("/api/players", post(register_player).delete(delete_players))
        .route("/api/players/count", get(count_players))
        .route("/api/matches", delete(delete_matches))
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
        .with_state(state)
}
