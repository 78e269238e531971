use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::config::settings::AppConfig;
use crate::services::tournament::TournamentService;

pub struct ServerService {
    config: AppConfig,
}

impl ServerService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<()> {
        let service = TournamentService::open(&self.config.database)?;
        let state = Arc::new(AppState { service });
        let app = create_router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.server.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
