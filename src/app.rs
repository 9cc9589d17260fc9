use anyhow::Result;

use crate::api::GroupieClient;
use crate::config::AppConfig;
use crate::render::Renderer;

/// Read-only dependencies shared by every request handler.
pub struct AppState {
    pub client: GroupieClient,
    pub renderer: Renderer,
}

impl AppState {
    pub fn new(client: GroupieClient, renderer: Renderer) -> Self {
        Self { client, renderer }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self::new(GroupieClient::new(config)?, Renderer::default()))
    }
}
