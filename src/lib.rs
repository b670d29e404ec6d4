pub mod api;
pub mod config;
pub mod delivery;
pub mod error;
pub mod gitlab;
pub mod logging;
pub mod message;
pub mod translate;
pub mod utils;
pub mod webhook;

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

use config::RelayConfig;
use delivery::MattermostClient;

pub struct AppState {
    pub config: RelayConfig,
    pub mattermost: MattermostClient,
    pub start_time: Instant,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: RelayConfig) -> error::Result<Self> {
        let mattermost = MattermostClient::new(config.mattermost_url.clone())?;
        Ok(Self {
            config,
            mattermost,
            start_time: Instant::now(),
            started_at: Utc::now(),
        })
    }
}

pub type SharedState = Arc<AppState>;
