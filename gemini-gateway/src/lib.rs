pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use services::{ModelClientState, StaticAssets};
use std::sync::Arc;

/// Shared, read-only application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<ModelClientState>,
    pub assets: Arc<StaticAssets>,
}

impl AppState {
    pub fn new(model: ModelClientState, assets: StaticAssets) -> Self {
        Self {
            model: Arc::new(model),
            assets: Arc::new(assets),
        }
    }
}
