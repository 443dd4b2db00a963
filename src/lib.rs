pub mod answer;
pub mod directus;
pub mod handlers;
pub mod hook;
pub mod models;
pub mod names;
pub mod rejections;
pub mod services;

use std::sync::Arc;

use axum::Router;

use crate::hook::HookConfig;

#[derive(Clone)]
pub struct AppState {
    pub hook: Arc<HookConfig>,
}

impl AppState {
    pub fn new(hook: HookConfig) -> Self {
        Self {
            hook: Arc::new(hook),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::filter::routes())
        .merge(handlers::health::routes())
        .with_state(state)
}
