pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::models::vacancy::VacancySnapshot;
use crate::services::aggregate_service::AggregateService;

#[derive(Clone)]
pub struct AppState {
    pub snapshot: Arc<VacancySnapshot>,
    pub aggregate_service: AggregateService,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(snapshot: VacancySnapshot, config: &Config) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            aggregate_service: AggregateService::new(config.min_skill_threshold),
            static_dir: config.static_dir.clone(),
        }
    }
}
