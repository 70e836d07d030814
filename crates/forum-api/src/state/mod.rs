//! Shared handler state

use std::sync::Arc;

use forum_common::AppConfig;
use forum_service::ServiceContext;

/// Services plus the settings the router is assembled from
///
/// `ServiceContext` is already a bundle of `Arc`s, so cloning the state per
/// request only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    services: ServiceContext,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(services: ServiceContext, config: AppConfig) -> Self {
        Self {
            services,
            config: Arc::new(config),
        }
    }

    pub fn services(&self) -> &ServiceContext {
        &self.services
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
