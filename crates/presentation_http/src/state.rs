//! Application state shared across handlers

use std::sync::Arc;

use application::{
    AckGenerator, ChaosConfigService, MessageIntakeService,
    ports::{ChaosConfigStore, RandomSource, RequestLogPort},
};
use domain::DomainError;
use infrastructure::{AppConfig, InMemoryChaosConfigStore, ThreadRandomSource, TracingRequestLog};

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// HL7 intake pipeline
    pub intake: Arc<MessageIntakeService>,
    /// Chaos configuration read/replace
    pub chaos_config: Arc<ChaosConfigService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wire services with the given random source and request log
    ///
    /// Fails when the configured initial chaos settings are invalid.
    pub fn new(
        config: AppConfig,
        random: Arc<dyn RandomSource>,
        request_log: Arc<dyn RequestLogPort>,
    ) -> Result<Self, DomainError> {
        let store: Arc<dyn ChaosConfigStore> =
            Arc::new(InMemoryChaosConfigStore::new(config.initial_chaos()?));

        let intake = MessageIntakeService::new(Arc::clone(&store), random, request_log)
            .with_ack_generator(AckGenerator::new(config.ack.clone()))
            .with_environment(config.environment.to_string());

        Ok(Self {
            intake: Arc::new(intake),
            chaos_config: Arc::new(ChaosConfigService::new(store)),
            config: Arc::new(config),
        })
    }

    /// Wire services with the production adapters
    pub fn from_config(config: AppConfig) -> Result<Self, DomainError> {
        Self::new(
            config,
            Arc::new(ThreadRandomSource::new()),
            Arc::new(TracingRequestLog::new()),
        )
    }
}
