use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        generation_gateway::{GenerationGateway, OpenAiGenerationGateway},
        question_pipeline::QuestionPipeline,
        retrying_gateway::{RetryPolicy, RetryingGateway},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub question_pipeline: Arc<QuestionPipeline>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let gateway = Arc::new(OpenAiGenerationGateway::new(&config));
        Self::with_gateway(config, gateway)
    }

    /// Builds the state around any gateway, wrapping it with the configured
    /// retry policy.
    pub fn with_gateway(config: Config, gateway: Arc<dyn GenerationGateway>) -> Self {
        let retrying = Arc::new(RetryingGateway::new(gateway, RetryPolicy::from_config(&config)));
        let question_pipeline = Arc::new(
            QuestionPipeline::new(retrying).with_deduplication(config.deduplicate_in_flight),
        );

        Self {
            question_pipeline,
            config: Arc::new(config),
        }
    }
}
