use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::AppResult,
    models::{
        domain::{generation::GenerationParams, validation_issue::NormalizedBatch},
        dto::request::GenerateQuestionsRequest,
    },
    services::{
        candidate_extractor::{ArrayLiteralExtractor, ResponseShapeAdapter},
        escape_repairer::repair_escapes,
        generation_gateway::GenerationGateway,
        prompt_synthesizer::synthesize_prompt,
        question_normalizer::normalize_batch,
        single_flight::SingleFlight,
        structural_parser::parse_candidate,
    },
};

/// Turns a generation request into a normalized batch of questions.
///
/// Everything up to and including parsing fails the whole batch; problems
/// inside individual items are reported as issues on the batch instead.
pub struct QuestionPipeline {
    gateway: Arc<dyn GenerationGateway>,
    adapter: Arc<dyn ResponseShapeAdapter>,
    single_flight: Option<SingleFlight<AppResult<NormalizedBatch>>>,
}

impl QuestionPipeline {
    pub fn new(gateway: Arc<dyn GenerationGateway>) -> Self {
        Self {
            gateway,
            adapter: Arc::new(ArrayLiteralExtractor),
            single_flight: Some(SingleFlight::new()),
        }
    }

    pub fn with_adapter(mut self, adapter: Arc<dyn ResponseShapeAdapter>) -> Self {
        self.adapter = adapter;
        self
    }

    pub fn with_deduplication(mut self, enabled: bool) -> Self {
        self.single_flight = enabled.then(SingleFlight::new);
        self
    }

    pub async fn generate(&self, request: GenerateQuestionsRequest) -> AppResult<NormalizedBatch> {
        request.validate()?;
        let params = GenerationParams::from(request);

        let gateway = Arc::clone(&self.gateway);
        let adapter = Arc::clone(&self.adapter);

        match &self.single_flight {
            Some(single_flight) => {
                let key = params.fingerprint();
                single_flight
                    .run(key, move || run_stages(gateway, adapter, params))
                    .await?
            }
            None => run_stages(gateway, adapter, params).await,
        }
    }
}

async fn run_stages(
    gateway: Arc<dyn GenerationGateway>,
    adapter: Arc<dyn ResponseShapeAdapter>,
    params: GenerationParams,
) -> AppResult<NormalizedBatch> {
    let fingerprint = params.fingerprint();
    log::info!(
        "Generating {} {} question(s) [{}]",
        params.question_count,
        params.test_type,
        &fingerprint[..12]
    );

    let prompt = synthesize_prompt(&params);
    let completion = gateway.generate(&prompt).await?;

    let candidate = adapter.extract_candidate(&completion);
    let repaired = repair_escapes(&candidate);
    let items = parse_candidate(&repaired)?;

    let batch = normalize_batch(&items, params.test_type);
    log::info!(
        "Generated {} question(s), {} degraded [{}]",
        batch.questions.len(),
        batch.degraded_count(),
        &fingerprint[..12]
    );
    Ok(batch)
}
