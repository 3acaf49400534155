use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::{
    config::Config,
    constants::prompts::QUESTION_GENERATOR_SYSTEM_PROMPT,
    errors::{AppError, AppResult},
};

// Sampling is fixed per deployment; requests cannot override it.
const GENERATION_TEMPERATURE: f32 = 0.9;
const GENERATION_MAX_COMPLETION_TOKENS: u32 = 4096;
const GENERATION_FREQUENCY_PENALTY: f32 = 0.5;
const GENERATION_PRESENCE_PENALTY: f32 = 0.3;

/// The pipeline's only I/O boundary: prompt in, raw completion text out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationGateway: Send + Sync {
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

pub struct OpenAiGenerationGateway {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiGenerationGateway {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.openai_api_key.expose_secret())
            .with_api_base(&config.openai_api_base);

        Self {
            client: Client::with_config(openai_config),
            model: config.generation_model.clone(),
        }
    }
}

#[async_trait]
impl GenerationGateway for OpenAiGenerationGateway {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        log::debug!(
            "Requesting completion from model {} (prompt length {})",
            self.model,
            prompt.len()
        );

        let system_message = ChatCompletionRequestSystemMessageArgs::default()
            .content(QUESTION_GENERATOR_SYSTEM_PROMPT)
            .build()?;
        let user_message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![
                ChatCompletionRequestMessage::System(system_message),
                ChatCompletionRequestMessage::User(user_message),
            ])
            .temperature(GENERATION_TEMPERATURE)
            .max_completion_tokens(GENERATION_MAX_COMPLETION_TOKENS)
            .frequency_penalty(GENERATION_FREQUENCY_PENALTY)
            .presence_penalty(GENERATION_PRESENCE_PENALTY)
            .build()?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            log::warn!("Generation request to {} failed: {}", self.model, e);
            AppError::UpstreamGenerationError(e.to_string())
        })?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        non_empty_completion(content)
    }
}

/// An empty or whitespace-only completion is an upstream failure.
pub fn non_empty_completion(content: String) -> AppResult<String> {
    if content.trim().is_empty() {
        return Err(AppError::UpstreamGenerationError(
            "generation service returned an empty completion".to_string(),
        ));
    }
    log::debug!("Received completion of length {}", content.len());
    Ok(content)
}
