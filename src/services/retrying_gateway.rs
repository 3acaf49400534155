use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use rand::Rng;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    services::generation_gateway::GenerationGateway,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub deadline: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_retries: config.generation_max_retries,
            base_delay: Duration::from_millis(config.generation_retry_base_delay_ms),
            deadline: Duration::from_secs(config.generation_deadline_secs),
        }
    }

    /// Exponential backoff for retry `attempt` (1-based), before jitter.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.base_delay.saturating_mul(1u32 << exponent)
    }

    fn delay_with_jitter(&self, attempt: u32) -> Duration {
        let base_ms = self.base_delay.as_millis() as u64;
        let jitter_ms = if base_ms == 0 {
            0
        } else {
            rand::rng().random_range(0..=base_ms)
        };
        self.backoff(attempt) + Duration::from_millis(jitter_ms)
    }
}

/// Retries upstream failures with jittered backoff, all under one deadline.
pub struct RetryingGateway {
    inner: Arc<dyn GenerationGateway>,
    policy: RetryPolicy,
}

impl RetryingGateway {
    pub fn new(inner: Arc<dyn GenerationGateway>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    async fn attempt_all(&self, prompt: &str) -> AppResult<String> {
        let mut attempt = 0;
        loop {
            match self.inner.generate(prompt).await {
                Ok(completion) => return Ok(completion),
                Err(err) if err.is_upstream() && attempt < self.policy.max_retries => {
                    attempt += 1;
                    let delay = self.policy.delay_with_jitter(attempt);
                    log::warn!(
                        "Generation attempt {} failed ({}); retrying in {:?}",
                        attempt,
                        err,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[async_trait]
impl GenerationGateway for RetryingGateway {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        match tokio::time::timeout(self.policy.deadline, self.attempt_all(prompt)).await {
            Ok(result) => result,
            Err(_) => Err(AppError::UpstreamGenerationError(format!(
                "generation deadline exceeded after {:?}",
                self.policy.deadline
            ))),
        }
    }
}
