use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::generation::{GenerationParams, TestType};

pub const DEFAULT_QUESTION_COUNT: u32 = 1;
pub const MAX_QUESTION_COUNT: u32 = 50;
pub const DEFAULT_DIFFICULTY: &str = "intermediate";

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsRequest {
    // A missing topic deserializes as empty so it fails validation, not parsing.
    #[serde(default)]
    #[validate(custom(function = "validate_topic"))]
    pub topic: String,

    #[serde(default)]
    pub test_type: TestType,

    #[serde(default = "default_question_count")]
    #[validate(range(min = 1, max = 50))]
    pub question_count: u32,

    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

fn default_question_count() -> u32 {
    DEFAULT_QUESTION_COUNT
}

fn default_difficulty() -> String {
    DEFAULT_DIFFICULTY.to_string()
}

fn validate_topic(topic: &str) -> Result<(), ValidationError> {
    if topic.trim().is_empty() {
        let mut err = ValidationError::new("blank_topic");
        err.message = Some("topic must be a non-empty string".into());
        return Err(err);
    }
    Ok(())
}

impl From<GenerateQuestionsRequest> for GenerationParams {
    fn from(request: GenerateQuestionsRequest) -> Self {
        GenerationParams {
            topic: request.topic,
            test_type: request.test_type,
            question_count: request.question_count,
            difficulty: request.difficulty,
        }
    }
}
