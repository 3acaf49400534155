use serde::Serialize;

use crate::models::domain::{
    question::Question,
    validation_issue::{NormalizedBatch, ValidationIssue},
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_issues: Option<Vec<ValidationIssue>>,
}

impl GenerateQuestionsResponse {
    pub fn from_batch(batch: NormalizedBatch, surface_issues: bool) -> Self {
        Self {
            questions: batch.questions,
            validation_issues: surface_issues.then_some(batch.issues),
        }
    }
}
