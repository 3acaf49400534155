use serde::Serialize;

use crate::models::domain::question::Question;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IssueField {
    Item,
    Type,
    Content,
    CorrectAnswer,
    Options,
    Rubric,
}

/// A non-fatal problem found while normalizing one generated item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub item_id: usize,
    pub field: IssueField,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(item_id: usize, field: IssueField, message: impl Into<String>) -> Self {
        Self {
            item_id,
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item {} [{:?}]: {}", self.item_id, self.field, self.message)
    }
}

/// Normalization result for a single array element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemOutcome {
    pub question: Question,
    pub issues: Vec<ValidationIssue>,
}

impl ItemOutcome {
    pub fn is_degraded(&self) -> bool {
        !self.issues.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NormalizedBatch {
    pub questions: Vec<Question>,
    pub issues: Vec<ValidationIssue>,
}

impl NormalizedBatch {
    /// Number of distinct items carrying at least one issue.
    pub fn degraded_count(&self) -> usize {
        let mut ids: Vec<usize> = self.issues.iter().map(|issue| issue.item_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }
}

impl FromIterator<ItemOutcome> for NormalizedBatch {
    fn from_iter<I: IntoIterator<Item = ItemOutcome>>(iter: I) -> Self {
        let mut batch = NormalizedBatch::default();
        for outcome in iter {
            batch.issues.extend(outcome.issues);
            batch.questions.push(outcome.question);
        }
        batch
    }
}
