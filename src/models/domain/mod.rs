pub mod generation;
pub mod question;
pub mod validation_issue;

pub use generation::{GenerationParams, TestType};
pub use question::{Question, QuestionDetails};
pub use validation_issue::{NormalizedBatch, ValidationIssue};
