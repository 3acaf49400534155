use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestType {
    #[default]
    Mcq,
    Frq,
    Full,
}

impl TestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::Mcq => "mcq",
            TestType::Frq => "frq",
            TestType::Full => "full",
        }
    }
}

impl std::fmt::Display for TestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validated parameters for one generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationParams {
    pub topic: String,
    pub test_type: TestType,
    pub question_count: u32,
    pub difficulty: String,
}

impl GenerationParams {
    /// MCQ and FRQ counts for a `full` test: ceil(70%) and floor(30%).
    pub fn full_test_split(&self) -> (u32, u32) {
        let n = self.question_count;
        ((7 * n + 9) / 10, (3 * n) / 10)
    }

    /// Deterministic key identifying duplicate requests.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.topic.as_bytes());
        hasher.update([0u8]);
        hasher.update(self.test_type.as_str().as_bytes());
        hasher.update([0u8]);
        hasher.update(self.question_count.to_string().as_bytes());
        hasher.update([0u8]);
        hasher.update(self.difficulty.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
