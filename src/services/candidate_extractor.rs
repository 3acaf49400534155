use once_cell::sync::Lazy;
use regex::Regex;

// Greedy: from the first `[` that opens an object to the last `}` closing an array.
static ARRAY_OF_OBJECTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\s*\{[\s\S]*\}\s*\]").expect("ARRAY_OF_OBJECTS is a valid regex pattern")
});

/// Pulls the structured payload out of a raw completion.
pub trait ResponseShapeAdapter: Send + Sync {
    fn extract_candidate(&self, completion: &str) -> String;
}

/// Finds the array-of-objects literal embedded in free text or markdown fences.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArrayLiteralExtractor;

impl ResponseShapeAdapter for ArrayLiteralExtractor {
    fn extract_candidate(&self, completion: &str) -> String {
        match ARRAY_OF_OBJECTS.find(completion) {
            Some(found) => found.as_str().to_string(),
            None => {
                log::debug!("No array literal found in completion; using trimmed text as candidate");
                completion.trim().to_string()
            }
        }
    }
}
