#[cfg(test)]
pub mod fixtures {
    use crate::models::{domain::generation::TestType, dto::request::GenerateQuestionsRequest};

    /// Creates a generation request with the default difficulty
    pub fn request(topic: &str, test_type: TestType, question_count: u32) -> GenerateQuestionsRequest {
        GenerateQuestionsRequest {
            topic: topic.to_string(),
            test_type,
            question_count,
            difficulty: "intermediate".to_string(),
        }
    }

    /// One well-formed MCQ wrapped in conversational prose
    pub fn chatty_mcq_completion() -> String {
        r#"Sure! Here is your question:
[
  {
    "type": "mcq",
    "content": "During photosynthesis, which molecule is the final electron acceptor of the light reactions?",
    "options": [
      { "label": "A", "text": "Oxygen" },
      { "label": "B", "text": "Water" },
      { "label": "C", "text": "NADP+" },
      { "label": "D", "text": "Carbon dioxide" }
    ],
    "correctAnswer": "c",
    "explanation": "NADP+ is reduced to NADPH at the end of the light reactions.",
    "subject": "AP Biology",
    "difficulty": "Medium"
  }
]
Let me know if you want more."#
            .to_string()
    }

    /// An MCQ whose content carries unescaped inline math
    pub fn latex_mcq_completion() -> String {
        r#"```json
[{"type":"mcq","content":"Simplify \(\sqrt{x}\) when \(x = 16\).","options":[{"label":"A","text":"2"},{"label":"B","text":"4"},{"label":"C","text":"8"},{"label":"D","text":"16"}],"correctAnswer":"B","subject":"AP Calculus AB","difficulty":"Easy"}]
```"#
            .to_string()
    }

    /// A good MCQ, an FRQ without rubric, and an MCQ with an invalid answer letter
    pub fn mixed_quality_completion() -> String {
        r#"[
  {"type":"mcq","content":"Q1","options":[{"label":"A","text":"a"},{"label":"B","text":"b"},{"label":"C","text":"c"},{"label":"D","text":"d"}],"correctAnswer":"A","subject":"AP Biology","difficulty":"Easy"},
  {"type":"frq","content":"Q2","subject":"AP Biology","difficulty":"Hard"},
  {"type":"mcq","content":"Q3","options":[{"label":"A","text":"a"},{"label":"B","text":"b"},{"label":"C","text":"c"},{"label":"D","text":"d"}],"correctAnswer":"E","subject":"AP Biology","difficulty":"Medium"}
]"#
        .to_string()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::generation::TestType;
    use crate::services::{
        candidate_extractor::{ArrayLiteralExtractor, ResponseShapeAdapter},
        escape_repairer::repair_escapes,
        structural_parser::parse_candidate,
    };

    #[test]
    fn test_fixtures_request() {
        let request = request("AP Biology", TestType::Frq, 3);
        assert_eq!(request.topic, "AP Biology");
        assert_eq!(request.test_type, TestType::Frq);
        assert_eq!(request.question_count, 3);
    }

    #[test]
    fn test_fixture_completions_survive_extraction_and_repair() {
        for completion in [
            chatty_mcq_completion(),
            latex_mcq_completion(),
            mixed_quality_completion(),
        ] {
            let candidate = ArrayLiteralExtractor.extract_candidate(&completion);
            assert!(parse_candidate(&repair_escapes(&candidate)).is_ok());
        }
    }
}
