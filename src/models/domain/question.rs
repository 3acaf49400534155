use serde::Serialize;

pub const DEFAULT_SUBJECT: &str = "Unknown Subject";
pub const DEFAULT_DIFFICULTY: &str = "Medium";
pub const MISSING_CONTENT: &str = "Error: Question content is missing";
pub const RUBRIC_NOT_AVAILABLE: &str = "Rubric not available";

/// A generated exam question. `id` is the item's position in its batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: usize,
    #[serde(rename = "type")]
    pub question_type: String,
    pub content: String,
    pub subject: String,
    pub difficulty: String,
    #[serde(flatten)]
    pub details: QuestionDetails,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QuestionDetails {
    MultipleChoice(MultipleChoiceDetails),
    FreeResponse(FreeResponseDetails),
    Unrecognized {},
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleChoiceDetails {
    pub options: Vec<AnswerOption>, // may be empty; empty means unusable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<AnswerLetter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub label: String,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
}

impl AnswerLetter {
    /// Accepts exactly one of `A`-`D` after trimming and upper-casing.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "A" => Some(AnswerLetter::A),
            "B" => Some(AnswerLetter::B),
            "C" => Some(AnswerLetter::C),
            "D" => Some(AnswerLetter::D),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeResponseDetails {
    pub rubric: Rubric,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_response: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Rubric {
    pub points: u32,
    pub criteria: Vec<String>,
}

impl Rubric {
    pub fn placeholder() -> Self {
        Self {
            points: 0,
            criteria: vec![RUBRIC_NOT_AVAILABLE.to_string()],
        }
    }
}

impl Question {
    pub fn options(&self) -> Option<&[AnswerOption]> {
        match &self.details {
            QuestionDetails::MultipleChoice(mcq) => Some(&mcq.options),
            _ => None,
        }
    }

    pub fn correct_answer(&self) -> Option<AnswerLetter> {
        match &self.details {
            QuestionDetails::MultipleChoice(mcq) => mcq.correct_answer,
            _ => None,
        }
    }

    pub fn rubric(&self) -> Option<&Rubric> {
        match &self.details {
            QuestionDetails::FreeResponse(frq) => Some(&frq.rubric),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mcq_question() -> Question {
        Question {
            id: 0,
            question_type: "mcq".to_string(),
            content: "Which organelle performs photosynthesis?".to_string(),
            subject: "AP Biology".to_string(),
            difficulty: "Medium".to_string(),
            details: QuestionDetails::MultipleChoice(MultipleChoiceDetails {
                options: vec![
                    AnswerOption {
                        label: "A".to_string(),
                        text: "Chloroplast".to_string(),
                    },
                    AnswerOption {
                        label: "B".to_string(),
                        text: "Ribosome".to_string(),
                    },
                ],
                correct_answer: Some(AnswerLetter::A),
                explanation: None,
            }),
        }
    }

    #[test]
    fn answer_letter_normalizes_case_and_whitespace() {
        assert_eq!(AnswerLetter::parse(" d "), Some(AnswerLetter::D));
        assert_eq!(AnswerLetter::parse("b"), Some(AnswerLetter::B));
        assert_eq!(AnswerLetter::parse("E"), None);
        assert_eq!(AnswerLetter::parse("AB"), None);
        assert_eq!(AnswerLetter::parse(""), None);
    }

    #[test]
    fn mcq_serializes_flat_with_camel_case_fields() {
        let value = serde_json::to_value(mcq_question()).expect("question should serialize");

        assert_eq!(value["id"], 0);
        assert_eq!(value["type"], "mcq");
        assert_eq!(value["correctAnswer"], "A");
        assert_eq!(value["options"].as_array().map(Vec::len), Some(2));
        assert!(value.get("explanation").is_none());
        assert!(value.get("details").is_none());
    }

    #[test]
    fn absent_correct_answer_is_omitted() {
        let mut question = mcq_question();
        if let QuestionDetails::MultipleChoice(mcq) = &mut question.details {
            mcq.correct_answer = None;
        }

        let value = serde_json::to_value(&question).expect("question should serialize");
        assert!(value.get("correctAnswer").is_none());
        assert_eq!(question.correct_answer(), None);
    }

    #[test]
    fn frq_serializes_rubric_and_sample_response() {
        let question = Question {
            id: 1,
            question_type: "frq".to_string(),
            content: "Explain the light reactions.".to_string(),
            subject: "AP Biology".to_string(),
            difficulty: "Hard".to_string(),
            details: QuestionDetails::FreeResponse(FreeResponseDetails {
                rubric: Rubric {
                    points: 4,
                    criteria: vec!["Mentions thylakoid".to_string(), "Mentions ATP".to_string()],
                },
                sample_response: Some("The light reactions...".to_string()),
            }),
        };

        let value = serde_json::to_value(&question).expect("question should serialize");
        assert_eq!(
            value["rubric"],
            json!({ "points": 4, "criteria": ["Mentions thylakoid", "Mentions ATP"] })
        );
        assert_eq!(value["sampleResponse"], "The light reactions...");
        assert!(value.get("options").is_none());
        assert!(question.options().is_none());
    }

    #[test]
    fn unrecognized_serializes_only_common_fields() {
        let question = Question {
            id: 2,
            question_type: "essay".to_string(),
            content: "Error: Unknown question type 'essay'".to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
            difficulty: DEFAULT_DIFFICULTY.to_string(),
            details: QuestionDetails::Unrecognized {},
        };

        let value = serde_json::to_value(&question).expect("question should serialize");
        let object = value.as_object().expect("question should be an object");
        assert_eq!(object.len(), 5);
        assert_eq!(object["type"], "essay");
    }

    #[test]
    fn rubric_placeholder_has_zero_points_and_one_criterion() {
        let rubric = Rubric::placeholder();
        assert_eq!(rubric.points, 0);
        assert_eq!(rubric.criteria, vec![RUBRIC_NOT_AVAILABLE.to_string()]);
    }
}
