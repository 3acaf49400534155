use serde_json::{Map, Value};

use crate::models::domain::{
    generation::TestType,
    question::{
        AnswerLetter, AnswerOption, FreeResponseDetails, MultipleChoiceDetails, Question,
        QuestionDetails, Rubric, DEFAULT_DIFFICULTY, DEFAULT_SUBJECT, MISSING_CONTENT,
    },
    validation_issue::{IssueField, ItemOutcome, NormalizedBatch, ValidationIssue},
};

/// Normalizes every parsed element; the batch keeps the input's length and order.
pub fn normalize_batch(items: &[Value], fallback: TestType) -> NormalizedBatch {
    let batch: NormalizedBatch = items
        .iter()
        .enumerate()
        .map(|(index, item)| normalize_item(index, item, fallback))
        .collect();

    for issue in &batch.issues {
        log::warn!("Degraded generated question: {}", issue);
    }
    batch
}

/// Maps one element to a `Question`. Never fails; problems become issues.
pub fn normalize_item(index: usize, item: &Value, fallback: TestType) -> ItemOutcome {
    let empty = Map::new();
    let mut issues = Vec::new();

    let fields = match item.as_object() {
        Some(fields) => fields,
        None => {
            issues.push(ValidationIssue::new(
                index,
                IssueField::Item,
                "item is not a JSON object",
            ));
            &empty
        }
    };

    let question_type = match fields.get("type") {
        Some(Value::String(raw)) => raw.trim().to_string(),
        Some(Value::Null) | None => fallback.as_str().to_string(),
        Some(other) => other.to_string(),
    };

    let content = match non_blank_string(fields, "content") {
        Some(content) => content,
        None => {
            issues.push(ValidationIssue::new(
                index,
                IssueField::Content,
                "content is missing or empty",
            ));
            MISSING_CONTENT.to_string()
        }
    };

    let mut question = Question {
        id: index,
        question_type,
        content,
        subject: non_blank_string(fields, "subject").unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
        difficulty: non_blank_string(fields, "difficulty")
            .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string()),
        details: QuestionDetails::Unrecognized {},
    };

    match question.question_type.to_lowercase().as_str() {
        "mcq" => {
            question.question_type = TestType::Mcq.as_str().to_string();
            question.details = QuestionDetails::MultipleChoice(multiple_choice_details(
                index,
                fields,
                &mut issues,
            ));
        }
        "frq" => {
            question.question_type = TestType::Frq.as_str().to_string();
            question.details =
                QuestionDetails::FreeResponse(free_response_details(index, fields, &mut issues));
        }
        _ => {
            issues.push(ValidationIssue::new(
                index,
                IssueField::Type,
                format!("unknown question type '{}'", question.question_type),
            ));
            question.content = format!("Error: Unknown question type '{}'", question.question_type);
        }
    }

    ItemOutcome { question, issues }
}

fn multiple_choice_details(
    index: usize,
    fields: &Map<String, Value>,
    issues: &mut Vec<ValidationIssue>,
) -> MultipleChoiceDetails {
    let correct_answer = match fields.get("correctAnswer") {
        Some(Value::String(raw)) => {
            let parsed = AnswerLetter::parse(raw);
            if parsed.is_none() {
                issues.push(ValidationIssue::new(
                    index,
                    IssueField::CorrectAnswer,
                    format!("correctAnswer '{}' is not one of A, B, C, D", raw),
                ));
            }
            parsed
        }
        Some(other) => {
            issues.push(ValidationIssue::new(
                index,
                IssueField::CorrectAnswer,
                format!("correctAnswer {} is not a letter", other),
            ));
            None
        }
        None => {
            issues.push(ValidationIssue::new(
                index,
                IssueField::CorrectAnswer,
                "correctAnswer is missing",
            ));
            None
        }
    };

    let raw_options: &[Value] = match fields.get("options") {
        Some(Value::Array(options)) => options.as_slice(),
        Some(_) => {
            issues.push(ValidationIssue::new(
                index,
                IssueField::Options,
                "options is not an array",
            ));
            &[]
        }
        None => &[],
    };

    let options: Vec<AnswerOption> = raw_options.iter().filter_map(answer_option).collect();

    let dropped = raw_options.len() - options.len();
    if dropped > 0 {
        issues.push(ValidationIssue::new(
            index,
            IssueField::Options,
            format!("dropped {} malformed option(s)", dropped),
        ));
    }
    if options.is_empty() {
        issues.push(ValidationIssue::new(
            index,
            IssueField::Options,
            "no usable options remain",
        ));
    }

    MultipleChoiceDetails {
        options,
        correct_answer,
        explanation: string_field(fields, "explanation"),
    }
}

fn answer_option(value: &Value) -> Option<AnswerOption> {
    let option = value.as_object()?;
    Some(AnswerOption {
        label: option.get("label")?.as_str()?.to_string(),
        text: option.get("text")?.as_str()?.to_string(),
    })
}

fn free_response_details(
    index: usize,
    fields: &Map<String, Value>,
    issues: &mut Vec<ValidationIssue>,
) -> FreeResponseDetails {
    let rubric = match fields.get("rubric") {
        Some(value) => parse_rubric(value).unwrap_or_else(|| {
            issues.push(ValidationIssue::new(
                index,
                IssueField::Rubric,
                "rubric is malformed; using placeholder",
            ));
            Rubric::placeholder()
        }),
        None => {
            issues.push(ValidationIssue::new(
                index,
                IssueField::Rubric,
                "rubric is missing; using placeholder",
            ));
            Rubric::placeholder()
        }
    };

    FreeResponseDetails {
        rubric,
        sample_response: string_field(fields, "sampleResponse"),
    }
}

fn parse_rubric(value: &Value) -> Option<Rubric> {
    let fields = value.as_object()?;
    let points = non_negative_integer(fields.get("points")?)?;
    let criteria: Vec<String> = fields
        .get("criteria")?
        .as_array()?
        .iter()
        .filter_map(|criterion| criterion.as_str())
        .map(str::to_string)
        .collect();

    if criteria.is_empty() {
        return None;
    }
    Some(Rubric { points, criteria })
}

fn non_negative_integer(value: &Value) -> Option<u32> {
    if let Some(points) = value.as_u64() {
        return u32::try_from(points).ok();
    }
    let points = value.as_f64()?;
    if points >= 0.0 && points.fract() == 0.0 && points <= u32::MAX as f64 {
        Some(points as u32)
    } else {
        None
    }
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key)?.as_str().map(str::to_string)
}

fn non_blank_string(fields: &Map<String, Value>, key: &str) -> Option<String> {
    string_field(fields, key).filter(|value| !value.trim().is_empty())
}
