use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    constants::prompts::{
        FRQ_SHAPE, HUMANITIES_NOTATION, MCQ_SHAPE, OUTPUT_RULES, PROGRAMMING_NOTATION,
        QUANTITATIVE_NOTATION, SUBJECT_INFERENCE_INSTRUCTIONS,
    },
    models::domain::generation::{GenerationParams, TestType},
};

static QUANTITATIVE_TOPIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(math\w*|calculus|algebra|geometry|trigonometry|precalculus|statistics|probability|physics|chemistry|biology|biochemistry|science|derivative\w*|integral\w*|equation\w*|stoichiometry|kinematics)\b")
        .expect("QUANTITATIVE_TOPIC is a valid regex pattern")
});

static PROGRAMMING_TOPIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(computer science|csa|csp|programming|java|python|javascript|code|coding|algorithm\w*|data structures?|recursion)\b")
        .expect("PROGRAMMING_TOPIC is a valid regex pattern")
});

static HUMANITIES_TOPIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(history|literature|english|government|politics|economics|psychology|sociology|philosophy|art history|geography|political science|social sciences?|language and composition|rhetoric)\b")
        .expect("HUMANITIES_TOPIC is a valid regex pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectDomain {
    Quantitative,
    Programming,
    Humanities,
    General,
}

impl SubjectDomain {
    pub fn detect(topic: &str) -> Self {
        let topic = topic.to_lowercase();
        // Checked most specific first: "computer science" and "political
        // science" must not fall into the generic science bucket.
        if PROGRAMMING_TOPIC.is_match(&topic) {
            SubjectDomain::Programming
        } else if HUMANITIES_TOPIC.is_match(&topic) {
            SubjectDomain::Humanities
        } else if QUANTITATIVE_TOPIC.is_match(&topic) {
            SubjectDomain::Quantitative
        } else {
            SubjectDomain::General
        }
    }

    fn notation_guidance(&self) -> String {
        match self {
            SubjectDomain::Quantitative => QUANTITATIVE_NOTATION.to_string(),
            SubjectDomain::Programming => PROGRAMMING_NOTATION.to_string(),
            SubjectDomain::Humanities => HUMANITIES_NOTATION.to_string(),
            SubjectDomain::General => format!(
                "- If the subject is mathematical or scientific: {}\n- If the subject involves programming: {}\n- Otherwise: {}",
                QUANTITATIVE_NOTATION, PROGRAMMING_NOTATION, HUMANITIES_NOTATION
            ),
        }
    }
}

/// Builds the instruction text sent to the generation service.
pub fn synthesize_prompt(params: &GenerationParams) -> String {
    let domain = SubjectDomain::detect(&params.topic);

    let sections = [
        format!(
            "Generate {} {} exam question{} at \"{}\" difficulty.",
            params.question_count,
            describe_test_type(params.test_type),
            if params.question_count == 1 { "" } else { "s" },
            params.difficulty
        ),
        format!("Topic: {}", params.topic.trim()),
        SUBJECT_INFERENCE_INSTRUCTIONS.to_string(),
        shape_section(params),
        format!("## NOTATION\n\n{}", domain.notation_guidance()),
        format!(
            "## REQUIRED FIELDS\n\nEvery question object MUST carry a \"subject\" field (the inferred subject) and a \"difficulty\" field (use \"{}\").",
            params.difficulty
        ),
        OUTPUT_RULES.to_string(),
    ];
    sections.join("\n\n")
}

fn describe_test_type(test_type: TestType) -> &'static str {
    match test_type {
        TestType::Mcq => "multiple-choice",
        TestType::Frq => "free-response",
        TestType::Full => "mixed-format",
    }
}

fn shape_section(params: &GenerationParams) -> String {
    match params.test_type {
        TestType::Mcq => format!(
            "## QUESTION FORMAT\n\nReturn a JSON array of exactly {} multiple-choice question objects, each with exactly four options labeled A-D:\n\n{}",
            params.question_count, MCQ_SHAPE
        ),
        TestType::Frq => format!(
            "## QUESTION FORMAT\n\nReturn a JSON array of exactly {} free-response question objects, each with a point-weighted rubric:\n\n{}",
            params.question_count, FRQ_SHAPE
        ),
        TestType::Full => {
            let (mcq_count, frq_count) = params.full_test_split();
            format!(
                "## QUESTION FORMAT\n\nThis is a full practice test. Return a JSON array of {} question objects: first {} multiple-choice questions, then {} free-response questions. Multiple-choice questions come first in the array.\n\nMultiple-choice question shape (four options labeled A-D):\n\n{}\n\nFree-response question shape:\n\n{}",
                params.question_count, mcq_count, frq_count, MCQ_SHAPE, FRQ_SHAPE
            )
        }
    }
}
