pub const QUESTION_GENERATOR_SYSTEM_PROMPT: &str = "You are an expert exam question writer for standardized and course exams (AP, SAT, college level). You write original, accurate, exam-realistic questions. You always reply with a single JSON array of question objects and nothing else: no prose, no markdown headings, no commentary.";

pub const SUBJECT_INFERENCE_INSTRUCTIONS: &str = "## SUBJECT

The topic below is free text written by a student. Infer the exam subject (for example \"AP Biology\", \"AP Calculus BC\", \"SAT Math\", \"AP US History\") from it and use that subject name for the \"subject\" field of every question. Every question must stay within that subject.";

pub const MCQ_SHAPE: &str = r#"{
  "type": "mcq",
  "content": string (the full question stem),
  "options": [
    { "label": "A", "text": string },
    { "label": "B", "text": string },
    { "label": "C", "text": string },
    { "label": "D", "text": string }
  ],
  "correctAnswer": "A" | "B" | "C" | "D" (exactly one letter),
  "explanation": string (why the correct option is right and the others are wrong),
  "subject": string,
  "difficulty": string
}"#;

pub const FRQ_SHAPE: &str = r#"{
  "type": "frq",
  "content": string (the full prompt, including any scenario or data),
  "rubric": {
    "points": integer (total points, at least 1),
    "criteria": [string, ...] (one entry per scoring point, in order)
  },
  "sampleResponse": string (a full-credit answer),
  "subject": string,
  "difficulty": string
}"#;

pub const QUANTITATIVE_NOTATION: &str = "Write all mathematics in LaTeX. Use \\\\( ... \\\\) for inline math and \\\\[ ... \\\\] for display math. Inside JSON strings every backslash must be doubled, so write \\\\frac, \\\\int, \\\\sqrt and never a single backslash.";

pub const PROGRAMMING_NOTATION: &str = "Put every code snippet in a fenced code block (```language ... ```) inside the string, using \\n for line breaks. Escape double quotes inside code as \\\" and double every backslash.";

pub const HUMANITIES_NOTATION: &str = "Write in clear academic prose. When a question relies on a primary or secondary source, quote the excerpt in the question and cite it in parentheses (author, work, year). Do not use LaTeX or code blocks.";

pub const OUTPUT_RULES: &str = "## OUTPUT RULES

- Return ONLY the JSON array, starting with [ and ending with ].
- Every question object MUST include the \"subject\" and \"difficulty\" fields.
- Use the exact field names shown above; do not add or rename fields.
- Questions must be distinct from each other; vary the skills and sub-topics tested.
- The JSON must be valid and parseable without any preprocessing.";
