pub mod candidate_extractor;
pub mod escape_repairer;
pub mod generation_gateway;
pub mod prompt_synthesizer;
pub mod question_normalizer;
pub mod question_pipeline;
pub mod retrying_gateway;
pub mod single_flight;
pub mod structural_parser;
