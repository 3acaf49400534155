pub mod health_handler;
pub mod question_handler;

use actix_web::web;

use crate::errors::AppError;

pub use health_handler::{health_check, health_check_live};
pub use question_handler::generate_questions;

/// Rejects undecodable request bodies with the standard error payload.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::InputValidationError(format!("invalid request body: {}", err)).into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(health_check)
        .service(health_check_live)
        .service(generate_questions);
}
