use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{request::GenerateQuestionsRequest, response::GenerateQuestionsResponse},
};

#[post("/api/generate-questions")]
pub async fn generate_questions(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateQuestionsRequest>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_default();
    log::info!(
        "[{}] generate-questions type={} count={}",
        request_id,
        request.test_type,
        request.question_count
    );

    let batch = state
        .question_pipeline
        .generate(request.into_inner())
        .await
        .inspect_err(|e| log::warn!("[{}] generation failed: {}", request_id, e))?;
    log::info!(
        "[{}] returning {} question(s), {} degraded",
        request_id,
        batch.questions.len(),
        batch.degraded_count()
    );

    let response =
        GenerateQuestionsResponse::from_batch(batch, state.config.surface_validation_issues);
    Ok(HttpResponse::Ok().json(response))
}
