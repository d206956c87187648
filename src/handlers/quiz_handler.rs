use actix_web::{get, post, web, HttpRequest, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::request::GenerateQuizRequest,
    services::normalize_topic,
};

#[post("/api/v1/quizzes/generate")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let topic = normalize_topic(request.trimmed_topic());
    log::info!(
        "Quiz generation requested for '{}' as '{}' [{}]",
        request.trimmed_topic(),
        topic,
        get_request_id(&req).unwrap_or_default()
    );

    let quiz = state
        .quiz_service
        .generate_quiz(&topic, request.difficulty, request.num_questions)
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[get("/api/v1/quizzes/{quiz_id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let quiz_id = quiz_id.into_inner();
    let quiz = state
        .quiz_service
        .get_quiz(&quiz_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))?;

    Ok(HttpResponse::Ok().json(quiz))
}
