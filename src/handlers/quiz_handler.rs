use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{EvaluateAnswerRequest, GenerateQuizRequest, RegenerateQuizRequest},
        response::{EvaluateAnswerResponse, GenerateQuizResponse},
    },
};

#[post("/generate-quiz")]
async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let preferences = request.preferences.resolve()?;

    let record = state
        .quiz_service
        .generate_quiz(request.text, request.segments, preferences)
        .await?;

    Ok(HttpResponse::Ok().json(GenerateQuizResponse::from(record)))
}

#[post("/regenerate")]
async fn regenerate_quiz(
    state: web::Data<AppState>,
    request: web::Json<RegenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz_id = request.into_inner().quiz_id.unwrap_or_default();
    let record = state.quiz_service.regenerate_quiz(&quiz_id).await?;

    Ok(HttpResponse::Ok().json(GenerateQuizResponse::from(record)))
}

#[post("/evaluate-answer")]
async fn evaluate_answer(
    state: web::Data<AppState>,
    request: web::Json<EvaluateAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let evaluation = state
        .evaluator
        .evaluate(&request.user_answer, &request.model_answer, &request.keywords)
        .await;

    Ok(HttpResponse::Ok().json(EvaluateAnswerResponse {
        success: true,
        evaluation,
    }))
}
