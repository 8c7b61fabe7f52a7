use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::SubmitResultsRequest,
        response::{HistoryResponse, MessageResponse, QuizRecordResponse, StatisticsResponse},
    },
};

#[get("/history")]
async fn get_history(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let history = state.quiz_service.list_history().await?;
    Ok(HttpResponse::Ok().json(HistoryResponse {
        success: true,
        history,
    }))
}

#[get("/history/{id}")]
async fn get_quiz_by_id(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(QuizRecordResponse {
        success: true,
        quiz,
    }))
}

#[delete("/history/{id}")]
async fn delete_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.quiz_service.delete_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        success: true,
        message: format!("Quiz '{}' deleted", id),
    }))
}

#[post("/history/{id}/results")]
async fn submit_results(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SubmitResultsRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .submit_results(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(QuizRecordResponse {
        success: true,
        quiz,
    }))
}

#[get("/statistics")]
async fn get_statistics(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let statistics = state.quiz_service.statistics().await?;
    Ok(HttpResponse::Ok().json(StatisticsResponse {
        success: true,
        statistics,
    }))
}
