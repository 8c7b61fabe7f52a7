use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::UploadNotesRequest,
        response::{raw_text_preview, UploadNotesResponse},
    },
};

#[post("/upload-notes")]
async fn upload_notes(
    state: web::Data<AppState>,
    request: web::Json<UploadNotesRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let processed = state.document_service.process_notes(&request.text)?;

    Ok(HttpResponse::Ok().json(UploadNotesResponse {
        success: true,
        raw_text: raw_text_preview(&request.text),
        segments: processed.segments,
        topics: processed.topics,
        word_count: processed.word_count,
        key_concepts: processed.key_concepts,
    }))
}
