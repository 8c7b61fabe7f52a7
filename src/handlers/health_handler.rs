use actix_web::{get, HttpResponse};

use crate::models::dto::response::HealthResponse;

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        message: "Notes-to-Quiz API is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}
