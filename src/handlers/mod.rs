pub mod health_handler;
pub mod history_handler;
pub mod notes_handler;
pub mod quiz_handler;

use actix_web::web;

pub use health_handler::health_check;
pub use history_handler::{delete_quiz, get_history, get_quiz_by_id, get_statistics, submit_results};
pub use notes_handler::upload_notes;
pub use quiz_handler::{evaluate_answer, generate_quiz, regenerate_quiz};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(upload_notes)
        .service(generate_quiz)
        .service(regenerate_quiz)
        .service(evaluate_answer)
        .service(get_history)
        .service(get_quiz_by_id)
        .service(delete_quiz)
        .service(submit_results)
        .service(get_statistics);
}
