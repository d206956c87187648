pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

use crate::errors::AppError;

pub use health_handler::health_check;
pub use quiz_handler::{generate_quiz, get_quiz};

/// Registers every route plus the extractor configs that turn malformed JSON
/// bodies and path ids into 422 responses.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected request body: {}", err);
        AppError::InvalidInput(err.to_string()).into()
    });
    let path_config = web::PathConfig::default()
        .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into());

    cfg.app_data(json_config)
        .app_data(path_config)
        .service(health_check)
        .service(generate_quiz)
        .service(get_quiz);
}
