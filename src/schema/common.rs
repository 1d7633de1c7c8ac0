use poem_openapi::Object;
use serde::{Deserialize, Serialize};

#[derive(Object, Deserialize, Serialize)]
pub struct BadRequestResponse {
    pub message: String,
}

#[derive(Object, Deserialize, Serialize)]
pub struct NotFoundResponse {
    pub message: String,
}

#[derive(Object, Deserialize, Serialize)]
pub struct ConflictResponse {
    pub message: String,
}

#[derive(Object, Deserialize, Serialize)]
pub struct InternalServerErrorResponse {
    pub message: String,
}

impl InternalServerErrorResponse {
    // the caller only sees a generic message, the cause goes to the log
    pub fn new(module: &str, function: &str, step: &str, error: &str) -> Self {
        tracing::error!("error on {} {} when {}: {}", module, function, step, error);
        Self {
            message: "internal server error".to_string(),
        }
    }
}
