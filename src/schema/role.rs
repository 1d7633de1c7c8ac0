use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use super::common::{
    BadRequestResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
};

#[derive(Object, Deserialize, Serialize)]
pub struct RoleListResponse {
    pub id: i32,
    pub name: String,
}

#[derive(ApiResponse)]
pub enum RoleListResponses {
    #[oai(status = 200)]
    Ok(Json<Vec<RoleListResponse>>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Deserialize)]
pub struct RoleCreateRequest {
    pub name: String,
}

#[derive(Object, Deserialize)]
pub struct RoleCreateResponse {
    pub id: i32,
    pub name: String,
}

#[derive(ApiResponse)]
pub enum RoleCreateResponses {
    #[oai(status = 201)]
    Created(Json<RoleCreateResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 409)]
    Conflict(Json<ConflictResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Deserialize)]
pub struct RoleDetailSuccessResponse {
    pub id: i32,
    pub name: String,
}

#[derive(ApiResponse)]
pub enum RoleDetailResponses {
    #[oai(status = 200)]
    Ok(Json<RoleDetailSuccessResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Deserialize)]
pub struct RoleUpdateRequest {
    pub name: String,
}

#[derive(Object, Deserialize)]
pub struct RoleUpdateResponse {
    pub id: i32,
    pub name: String,
}

#[derive(ApiResponse)]
pub enum RoleUpdateResponses {
    #[oai(status = 200)]
    Ok(Json<RoleUpdateResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 409)]
    Conflict(Json<ConflictResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Deserialize)]
pub struct RoleDeleteMessageResponse {
    pub message: String,
}

#[derive(ApiResponse)]
pub enum RoleDeleteResponses {
    // the original API ships a confirmation body with the 204
    #[oai(status = 204)]
    NoContent(Json<RoleDeleteMessageResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}
