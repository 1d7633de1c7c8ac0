use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use super::common::{
    BadRequestResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
};

#[derive(Object, Deserialize, Serialize)]
pub struct EmployeeListResponse {
    pub id: i32,
    pub name: String,
    pub role: i32,
    pub status: bool,
}

#[derive(ApiResponse)]
pub enum EmployeeListResponses {
    #[oai(status = 200)]
    Ok(Json<Vec<EmployeeListResponse>>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

/// `role` is a role name, resolved (or created) server side.
#[derive(Object, Deserialize)]
pub struct EmployeeCreateRequest {
    pub name: String,
    pub role: String,
    pub status: Option<bool>,
}

#[derive(Object, Deserialize)]
pub struct EmployeeCreateResponse {
    pub id: i32,
    pub name: String,
    pub role: i32,
    pub status: bool,
}

#[derive(ApiResponse)]
pub enum EmployeeCreateResponses {
    #[oai(status = 201)]
    Created(Json<EmployeeCreateResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 409)]
    Conflict(Json<ConflictResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Deserialize)]
pub struct EmployeeDetailSuccessResponse {
    pub id: i32,
    pub name: String,
    pub role: i32,
    pub status: bool,
}

#[derive(ApiResponse)]
pub enum EmployeeDetailResponses {
    #[oai(status = 200)]
    Ok(Json<EmployeeDetailSuccessResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Deserialize)]
pub struct EmployeeUpdateRequest {
    pub name: String,
    pub role: String,
    pub status: Option<bool>,
}

#[derive(Object, Deserialize)]
pub struct EmployeeUpdateResponse {
    pub id: i32,
    pub name: String,
    pub role: i32,
    pub status: bool,
}

#[derive(ApiResponse)]
pub enum EmployeeUpdateResponses {
    #[oai(status = 200)]
    Ok(Json<EmployeeUpdateResponse>),

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
pub struct EmployeeDeleteMessageResponse {
    pub message: String,
}

#[derive(ApiResponse)]
pub enum EmployeeDeleteResponses {
    // the original API ships a confirmation body with the 204
    #[oai(status = 204)]
    NoContent(Json<EmployeeDeleteMessageResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}
