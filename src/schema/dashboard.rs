use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use super::common::InternalServerErrorResponse;

#[derive(Object, Deserialize, Serialize)]
pub struct DashboardStatisticsResponse {
    pub total_employees: i64,
    pub total_roles: i64,
}

#[derive(ApiResponse)]
pub enum DashboardStatisticsResponses {
    #[oai(status = 200)]
    Ok(Json<DashboardStatisticsResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}
