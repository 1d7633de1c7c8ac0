use std::sync::Arc;

use poem::web::Data;
use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::{
    repository::{employee::count_employee, role::count_role},
    schema::{
        common::InternalServerErrorResponse,
        dashboard::{DashboardStatisticsResponse, DashboardStatisticsResponses},
    },
    AppState,
};

#[derive(Tags)]
enum ApiDashboardTags {
    Dashboard,
}

pub struct ApiDashboard;

#[OpenApi]
impl ApiDashboard {
    #[oai(
        path = "/admin/dashboard/",
        method = "get",
        tag = "ApiDashboardTags::Dashboard"
    )]
    async fn dashboard_statistics_api(
        &self,
        state: Data<&Arc<AppState>>,
    ) -> DashboardStatisticsResponses {
        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return DashboardStatisticsResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.dashboard",
                        "dashboard_statistics_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let total_employees = match count_employee(&mut tx).await {
            Ok(val) => val,
            Err(err) => {
                return DashboardStatisticsResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.dashboard",
                        "dashboard_statistics_api",
                        "count_employee",
                        &err.to_string(),
                    ),
                ))
            }
        };
        let total_roles = match count_role(&mut tx).await {
            Ok(val) => val,
            Err(err) => {
                return DashboardStatisticsResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.dashboard",
                        "dashboard_statistics_api",
                        "count_role",
                        &err.to_string(),
                    ),
                ))
            }
        };

        DashboardStatisticsResponses::Ok(Json(DashboardStatisticsResponse {
            total_employees,
            total_roles,
        }))
    }
}
