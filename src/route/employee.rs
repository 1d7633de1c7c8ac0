use std::sync::Arc;

use poem::web::Data;
use poem_openapi::{
    param::{Path, Query},
    payload::Json,
    OpenApi, Tags,
};

use crate::{
    core::sqlx_utils::is_unique_violation,
    repository::{
        employee::{
            create_employee, delete_employee, get_all_employee, get_employee_by_id,
            update_employee,
        },
        role::find_or_create_role_by_name,
    },
    schema::{
        common::{
            BadRequestResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
        },
        employee::{
            EmployeeCreateRequest, EmployeeCreateResponse, EmployeeCreateResponses,
            EmployeeDeleteMessageResponse, EmployeeDeleteResponses, EmployeeDetailResponses,
            EmployeeDetailSuccessResponse, EmployeeListResponse, EmployeeListResponses,
            EmployeeUpdateRequest, EmployeeUpdateResponse, EmployeeUpdateResponses,
        },
    },
    AppState,
};

#[derive(Tags)]
enum ApiEmployeeTags {
    Employee,
}

pub struct ApiEmployee;

#[OpenApi]
impl ApiEmployee {
    #[oai(path = "/employees/", method = "get", tag = "ApiEmployeeTags::Employee")]
    async fn list_employee_api(
        &self,
        Query(search): Query<Option<String>>,
        state: Data<&Arc<AppState>>,
    ) -> EmployeeListResponses {
        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return EmployeeListResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.employee",
                        "list_employee_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_all_employee(&mut tx, search).await {
            Ok(val) => val,
            Err(err) => {
                return EmployeeListResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.employee",
                        "list_employee_api",
                        "get_all_employee",
                        &err.to_string(),
                    ),
                ))
            }
        };

        EmployeeListResponses::Ok(Json(
            data.into_iter()
                .map(|x| EmployeeListResponse {
                    id: x.id,
                    name: x.name,
                    role: x.role_id,
                    status: x.status,
                })
                .collect(),
        ))
    }

    #[oai(path = "/employees/", method = "post", tag = "ApiEmployeeTags::Employee")]
    async fn create_employee_api(
        &self,
        Json(json): Json<EmployeeCreateRequest>,
        state: Data<&Arc<AppState>>,
    ) -> EmployeeCreateResponses {
        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return EmployeeCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.employee",
                        "create_employee_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        if json.name.is_empty() {
            return EmployeeCreateResponses::BadRequest(Json(BadRequestResponse {
                message: "name may not be blank".to_string(),
            }));
        }
        if json.name.chars().count() > 100 {
            return EmployeeCreateResponses::BadRequest(Json(BadRequestResponse {
                message: "name may not be longer than 100 characters".to_string(),
            }));
        }
        // a role name that fails validation fails the whole create
        if json.role.is_empty() {
            return EmployeeCreateResponses::BadRequest(Json(BadRequestResponse {
                message: "role may not be blank".to_string(),
            }));
        }
        if json.role.chars().count() > 100 {
            return EmployeeCreateResponses::BadRequest(Json(BadRequestResponse {
                message: "role may not be longer than 100 characters".to_string(),
            }));
        }

        // Resolve the role name before touching the employee
        let role = match find_or_create_role_by_name(&mut tx, &json.role).await {
            Ok(val) => val,
            Err(err) => {
                if is_unique_violation(&err) {
                    return EmployeeCreateResponses::Conflict(Json(ConflictResponse {
                        message: format!(
                            "role with name = {} was created concurrently",
                            json.role
                        ),
                    }));
                }
                return EmployeeCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.employee",
                        "create_employee_api",
                        "find_or_create_role_by_name",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let new_employee =
            match create_employee(&mut tx, json.name, role.id, json.status.unwrap_or(true)).await {
                Ok(val) => val,
                Err(err) => {
                    return EmployeeCreateResponses::InternalServerError(Json(
                        InternalServerErrorResponse::new(
                            "route.employee",
                            "create_employee_api",
                            "create_employee",
                            &err.to_string(),
                        ),
                    ))
                }
            };
        if let Err(err) = tx.commit().await {
            return EmployeeCreateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.employee",
                    "create_employee_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        EmployeeCreateResponses::Created(Json(EmployeeCreateResponse {
            id: new_employee.id,
            name: new_employee.name,
            role: new_employee.role_id,
            status: new_employee.status,
        }))
    }

    #[oai(path = "/employees/:id/", method = "get", tag = "ApiEmployeeTags::Employee")]
    async fn get_detail_employee_api(
        &self,
        Path(id): Path<i32>,
        state: Data<&Arc<AppState>>,
    ) -> EmployeeDetailResponses {
        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return EmployeeDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.employee",
                        "get_detail_employee_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_employee_by_id(&mut tx, id).await {
            Ok(val) => val,
            Err(err) => {
                return EmployeeDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.employee",
                        "get_detail_employee_api",
                        "get_employee_by_id",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if data.is_none() {
            return EmployeeDetailResponses::NotFound(Json(NotFoundResponse {
                message: format!("employee with id = {} not found", id),
            }));
        }
        let data = data.unwrap();
        EmployeeDetailResponses::Ok(Json(EmployeeDetailSuccessResponse {
            id: data.id,
            name: data.name,
            role: data.role_id,
            status: data.status,
        }))
    }

    #[oai(path = "/employees/:id/", method = "put", tag = "ApiEmployeeTags::Employee")]
    async fn update_employee_api(
        &self,
        Path(id): Path<i32>,
        Json(json): Json<EmployeeUpdateRequest>,
        state: Data<&Arc<AppState>>,
    ) -> EmployeeUpdateResponses {
        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return EmployeeUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.employee",
                        "update_employee_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_employee_by_id(&mut tx, id).await {
            Ok(val) => val,
            Err(err) => {
                return EmployeeUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.employee",
                        "update_employee_api",
                        "get_employee_by_id",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if data.is_none() {
            return EmployeeUpdateResponses::NotFound(Json(NotFoundResponse {
                message: format!("employee with id = {} not found", id),
            }));
        }
        let mut data = data.unwrap();

        if json.name.is_empty() {
            return EmployeeUpdateResponses::BadRequest(Json(BadRequestResponse {
                message: "name may not be blank".to_string(),
            }));
        }
        if json.name.chars().count() > 100 {
            return EmployeeUpdateResponses::BadRequest(Json(BadRequestResponse {
                message: "name may not be longer than 100 characters".to_string(),
            }));
        }
        // a role name that fails validation fails the whole update
        if json.role.is_empty() {
            return EmployeeUpdateResponses::BadRequest(Json(BadRequestResponse {
                message: "role may not be blank".to_string(),
            }));
        }
        if json.role.chars().count() > 100 {
            return EmployeeUpdateResponses::BadRequest(Json(BadRequestResponse {
                message: "role may not be longer than 100 characters".to_string(),
            }));
        }

        let role = match find_or_create_role_by_name(&mut tx, &json.role).await {
            Ok(val) => val,
            Err(err) => {
                if is_unique_violation(&err) {
                    return EmployeeUpdateResponses::Conflict(Json(ConflictResponse {
                        message: format!(
                            "role with name = {} was created concurrently",
                            json.role
                        ),
                    }));
                }
                return EmployeeUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.employee",
                        "update_employee_api",
                        "find_or_create_role_by_name",
                        &err.to_string(),
                    ),
                ));
            }
        };

        if let Err(err) = update_employee(
            &mut tx,
            &mut data,
            json.name,
            role.id,
            json.status.unwrap_or(true),
        )
        .await
        {
            return EmployeeUpdateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.employee",
                    "update_employee_api",
                    "update_employee",
                    &err.to_string(),
                ),
            ));
        }

        if let Err(err) = tx.commit().await {
            return EmployeeUpdateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.employee",
                    "update_employee_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        EmployeeUpdateResponses::Ok(Json(EmployeeUpdateResponse {
            id: data.id,
            name: data.name,
            role: data.role_id,
            status: data.status,
        }))
    }

    #[oai(path = "/employees/:id/", method = "delete", tag = "ApiEmployeeTags::Employee")]
    async fn delete_employee_api(
        &self,
        Path(id): Path<i32>,
        state: Data<&Arc<AppState>>,
    ) -> EmployeeDeleteResponses {
        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return EmployeeDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.employee",
                        "delete_employee_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_employee_by_id(&mut tx, id).await {
            Ok(val) => val,
            Err(err) => {
                return EmployeeDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.employee",
                        "delete_employee_api",
                        "get_employee_by_id",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if data.is_none() {
            return EmployeeDeleteResponses::NotFound(Json(NotFoundResponse {
                message: format!("employee with id = {} not found", id),
            }));
        }
        let data = data.unwrap();

        if let Err(err) = delete_employee(&mut tx, &data).await {
            return EmployeeDeleteResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.employee",
                    "delete_employee_api",
                    "delete_employee",
                    &err.to_string(),
                ),
            ));
        }

        if let Err(err) = tx.commit().await {
            return EmployeeDeleteResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.employee",
                    "delete_employee_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        EmployeeDeleteResponses::NoContent(Json(EmployeeDeleteMessageResponse {
            message: "Employee successfully deleted".to_string(),
        }))
    }
}
