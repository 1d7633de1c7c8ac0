use std::sync::Arc;

use poem::web::Data;
use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::{
    core::sqlx_utils::is_unique_violation,
    repository::role::{
        create_role, delete_role, get_all_role, get_role_by_id, get_role_by_name, update_role,
    },
    schema::{
        common::{
            BadRequestResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
        },
        role::{
            RoleCreateRequest, RoleCreateResponse, RoleCreateResponses, RoleDeleteMessageResponse,
            RoleDeleteResponses, RoleDetailResponses, RoleDetailSuccessResponse, RoleListResponse,
            RoleListResponses, RoleUpdateRequest, RoleUpdateResponse, RoleUpdateResponses,
        },
    },
    AppState,
};

#[derive(Tags)]
enum ApiRoleTags {
    Role,
}

pub struct ApiRole;

#[OpenApi]
impl ApiRole {
    #[oai(path = "/roles/", method = "get", tag = "ApiRoleTags::Role")]
    async fn list_role_api(&self, state: Data<&Arc<AppState>>) -> RoleListResponses {
        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return RoleListResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.role",
                        "list_role_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_all_role(&mut tx).await {
            Ok(val) => val,
            Err(err) => {
                return RoleListResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.role",
                        "list_role_api",
                        "get_all_role",
                        &err.to_string(),
                    ),
                ))
            }
        };

        RoleListResponses::Ok(Json(
            data.into_iter()
                .map(|x| RoleListResponse {
                    id: x.id,
                    name: x.name,
                })
                .collect(),
        ))
    }

    #[oai(path = "/roles/", method = "post", tag = "ApiRoleTags::Role")]
    async fn create_role_api(
        &self,
        Json(json): Json<RoleCreateRequest>,
        state: Data<&Arc<AppState>>,
    ) -> RoleCreateResponses {
        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return RoleCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.role",
                        "create_role_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        if json.name.is_empty() {
            return RoleCreateResponses::BadRequest(Json(BadRequestResponse {
                message: "name may not be blank".to_string(),
            }));
        }
        if json.name.chars().count() > 100 {
            return RoleCreateResponses::BadRequest(Json(BadRequestResponse {
                message: "name may not be longer than 100 characters".to_string(),
            }));
        }

        let existing = match get_role_by_name(&mut tx, &json.name).await {
            Ok(val) => val,
            Err(err) => {
                return RoleCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.role",
                        "create_role_api",
                        "get_role_by_name",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if existing.is_some() {
            return RoleCreateResponses::BadRequest(Json(BadRequestResponse {
                message: format!("role with name = {} already exists", json.name),
            }));
        }

        let new_role = match create_role(&mut tx, json.name).await {
            Ok(val) => val,
            Err(err) => {
                if is_unique_violation(&err) {
                    return RoleCreateResponses::Conflict(Json(ConflictResponse {
                        message: "role with this name was created concurrently".to_string(),
                    }));
                }
                return RoleCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.role",
                        "create_role_api",
                        "create_role",
                        &err.to_string(),
                    ),
                ));
            }
        };
        if let Err(err) = tx.commit().await {
            return RoleCreateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.role",
                    "create_role_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        RoleCreateResponses::Created(Json(RoleCreateResponse {
            id: new_role.id,
            name: new_role.name,
        }))
    }

    #[oai(path = "/roles/:id/", method = "get", tag = "ApiRoleTags::Role")]
    async fn get_detail_role_api(
        &self,
        Path(id): Path<i32>,
        state: Data<&Arc<AppState>>,
    ) -> RoleDetailResponses {
        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return RoleDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.role",
                        "get_detail_role_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_role_by_id(&mut tx, id).await {
            Ok(val) => val,
            Err(err) => {
                return RoleDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.role",
                        "get_detail_role_api",
                        "get_role_by_id",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if data.is_none() {
            return RoleDetailResponses::NotFound(Json(NotFoundResponse {
                message: format!("role with id = {} not found", id),
            }));
        }
        let data = data.unwrap();
        RoleDetailResponses::Ok(Json(RoleDetailSuccessResponse {
            id: data.id,
            name: data.name,
        }))
    }

    #[oai(path = "/roles/:id/", method = "put", tag = "ApiRoleTags::Role")]
    async fn update_role_api(
        &self,
        Path(id): Path<i32>,
        Json(json): Json<RoleUpdateRequest>,
        state: Data<&Arc<AppState>>,
    ) -> RoleUpdateResponses {
        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return RoleUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.role",
                        "update_role_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_role_by_id(&mut tx, id).await {
            Ok(val) => val,
            Err(err) => {
                return RoleUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.role",
                        "update_role_api",
                        "get_role_by_id",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if data.is_none() {
            return RoleUpdateResponses::NotFound(Json(NotFoundResponse {
                message: format!("role with id = {} not found", id),
            }));
        }
        let mut data = data.unwrap();

        if json.name.is_empty() {
            return RoleUpdateResponses::BadRequest(Json(BadRequestResponse {
                message: "name may not be blank".to_string(),
            }));
        }
        if json.name.chars().count() > 100 {
            return RoleUpdateResponses::BadRequest(Json(BadRequestResponse {
                message: "name may not be longer than 100 characters".to_string(),
            }));
        }

        let existing = match get_role_by_name(&mut tx, &json.name).await {
            Ok(val) => val,
            Err(err) => {
                return RoleUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.role",
                        "update_role_api",
                        "get_role_by_name",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if let Some(existing) = existing {
            if existing.id != data.id {
                return RoleUpdateResponses::BadRequest(Json(BadRequestResponse {
                    message: format!("role with name = {} already exists", json.name),
                }));
            }
        }

        if let Err(err) = update_role(&mut tx, &mut data, json.name).await {
            if is_unique_violation(&err) {
                return RoleUpdateResponses::Conflict(Json(ConflictResponse {
                    message: "role with this name was created concurrently".to_string(),
                }));
            }
            return RoleUpdateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.role",
                    "update_role_api",
                    "update_role",
                    &err.to_string(),
                ),
            ));
        }

        if let Err(err) = tx.commit().await {
            return RoleUpdateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.role",
                    "update_role_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        RoleUpdateResponses::Ok(Json(RoleUpdateResponse {
            id: data.id,
            name: data.name,
        }))
    }

    #[oai(path = "/roles/:id/", method = "delete", tag = "ApiRoleTags::Role")]
    async fn delete_role_api(
        &self,
        Path(id): Path<i32>,
        state: Data<&Arc<AppState>>,
    ) -> RoleDeleteResponses {
        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return RoleDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.role",
                        "delete_role_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_role_by_id(&mut tx, id).await {
            Ok(val) => val,
            Err(err) => {
                return RoleDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.role",
                        "delete_role_api",
                        "get_role_by_id",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if data.is_none() {
            return RoleDeleteResponses::NotFound(Json(NotFoundResponse {
                message: format!("role with id = {} not found", id),
            }));
        }
        let data = data.unwrap();

        if let Err(err) = delete_role(&mut tx, &data).await {
            return RoleDeleteResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.role",
                    "delete_role_api",
                    "delete_role",
                    &err.to_string(),
                ),
            ));
        }

        if let Err(err) = tx.commit().await {
            return RoleDeleteResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.role",
                    "delete_role_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        RoleDeleteResponses::NoContent(Json(RoleDeleteMessageResponse {
            message: "Role successfully deleted".to_string(),
        }))
    }
}
