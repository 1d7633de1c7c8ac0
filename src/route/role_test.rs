use std::sync::Arc;

use poem::{http::StatusCode, test::TestClient};
use serde_json::json;
use sqlx::PgPool;

use crate::{
    factory::{employee::EmployeeFactory, role::RoleFactory},
    init_openapi_route,
    model::{
        employee::Employee,
        role::{Role, TABLE_NAME},
    },
    schema::role::RoleListResponse,
    settings::Config,
    AppState,
};

fn test_config() -> Config {
    Config {
        env: "test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 8000,
        prefix: Some("/api".to_string()),
        database_url: String::new(),
    }
}

#[sqlx::test]
async fn test_list_role_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState { db: pool });
    let mut role_factory = RoleFactory::new();
    let mut roles = role_factory.generate_many(&app_state.db, 3, ()).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli.get("/api/roles/").send().await;

    // Expect
    resp.assert_status_is_ok();
    roles.sort_by_key(|x| x.id);
    let results: Vec<RoleListResponse> = roles
        .into_iter()
        .map(|x| RoleListResponse {
            id: x.id,
            name: x.name,
        })
        .collect();
    resp.assert_json(results).await;
    Ok(())
}

#[sqlx::test]
async fn test_create_role_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState { db: pool });
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .post("/api/roles/")
        .body_json(&json!({
            "name": "Engineer"
        }))
        .send()
        .await;

    // Expect
    resp.assert_status(StatusCode::CREATED);
    let json = resp.json().await;
    let new_role_id = json.value().object().get_opt("id");
    assert!(new_role_id.is_some());
    let new_role_id: i32 = new_role_id.unwrap().deserialize();
    let new_role: Option<(String,)> = sqlx::query_as(
        format!(
            r#"
    SELECT name
    FROM {}
    WHERE id = $1"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(new_role_id)
    .fetch_optional(&app_state.db)
    .await?;
    assert!(new_role.is_some());
    assert_eq!(new_role.unwrap().0, "Engineer".to_string());
    Ok(())
}

#[sqlx::test]
async fn test_create_role_api_duplicate_name(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState { db: pool });
    let mut role_factory = RoleFactory::<String>::new();
    role_factory.modified_one(|data, ext| Role {
        id: data.id,
        name: ext,
    });
    role_factory
        .generate_one(&app_state.db, "Engineer".to_string())
        .await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .post("/api/roles/")
        .body_json(&json!({
            "name": "Engineer"
        }))
        .send()
        .await;

    // Expect
    resp.assert_status(StatusCode::BAD_REQUEST);
    let num_data: (i64,) =
        sqlx::query_as(format!(r#"SELECT COUNT(*) FROM {}"#, TABLE_NAME).as_str())
            .fetch_one(&app_state.db)
            .await?;
    assert_eq!(num_data.0, 1);
    Ok(())
}

#[sqlx::test]
async fn test_create_role_api_blank_name(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState { db: pool });
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .post("/api/roles/")
        .body_json(&json!({
            "name": ""
        }))
        .send()
        .await;

    // Expect
    resp.assert_status(StatusCode::BAD_REQUEST);
    let num_data: (i64,) =
        sqlx::query_as(format!(r#"SELECT COUNT(*) FROM {}"#, TABLE_NAME).as_str())
            .fetch_one(&app_state.db)
            .await?;
    assert_eq!(num_data.0, 0);
    Ok(())
}

#[sqlx::test]
async fn test_get_detail_role_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState { db: pool });
    let mut role_factory = RoleFactory::new();
    let role = role_factory.generate_one(&app_state.db, ()).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When 1
    let resp = cli.get(format!("/api/roles/{}/", role.id)).send().await;

    // Expect 1
    resp.assert_status_is_ok();
    resp.assert_json(&json!({
        "id": role.id,
        "name": role.name,
    }))
    .await;

    // When 2
    let resp = cli.get("/api/roles/999999/").send().await;

    // Expect 2
    resp.assert_status(StatusCode::NOT_FOUND);
    Ok(())
}

#[sqlx::test]
async fn test_update_role_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState { db: pool });
    let mut role_factory = RoleFactory::new();
    let role = role_factory.generate_one(&app_state.db, ()).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When 1
    let resp = cli
        .put(format!("/api/roles/{}/", role.id))
        .body_json(&json!({
            "name": "Manager"
        }))
        .send()
        .await;

    // Expect 1
    resp.assert_status_is_ok();
    let updated_role: Option<(String,)> = sqlx::query_as(
        format!(
            r#"
    SELECT name
    FROM {}
    WHERE id = $1"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(role.id)
    .fetch_optional(&app_state.db)
    .await?;
    assert!(updated_role.is_some());
    assert_eq!(updated_role.unwrap().0, "Manager".to_string());

    // When 2
    let resp = cli
        .put("/api/roles/999999/")
        .body_json(&json!({
            "name": "Manager"
        }))
        .send()
        .await;

    // Expect 2
    resp.assert_status(StatusCode::NOT_FOUND);
    Ok(())
}

#[sqlx::test]
async fn test_update_role_api_duplicate_name(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState { db: pool });
    let mut role_factory = RoleFactory::<String>::new();
    role_factory.modified_one(|data, ext| Role {
        id: data.id,
        name: ext,
    });
    let first = role_factory
        .generate_one(&app_state.db, "Engineer".to_string())
        .await?;
    role_factory
        .generate_one(&app_state.db, "Manager".to_string())
        .await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .put(format!("/api/roles/{}/", first.id))
        .body_json(&json!({
            "name": "Manager"
        }))
        .send()
        .await;

    // Expect
    resp.assert_status(StatusCode::BAD_REQUEST);
    let unchanged: (String,) = sqlx::query_as(
        format!(
            r#"
    SELECT name
    FROM {}
    WHERE id = $1"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(first.id)
    .fetch_one(&app_state.db)
    .await?;
    assert_eq!(unchanged.0, "Engineer".to_string());
    Ok(())
}

#[sqlx::test]
async fn test_delete_role_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState { db: pool });
    let mut role_factory = RoleFactory::new();
    let role = role_factory.generate_one(&app_state.db, ()).await?;
    let mut employee_factory = EmployeeFactory::<i32>::new();
    employee_factory.modified_many(|data, _, ext| Employee {
        id: data.id,
        name: data.name.clone(),
        role_id: ext,
        status: data.status,
    });
    employee_factory
        .generate_many(&app_state.db, 2, role.id)
        .await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When 1
    let resp = cli.delete(format!("/api/roles/{}/", role.id)).send().await;

    // Expect 1
    resp.assert_status(StatusCode::NO_CONTENT);
    let deleted_role: Option<(i32,)> = sqlx::query_as(
        format!(
            r#"
    SELECT id
    FROM {}
    WHERE id = $1"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(role.id)
    .fetch_optional(&app_state.db)
    .await?;
    assert!(deleted_role.is_none());
    // employees referencing the role are gone with it
    let num_employees: (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM public.employee"#)
        .fetch_one(&app_state.db)
        .await?;
    assert_eq!(num_employees.0, 0);

    // When 2
    let resp = cli.delete(format!("/api/roles/{}/", role.id)).send().await;

    // Expect 2
    resp.assert_status(StatusCode::NOT_FOUND);
    Ok(())
}
