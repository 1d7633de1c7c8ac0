use std::sync::Arc;

use poem::test::TestClient;
use serde_json::json;
use sqlx::PgPool;

use crate::{
    factory::{employee::EmployeeFactory, role::RoleFactory},
    init_openapi_route,
    model::employee::Employee,
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
async fn test_dashboard_statistics_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState { db: pool });
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When 1
    let resp = cli.get("/api/admin/dashboard/").send().await;

    // Expect 1
    resp.assert_status_is_ok();
    resp.assert_json(&json!({
        "total_employees": 0,
        "total_roles": 0,
    }))
    .await;

    // When 2
    let mut role_factory = RoleFactory::new();
    let roles = role_factory.generate_many(&app_state.db, 2, ()).await?;
    let mut employee_factory = EmployeeFactory::<i32>::new();
    employee_factory.modified_many(|data, _, ext| Employee {
        id: data.id,
        name: data.name.clone(),
        role_id: ext,
        status: data.status,
    });
    employee_factory
        .generate_many(&app_state.db, 3, roles[0].id)
        .await?;
    let resp = cli.get("/api/admin/dashboard/").send().await;

    // Expect 2
    resp.assert_status_is_ok();
    resp.assert_json(&json!({
        "total_employees": 3,
        "total_roles": 2,
    }))
    .await;
    Ok(())
}
