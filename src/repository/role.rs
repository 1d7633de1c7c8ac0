use sqlx::{Postgres, Transaction};

use crate::{
    core::sqlx_utils::{binds_query_as, query_builder, SqlxBinds},
    model::role::{Role, TABLE_NAME},
};

pub async fn get_all_role(tx: &mut Transaction<'_, Postgres>) -> anyhow::Result<Vec<Role>> {
    let stmt = query_builder(
        None,
        TABLE_NAME,
        &[],
        vec!["id ASC".to_string()],
        None,
        None,
    );
    let q = binds_query_as::<Role>(&stmt, vec![]);
    let data = q.fetch_all(&mut **tx).await?;
    Ok(data)
}

pub async fn get_role_by_id(
    tx: &mut Transaction<'_, Postgres>,
    id: i32,
) -> anyhow::Result<Option<Role>> {
    let binds: Vec<SqlxBinds> = vec![SqlxBinds::Int(id)];
    let filters: Vec<String> = vec!["id = $1".to_string()];
    let stmt = query_builder(None, TABLE_NAME, &filters, vec![], None, None);
    let q = binds_query_as::<Role>(&stmt, binds);
    let data = q.fetch_optional(&mut **tx).await?;
    Ok(data)
}

pub async fn get_role_by_name(
    tx: &mut Transaction<'_, Postgres>,
    name: &str,
) -> anyhow::Result<Option<Role>> {
    let binds: Vec<SqlxBinds> = vec![SqlxBinds::String(name.to_string())];
    let filters: Vec<String> = vec!["name = $1".to_string()];
    let stmt = query_builder(None, TABLE_NAME, &filters, vec![], None, None);
    let q = binds_query_as::<Role>(&stmt, binds);
    let data = q.fetch_optional(&mut **tx).await?;
    Ok(data)
}

pub async fn create_role(
    tx: &mut Transaction<'_, Postgres>,
    name: String,
) -> anyhow::Result<Role> {
    let row: (i32,) = sqlx::query_as(
        format!("INSERT INTO {} (name) VALUES ($1) RETURNING id", TABLE_NAME).as_str(),
    )
    .bind(&name)
    .fetch_one(&mut **tx)
    .await?;
    Ok(Role { id: row.0, name })
}

pub async fn update_role(
    tx: &mut Transaction<'_, Postgres>,
    role: &mut Role,
    name: String,
) -> anyhow::Result<()> {
    role.name = name;
    sqlx::query(format!("UPDATE {} SET name = $1 WHERE id = $2", TABLE_NAME).as_str())
        .bind(&role.name)
        .bind(role.id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

// referencing employees go with it (ON DELETE CASCADE)
pub async fn delete_role(tx: &mut Transaction<'_, Postgres>, role: &Role) -> anyhow::Result<()> {
    sqlx::query(format!("DELETE FROM {} WHERE id = $1", TABLE_NAME).as_str())
        .bind(role.id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

pub async fn count_role(tx: &mut Transaction<'_, Postgres>) -> anyhow::Result<i64> {
    let stmt = query_builder(
        Some("count(id)".to_string()),
        TABLE_NAME,
        &[],
        vec![],
        None,
        None,
    );
    let q = binds_query_as::<(i64,)>(&stmt, vec![]);
    let count = q.fetch_one(&mut **tx).await?;
    Ok(count.0)
}

/// Looks the role up by exact name and inserts it when absent.
///
/// Lookup and insert are separate statements, so two concurrent callers may
/// both reach the insert; the unique index on name decides the race and the
/// loser gets a unique-violation error (detect with `is_unique_violation`).
pub async fn find_or_create_role_by_name(
    tx: &mut Transaction<'_, Postgres>,
    name: &str,
) -> anyhow::Result<Role> {
    if let Some(role) = get_role_by_name(tx, name).await? {
        return Ok(role);
    }
    create_role(tx, name.to_string()).await
}
