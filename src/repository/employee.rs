use sqlx::{Postgres, Transaction};

use crate::{
    core::sqlx_utils::{binds_query_as, query_builder, SqlxBinds},
    model::employee::{Employee, TABLE_NAME},
};

pub async fn get_all_employee(
    tx: &mut Transaction<'_, Postgres>,
    search: Option<String>,
) -> anyhow::Result<Vec<Employee>> {
    let mut binds: Vec<SqlxBinds> = vec![];
    let mut filters: Vec<String> = vec![];

    if search.is_some() {
        binds.push(SqlxBinds::String(format!("%{}%", search.unwrap())));
        filters.push(format!("name ILIKE ${}", binds.len()));
    }

    let stmt = query_builder(
        None,
        TABLE_NAME,
        &filters,
        vec!["id ASC".to_string()],
        None,
        None,
    );
    let q = binds_query_as::<Employee>(&stmt, binds);
    let data = q.fetch_all(&mut **tx).await?;
    Ok(data)
}

pub async fn get_employee_by_id(
    tx: &mut Transaction<'_, Postgres>,
    id: i32,
) -> anyhow::Result<Option<Employee>> {
    let binds: Vec<SqlxBinds> = vec![SqlxBinds::Int(id)];
    let filters: Vec<String> = vec!["id = $1".to_string()];
    let stmt = query_builder(None, TABLE_NAME, &filters, vec![], None, None);
    let q = binds_query_as::<Employee>(&stmt, binds);
    let data = q.fetch_optional(&mut **tx).await?;
    Ok(data)
}

pub async fn create_employee(
    tx: &mut Transaction<'_, Postgres>,
    name: String,
    role_id: i32,
    status: bool,
) -> anyhow::Result<Employee> {
    let row: (i32,) = sqlx::query_as(
        format!(
            "INSERT INTO {} (name, role_id, status) VALUES ($1, $2, $3) RETURNING id",
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(&name)
    .bind(role_id)
    .bind(status)
    .fetch_one(&mut **tx)
    .await?;
    Ok(Employee {
        id: row.0,
        name,
        role_id,
        status,
    })
}

pub async fn update_employee(
    tx: &mut Transaction<'_, Postgres>,
    employee: &mut Employee,
    name: String,
    role_id: i32,
    status: bool,
) -> anyhow::Result<()> {
    employee.name = name;
    employee.role_id = role_id;
    employee.status = status;
    sqlx::query(
        format!(
            "UPDATE {} SET name = $1, role_id = $2, status = $3 WHERE id = $4",
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(&employee.name)
    .bind(employee.role_id)
    .bind(employee.status)
    .bind(employee.id)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

pub async fn delete_employee(
    tx: &mut Transaction<'_, Postgres>,
    employee: &Employee,
) -> anyhow::Result<()> {
    sqlx::query(format!("DELETE FROM {} WHERE id = $1", TABLE_NAME).as_str())
        .bind(employee.id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

pub async fn count_employee(tx: &mut Transaction<'_, Postgres>) -> anyhow::Result<i64> {
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
