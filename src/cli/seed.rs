use anyhow::bail;
use sqlx::PgPool;

use crate::{
    factory::{employee::EmployeeFactory, role::RoleFactory},
    model::{employee::Employee, role::Role},
};

/// Load demo rows: `roles` roles named role_1..role_N and `employees`
/// employees spread over them round robin.
pub async fn seed(pool: &PgPool, roles: u32, employees: u32) -> anyhow::Result<()> {
    if roles == 0 && employees > 0 {
        bail!("cannot seed employees without roles");
    }

    let mut role_factory = RoleFactory::new();
    role_factory.modified_many(|data, idx, _| Role {
        id: data.id,
        name: format!("role_{}", idx + 1),
    });
    let roles = role_factory.generate_many(pool, roles, ()).await?;
    println!("seeded {} roles", roles.len());

    let role_ids: Vec<i32> = roles.iter().map(|x| x.id).collect();
    let mut employee_factory = EmployeeFactory::<Vec<i32>>::new();
    employee_factory.modified_many(|data, idx, ext| Employee {
        id: data.id,
        name: data.name.clone(),
        role_id: ext[idx % ext.len()],
        status: data.status,
    });
    let employees = employee_factory
        .generate_many(pool, employees, role_ids)
        .await?;
    println!("seeded {} employees", employees.len());
    Ok(())
}
