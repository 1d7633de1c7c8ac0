use fake::{Dummy, Fake, Faker};
use serde::Deserialize;
use sqlx::PgPool;

use crate::model::employee::Employee;

// role_id in the generated dummy is random, callers set a real one
// through the modifier before anything is inserted
pub struct EmployeeFactory<T: Clone> {
    modifier_one: fn(x: &Employee, ext: T) -> Employee,
    modifier_many: fn(x: &Employee, idx: usize, ext: T) -> Employee,
}

impl<T: Clone> Default for EmployeeFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> EmployeeFactory<T> {
    pub fn new() -> Self {
        Self {
            modifier_one: |x, _| x.clone(),
            modifier_many: |x, _, _| x.clone(),
        }
    }

    pub fn modified_one(&mut self, modifier: fn(x: &Employee, ext: T) -> Employee) {
        self.modifier_one = modifier
    }

    pub fn modified_many(&mut self, modifier: fn(x: &Employee, idx: usize, ext: T) -> Employee) {
        self.modifier_many = modifier
    }

    pub async fn generate_one(&mut self, db: &PgPool, ext: T) -> anyhow::Result<Employee> {
        let data = EmployeeDummy::new();
        let data = data.generate_one();
        let mut data = (self.modifier_one)(&data, ext);
        let row: (i32,) = sqlx::query_as(
            r#"INSERT INTO public.employee (name, role_id, status) VALUES ($1, $2, $3) RETURNING id"#,
        )
        .bind(&data.name)
        .bind(data.role_id)
        .bind(data.status)
        .fetch_one(db)
        .await?;
        data.id = row.0;
        Ok(data)
    }

    pub async fn generate_many(
        &mut self,
        db: &PgPool,
        num: u32,
        ext: T,
    ) -> anyhow::Result<Vec<Employee>> {
        let data = EmployeeDummy::new();
        let data = data.generate_many(num);
        let mut result: Vec<Employee> = vec![];
        for (idx, item) in data.iter().enumerate() {
            result.push((self.modifier_many)(item, idx, ext.clone()));
        }
        let mut tx = db.begin().await?;
        for item in result.iter_mut() {
            let row: (i32,) = sqlx::query_as(
                r#"INSERT INTO public.employee (name, role_id, status) VALUES ($1, $2, $3) RETURNING id"#,
            )
            .bind(&item.name)
            .bind(item.role_id)
            .bind(item.status)
            .fetch_one(&mut *tx)
            .await?;
            item.id = row.0;
        }
        tx.commit().await?;
        Ok(result)
    }
}

#[allow(dead_code)]
#[derive(Debug, Default, Deserialize, Dummy, Clone)]
struct EmployeeDummy {
    pub id: i32,
    pub name: String,
    pub role_id: i32,
    pub status: bool,
}

impl EmployeeDummy {
    pub fn new() -> Self {
        Faker.fake::<Self>()
    }

    pub fn generate_one(&self) -> Employee {
        let dummy = Faker.fake::<EmployeeDummy>();
        Employee {
            id: dummy.id,
            name: dummy.name,
            role_id: dummy.role_id,
            status: dummy.status,
        }
    }

    pub fn generate_many(&self, num: u32) -> Vec<Employee> {
        let mut result: Vec<Employee> = vec![];
        for _ in 0..num {
            let dummy = Faker.fake::<Self>();
            result.push(Employee {
                id: dummy.id,
                name: dummy.name,
                role_id: dummy.role_id,
                status: dummy.status,
            });
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use crate::{
        factory::{employee::EmployeeFactory, role::RoleFactory},
        model::employee::Employee,
    };

    #[sqlx::test]
    async fn test_generate_one(pool: PgPool) -> anyhow::Result<()> {
        // Given
        let mut role_factory = RoleFactory::new();
        let role = role_factory.generate_one(&pool, ()).await?;

        // When
        let mut factory = EmployeeFactory::<i32>::new();
        factory.modified_one(|data, ext| Employee {
            id: data.id,
            name: data.name.clone(),
            role_id: ext,
            status: data.status,
        });
        factory.generate_one(&pool, role.id).await?;

        // Expect
        let num_data: (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM public.employee"#)
            .fetch_one(&pool)
            .await?;
        assert_eq!(num_data.0, 1);
        Ok(())
    }

    #[sqlx::test]
    async fn test_generate_many_modified(pool: PgPool) -> anyhow::Result<()> {
        // Given
        let mut role_factory = RoleFactory::new();
        let role = role_factory.generate_one(&pool, ()).await?;

        // When
        let mut factory = EmployeeFactory::<i32>::new();
        factory.modified_many(|data, _, ext| Employee {
            id: data.id,
            name: data.name.clone(),
            role_id: ext,
            status: false,
        });
        factory.generate_many(&pool, 5, role.id).await?;

        // Expect
        let res: Vec<(i32, bool)> = sqlx::query_as(r#"SELECT role_id, status FROM public.employee"#)
            .fetch_all(&pool)
            .await?;
        assert_eq!(res.len(), 5);
        for item in res {
            assert_eq!(item.0, role.id);
            assert!(!item.1);
        }
        Ok(())
    }
}
