use fake::{Dummy, Fake, Faker};
use serde::Deserialize;
use sqlx::PgPool;

use crate::model::role::Role;

pub struct RoleFactory<T: Clone> {
    modifier_one: fn(x: &Role, ext: T) -> Role,
    modifier_many: fn(x: &Role, idx: usize, ext: T) -> Role,
}

impl<T: Clone> Default for RoleFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> RoleFactory<T> {
    pub fn new() -> Self {
        Self {
            modifier_one: |x, _| x.clone(),
            modifier_many: |x, _, _| x.clone(),
        }
    }

    pub fn modified_one(&mut self, modifier: fn(x: &Role, ext: T) -> Role) {
        self.modifier_one = modifier
    }

    pub fn modified_many(&mut self, modifier: fn(x: &Role, idx: usize, ext: T) -> Role) {
        self.modifier_many = modifier
    }

    pub async fn generate_one(&mut self, db: &PgPool, ext: T) -> anyhow::Result<Role> {
        let data = RoleDummy::new();
        let data = data.generate_one();
        let mut data = (self.modifier_one)(&data, ext);
        let row: (i32,) =
            sqlx::query_as(r#"INSERT INTO public.role (name) VALUES ($1) RETURNING id"#)
                .bind(&data.name)
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
    ) -> anyhow::Result<Vec<Role>> {
        let data = RoleDummy::new();
        let data = data.generate_many(num);
        let mut result: Vec<Role> = vec![];
        for (idx, item) in data.iter().enumerate() {
            result.push((self.modifier_many)(item, idx, ext.clone()));
        }
        let mut tx = db.begin().await?;
        for item in result.iter_mut() {
            let row: (i32,) =
                sqlx::query_as(r#"INSERT INTO public.role (name) VALUES ($1) RETURNING id"#)
                    .bind(&item.name)
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
struct RoleDummy {
    pub id: i32,
    pub name: String,
}

impl RoleDummy {
    pub fn new() -> Self {
        Faker.fake::<Self>()
    }

    pub fn generate_one(&self) -> Role {
        let dummy = Faker.fake::<RoleDummy>();
        Role {
            id: dummy.id,
            name: dummy.name,
        }
    }

    pub fn generate_many(&self, num: u32) -> Vec<Role> {
        let mut result: Vec<Role> = vec![];
        for _ in 0..num {
            let dummy = Faker.fake::<Self>();
            result.push(Role {
                id: dummy.id,
                name: dummy.name,
            });
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use crate::{factory::role::RoleFactory, model::role::Role};

    #[sqlx::test]
    async fn test_generate_one(pool: PgPool) -> anyhow::Result<()> {
        // When
        let mut factory = RoleFactory::new();
        factory.generate_one(&pool, ()).await?;

        // Expect
        let num_data: (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM public.role"#)
            .fetch_one(&pool)
            .await?;
        assert_eq!(num_data.0, 1);
        Ok(())
    }

    #[sqlx::test]
    async fn test_generate_one_modified(pool: PgPool) -> anyhow::Result<()> {
        // When
        let mut factory = RoleFactory::<String>::new();
        factory.modified_one(|data, ext| Role {
            id: data.id,
            name: ext,
        });
        let role = factory
            .generate_one(&pool, "Engineer".to_string())
            .await?;

        // Expect
        let res: (i32, String) = sqlx::query_as(r#"SELECT id, name FROM public.role"#)
            .fetch_one(&pool)
            .await?;
        assert_eq!(res.0, role.id);
        assert_eq!(res.1, "Engineer".to_string());
        Ok(())
    }

    #[sqlx::test]
    async fn test_generate_many(pool: PgPool) -> anyhow::Result<()> {
        // When
        let mut factory = RoleFactory::new();
        factory.generate_many(&pool, 10, ()).await?;

        // Expect
        let num_data: (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM public.role"#)
            .fetch_one(&pool)
            .await?;
        assert_eq!(num_data.0, 10);
        Ok(())
    }

    #[sqlx::test]
    async fn test_generate_many_modified(pool: PgPool) -> anyhow::Result<()> {
        // When
        let mut factory = RoleFactory::<String>::new();
        factory.modified_many(|data, idx, ext| Role {
            id: data.id,
            name: format!("{}_{}", ext, idx),
        });
        factory.generate_many(&pool, 5, "role".to_string()).await?;

        // Expect
        let res: Vec<(String,)> = sqlx::query_as(r#"SELECT name FROM public.role ORDER BY id"#)
            .fetch_all(&pool)
            .await?;
        assert_eq!(res.len(), 5);
        for (idx, item) in res.iter().enumerate() {
            assert_eq!(item.0, format!("role_{}", idx));
        }
        Ok(())
    }
}
