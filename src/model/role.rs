use serde::Deserialize;
use sqlx::FromRow;

pub const TABLE_NAME: &str = "public.role";

#[derive(Clone, Debug, Deserialize, FromRow)]
pub struct Role {
    pub id: i32,
    pub name: String,
}
