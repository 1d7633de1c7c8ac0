use serde::Deserialize;
use sqlx::FromRow;

pub const TABLE_NAME: &str = "public.employee";

#[derive(Clone, Debug, Deserialize, FromRow)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub role_id: i32,
    // true while employed, false once terminated
    pub status: bool,
}
