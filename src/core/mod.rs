pub mod db;
pub mod sqlx_utils;
