use std::sync::Arc;

use sqlx::{Pool, Sqlite};

pub mod auth;
pub mod card;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod init;
pub mod models;
pub mod routes;
pub mod storage;
pub mod telemetry;

/// State shared by every request handler.
#[derive(Clone)]
pub struct Data {
    pub db: Pool<Sqlite>,
    pub api_password: Option<Arc<str>>,
}

impl Data {
    pub fn new(db: Pool<Sqlite>, api_password: Option<String>) -> Self {
        Self {
            db,
            api_password: api_password.map(Arc::from),
        }
    }
}
