//! Shared fixture for database tests: a throwaway schema per test.
//!
//! Run with `DATABASE_URL=postgres://... cargo test -- --ignored`.

#![allow(dead_code)]

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use tienda_admin::{apply_migrations, AppState};

static NEXT: AtomicU32 = AtomicU32::new(0);

pub struct TestDb {
    pub pool: PgPool,
    admin: PgConnectOptions,
    schema: String,
}

impl TestDb {
    /// Create a fresh schema, point the pool's `search_path` at it and create the tables.
    pub async fn new() -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for database tests");
        let admin = PgConnectOptions::from_str(&url).unwrap();
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().subsec_nanos();
        let schema = format!(
            "tienda_test_{}_{}_{}",
            std::process::id(),
            NEXT.fetch_add(1, Ordering::SeqCst),
            nanos
        );

        let mut conn = admin.connect().await.unwrap();
        sqlx::query(&format!("CREATE SCHEMA {schema}"))
            .execute(&mut conn)
            .await
            .unwrap();

        let pool = PgPoolOptions::new()
            .max_connections(4)
            .connect_with(admin.clone().options([("search_path", schema.as_str())]))
            .await
            .unwrap();
        apply_migrations(&pool).await.unwrap();
        Self { pool, admin, schema }
    }

    pub fn state(&self) -> AppState {
        AppState::new(self.pool.clone())
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }

    pub async fn teardown(self) {
        self.pool.close().await;
        let mut conn = self.admin.connect().await.unwrap();
        sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&mut conn)
            .await
            .unwrap();
    }
}
