//! Database bootstrap: create the target database when missing, build the pool.

use crate::config::Settings;
use crate::error::{AppError, ConfigError};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Connect to the server's `postgres` database and `CREATE DATABASE` when the target does not exist.
/// A URL without a database name has nothing to create.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let Some((admin, db_name)) = admin_options(database_url)? else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Build the connection pool from settings.
pub async fn connect(settings: &Settings) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;
    tracing::info!(max_connections = settings.max_connections, "database pool ready");
    Ok(pool)
}

/// Same server, user and socket as `url`, pointed at the `postgres` database, plus the target database name.
/// `None` when the URL names no database or names `postgres` itself.
fn admin_options(url: &str) -> Result<Option<(PgConnectOptions, String)>, ConfigError> {
    let opts = PgConnectOptions::from_str(url).map_err(|e| ConfigError::Invalid {
        key: "DATABASE_URL",
        value: e.to_string(),
    })?;
    let db_name = match opts.get_database() {
        Some(name) if !name.trim().is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(None),
    };
    Ok(Some((opts.database("postgres"), db_name)))
}

pub(crate) fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_connection_keeps_host_and_port() {
        let (admin, name) = admin_options("postgres://u:p@db.internal:6543/tienda_en_linea?sslmode=disable")
            .unwrap()
            .unwrap();
        assert_eq!(name, "tienda_en_linea");
        assert_eq!(admin.get_database(), Some("postgres"));
        assert_eq!(admin.get_host(), "db.internal");
        assert_eq!(admin.get_port(), 6543);
    }

    #[test]
    fn admin_connection_keeps_unix_socket() {
        let (admin, name) = admin_options("postgres:///tienda_en_linea?host=/var/run/postgresql")
            .unwrap()
            .unwrap();
        assert_eq!(name, "tienda_en_linea");
        assert_eq!(admin.get_database(), Some("postgres"));
        assert_eq!(
            admin.get_socket().map(|p| p.as_path()),
            Some(std::path::Path::new("/var/run/postgresql"))
        );
    }

    #[test]
    fn url_without_path_is_accepted() {
        assert!(admin_options("postgres://localhost").is_ok());
    }

    #[test]
    fn maintenance_database_needs_no_creation() {
        assert!(admin_options("postgres://localhost/postgres").unwrap().is_none());
    }

    #[test]
    fn malformed_url_is_a_config_error() {
        let err = admin_options("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DATABASE_URL", .. }));
    }

    #[test]
    fn identifiers_double_embedded_quotes() {
        assert_eq!(quote_ident("tienda"), "\"tienda\"");
        assert_eq!(quote_ident("a\"b"), "\"a\"\"b\"");
    }
}
