//! Create the store schema: `cliente`, `producto`, `pedido`, in foreign-key order.
//! Idempotent (`IF NOT EXISTS`); there is no versioned migration history.

use crate::error::AppError;
use sqlx::PgPool;

const SCHEMA: &[(&str, &str)] = &[
    (
        "producto",
        r#"
        CREATE TABLE IF NOT EXISTS producto (
            id SERIAL PRIMARY KEY,
            nombre VARCHAR(100) NOT NULL,
            precio DOUBLE PRECISION NOT NULL,
            stock INTEGER NOT NULL
        )
        "#,
    ),
    (
        "cliente",
        r#"
        CREATE TABLE IF NOT EXISTS cliente (
            id SERIAL PRIMARY KEY,
            nombre VARCHAR(100) NOT NULL,
            email VARCHAR(100) NOT NULL UNIQUE
        )
        "#,
    ),
    (
        "pedido",
        r#"
        CREATE TABLE IF NOT EXISTS pedido (
            id SERIAL PRIMARY KEY,
            cliente_id INTEGER NOT NULL REFERENCES cliente (id) ON DELETE RESTRICT,
            fecha_pedido TIMESTAMP NOT NULL DEFAULT (NOW() AT TIME ZONE 'utc')
        )
        "#,
    ),
    (
        "pedido_cliente_id_idx",
        "CREATE INDEX IF NOT EXISTS pedido_cliente_id_idx ON pedido (cliente_id)",
    ),
];

/// Names of the tables created by [`apply_migrations`], in creation order.
pub const TABLES: &[&str] = &["producto", "cliente", "pedido"];

pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for (name, ddl) in SCHEMA {
        tracing::debug!(object = %name, "ensure schema object");
        sqlx::query(ddl).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!(tables = ?TABLES, "schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn referenced_table_is_created_first() {
        let position = |name: &str| SCHEMA.iter().position(|(n, _)| *n == name).unwrap();
        assert!(position("cliente") < position("pedido"));
        assert!(position("pedido") < position("pedido_cliente_id_idx"));
    }

    #[test]
    fn every_statement_is_idempotent() {
        assert!(SCHEMA.iter().all(|(_, ddl)| ddl.contains("IF NOT EXISTS")));
    }
}
