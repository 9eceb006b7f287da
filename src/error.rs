//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    #[error("{key} must be at least {min}")]
    TooSmall { key: &'static str, min: u64 },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("missing field: {0}")]
    MissingField(String),
    #[error("invalid value for {field}: expected {expected}")]
    TypeCoercion { field: String, expected: &'static str },
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("foreign key violated: {0}")]
    ForeignKeyViolation(String),
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i32 },
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Db(sqlx::Error),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            let constraint = db.constraint().unwrap_or_default().to_string();
            if db.is_unique_violation() {
                return AppError::UniqueViolation(constraint);
            }
            if db.is_foreign_key_violation() {
                return AppError::ForeignKeyViolation(constraint);
            }
        }
        AppError::Db(e)
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MissingField(_) | AppError::TypeCoercion { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::UniqueViolation(_) => StatusCode::CONFLICT,
            AppError::ForeignKeyViolation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Db(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config_error",
            AppError::MissingField(_) => "missing_field",
            AppError::TypeCoercion { .. } => "type_coercion",
            AppError::UniqueViolation(_) => "unique_violation",
            AppError::ForeignKeyViolation(_) => "foreign_key_violation",
            AppError::NotFound { .. } => "not_found",
            AppError::Conflict(_) => "conflict",
            AppError::BadRequest(_) => "bad_request",
            AppError::Db(sqlx::Error::RowNotFound) => "not_found",
            AppError::Db(_) => "database_error",
        }
    }

    /// Record server-side failures; client errors are not logged.
    pub fn log(&self) {
        if self.status().is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
    }

    /// Message safe to show a client. Server-side failures get a generic text.
    pub fn public_message(&self) -> String {
        if self.status().is_server_error() {
            "an internal error occurred".to_string()
        } else {
            self.to_string()
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        self.log();
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.public_message(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn missing_field_is_422_with_code() {
        let response = AppError::MissingField("nombre".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "missing_field");
        assert_eq!(body["error"]["message"], "missing field: nombre");
    }

    #[test]
    fn not_found_is_404() {
        let err = AppError::NotFound { resource: "producto", id: 7 };
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "producto 7 not found");
    }

    #[test]
    fn constraint_errors_map_to_client_statuses() {
        assert_eq!(AppError::UniqueViolation("cliente_email_key".into()).status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::ForeignKeyViolation("pedido_cliente_id_fkey".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn public_message_is_stable_across_calls() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert_eq!(err.public_message(), err.public_message());
        let client = AppError::Conflict("cliente 1 still has 2 pedido(s)".into());
        assert_eq!(client.public_message(), "conflict: cliente 1 still has 2 pedido(s)");
    }

    #[test]
    fn row_not_found_is_404() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "not_found");
    }

    #[tokio::test]
    async fn database_error_hides_details() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "database_error");
        assert_eq!(body["error"]["message"], "an internal error occurred");
    }
}
