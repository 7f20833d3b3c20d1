use axum::{
    extract::Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use sqlx::error::ErrorKind;
use validator::ValidationErrors;

pub type Result<T> = std::result::Result<T, Error>;

/// Store-level constraint families a write can trip over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Unique,
    ForeignKey,
    NotNull,
    ValueTooLong,
    Check,
}

impl Constraint {
    // SQLSTATE 22001: string_data_right_truncation
    const VALUE_TOO_LONG: &'static str = "22001";

    fn describe(self) -> &'static str {
        match self {
            Self::Unique => "Value already in use",
            Self::ForeignKey => "Referenced record is missing or still in use",
            Self::NotNull => "Required value cannot be null",
            Self::ValueTooLong => "Value too long",
            Self::Check => "Value rejected by a check constraint",
        }
    }

    fn status(self) -> StatusCode {
        match self {
            Self::Unique | Self::ForeignKey => StatusCode::CONFLICT,
            Self::NotNull | Self::ValueTooLong | Self::Check => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} does not exist")]
    NotFound(&'static str),
    #[error("Resource not found")]
    RouteNotFound,
    #[error("Missing required field(s): {}", .0.join(", "))]
    ValidationMissing(Vec<String>),
    #[error("Unknown field(s): {}", .0.join(", "))]
    UnknownFields(Vec<String>),
    #[error("{0}")]
    InvalidBody(String),
    #[error("{}", .0.describe())]
    ConstraintViolation(Constraint),
    #[error("Store unavailable")]
    StoreUnavailable,
    #[error("internal error")]
    Unexpected,
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::ValidationMissing(_) | Self::UnknownFields(_) | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::ConstraintViolation(kind) => kind.status(),
            Self::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let kind = match db_err.kind() {
                    ErrorKind::UniqueViolation => Constraint::Unique,
                    ErrorKind::ForeignKeyViolation => Constraint::ForeignKey,
                    ErrorKind::NotNullViolation => Constraint::NotNull,
                    ErrorKind::CheckViolation => Constraint::Check,
                    _ if db_err.code().as_deref() == Some(Constraint::VALUE_TOO_LONG) => {
                        Constraint::ValueTooLong
                    }
                    _ => return Self::Unexpected,
                };

                tracing::warn!(
                    "Write rejected by constraint {}: {}",
                    db_err.constraint().unwrap_or("<unnamed>"),
                    db_err
                );

                Self::ConstraintViolation(kind)
            }
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => Self::StoreUnavailable,
            _ => Self::Unexpected,
        }
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect::<Vec<_>>();
        fields.sort();

        Self::ValidationMissing(fields)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("Request failed with {}: {}", status, self);
        } else {
            tracing::debug!("Request rejected with {}: {}", status, self);
        }

        (
            status,
            Json(json!({ "status": "error", "message": self.to_string() })),
        )
            .into_response()
    }
}
