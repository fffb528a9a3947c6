use crate::config::ConfigError;
use crate::dataset::DatasetError;
use crate::entities::UnknownEntity;
use crate::listing::ListViewError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Dataset(DatasetError),
    ListView(ListViewError),
    UnknownList(UnknownEntity),
    Serialize(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Dataset(err) => write!(f, "dataset error: {}", err),
            AppError::ListView(err) => write!(f, "list view error: {}", err),
            AppError::UnknownList(err) => write!(f, "{}", err),
            AppError::Serialize(err) => write!(f, "serialization error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Dataset(err) => Some(err),
            AppError::ListView(err) => Some(err),
            AppError::UnknownList(err) => Some(err),
            AppError::Serialize(err) => Some(err),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ListView(_) | AppError::Dataset(_) => StatusCode::BAD_REQUEST,
            AppError::UnknownList(_) => StatusCode::NOT_FOUND,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Serialize(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<DatasetError> for AppError {
    fn from(value: DatasetError) -> Self {
        Self::Dataset(value)
    }
}

impl From<ListViewError> for AppError {
    fn from(value: ListViewError) -> Self {
        Self::ListView(value)
    }
}

impl From<UnknownEntity> for AppError {
    fn from(value: UnknownEntity) -> Self {
        Self::UnknownList(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_status_codes() {
        let unknown: AppError = UnknownEntity("invoices".to_string()).into();
        assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

        let filter: AppError = ListViewError::UnknownFilter("color".to_string()).into();
        assert_eq!(filter.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            filter.into_response().status(),
            StatusCode::BAD_REQUEST
        );

        let config: AppError = ConfigError::InvalidPort.into();
        assert_eq!(config.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn serialization_failures_are_server_errors() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let app: AppError = err.into();
        assert!(matches!(app, AppError::Serialize(_)));
        assert_eq!(app.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(app.to_string().starts_with("serialization error:"));
    }
}
