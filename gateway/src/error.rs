use axum::{
  extract::multipart::MultipartError,
  response::{IntoResponse, Response},
  Json,
};
use hyper::StatusCode;
use image::ImageError;
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;
pub type AppJsonResult<T> = AppResult<Json<T>>;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("image error: {0}")]
  ImageError(ImageError),
  #[error("multipart error: {0}")]
  MultipartError(MultipartError),

  #[error("missing form field {0:?}")]
  MissingField(&'static str),
}

impl From<ImageError> for AppError {
  fn from(error: ImageError) -> Self {
    AppError::ImageError(error)
  }
}

impl From<MultipartError> for AppError {
  fn from(error: MultipartError) -> Self {
    AppError::MultipartError(error)
  }
}

impl AppError {
  pub fn status(&self) -> StatusCode {
    match self {
      AppError::ImageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
      AppError::MultipartError(error) => error.status(),

      AppError::MissingField(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
  }
}

// This centralizes all differents errors from our app in one place
impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let id = cuid::cuid1().unwrap_or_default();
    let status = self.status();

    if status.is_server_error() {
      tracing::error!(id = %id, error = ?self, "request failed");
    } else {
      tracing::warn!(id = %id, error = %self, "request rejected");
    }

    (status, Json(json!({ "error_id": id }))).into_response()
  }
}
