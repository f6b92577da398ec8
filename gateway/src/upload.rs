use axum::{
  body::Bytes,
  extract::{DefaultBodyLimit, Multipart},
  routing::post,
  Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::{
  error::{AppError, AppJsonResult, AppResult},
  images,
};

pub const UPLOAD_MESSAGE: &str = "Image received successfully";
pub const TRANSLATED_TEXT: &str = "Sample translated menu text";

pub fn router() -> Router {
  Router::new()
    .route("/upload", post(upload_v1))
    .layer(DefaultBodyLimit::disable())
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct UploadRequest {
  file: Bytes,
  filename: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
  pub message: String,
  pub translated_text: String,
  pub filename: String,
}

impl UploadResponse {
  /// The fixed reply for an accepted image. Only the filename varies.
  pub fn mock(filename: String) -> Self {
    Self {
      message: UPLOAD_MESSAGE.to_owned(),
      translated_text: TRANSLATED_TEXT.to_owned(),
      filename,
    }
  }
}

async fn upload_v1(multipart: Multipart) -> AppJsonResult<UploadResponse> {
  let UploadRequest { file, filename } = upload_parse_multipart_v1(multipart).await?;

  tracing::info!(
    file_len = %bytefmt::format(file.len() as u64),
    filename = %filename,
    "received upload request"
  );

  let info = images::identify(file)?;
  tracing::debug!(
    format = ?info.format,
    width = info.width,
    height = info.height,
    "identified image"
  );

  Ok(Json(UploadResponse::mock(filename)))
}

async fn upload_parse_multipart_v1(mut multipart: Multipart) -> AppResult<UploadRequest> {
  let mut upload = None;

  while let Some(field) = multipart.next_field().await? {
    if field.name() != Some("file") {
      continue;
    }

    let filename = field
      .file_name()
      .map(str::to_owned)
      .ok_or(AppError::MissingField("file"))?;
    let file = field.bytes().await?;

    // repeated fields: the last one wins
    upload = Some(UploadRequest { file, filename });
  }

  upload.ok_or(AppError::MissingField("file"))
}
