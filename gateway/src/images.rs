use std::io::Cursor;

use axum::body::Bytes;
use image::{
  error::{ImageFormatHint, UnsupportedError, UnsupportedErrorKind},
  io::Reader as ImageReader,
  ImageError, ImageFormat, ImageResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
  pub format: ImageFormat,
  pub width: u32,
  pub height: u32,
}

/// Recognises an uploaded file from its leading bytes and reads its header.
///
/// Pixel data is not decoded, so a file cut short after its header is still
/// accepted. The declared filename and content type are not consulted.
pub fn identify(file: Bytes) -> ImageResult<ImageInfo> {
  let reader = ImageReader::new(Cursor::new(file)).with_guessed_format()?;
  let Some(format) = reader.format() else {
    return Err(ImageError::Unsupported(
      UnsupportedError::from_format_and_kind(
        ImageFormatHint::Unknown,
        UnsupportedErrorKind::Format(ImageFormatHint::Unknown),
      ),
    ));
  };
  let (width, height) = reader.into_dimensions()?;

  Ok(ImageInfo {
    format,
    width,
    height,
  })
}

#[cfg(test)]
pub(crate) fn encode_fixture(width: u32, height: u32, format: image::ImageOutputFormat) -> Bytes {
  use image::{DynamicImage, Rgb, RgbImage};

  let image = DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
    Rgb([x as u8, y as u8, (x ^ y) as u8])
  }));
  let mut buf: Vec<u8> = vec![];
  image.write_to(&mut Cursor::new(&mut buf), format).unwrap();
  Bytes::from(buf)
}

#[cfg(test)]
pub(crate) fn png_fixture(width: u32, height: u32) -> Bytes {
  encode_fixture(width, height, image::ImageOutputFormat::Png)
}

#[cfg(test)]
pub(crate) fn jpeg_fixture(width: u32, height: u32) -> Bytes {
  encode_fixture(width, height, image::ImageOutputFormat::Jpeg(80))
}
