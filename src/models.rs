use actix_web::web::Bytes;
use image::ImageFormat;
use serde::{Deserialize, Serialize};

/// One user-selected file, held in memory for the duration of a single
/// generate request.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub filename: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl UploadedImage {
    /// File-type filter: PNG and JPEG only, decided by magic bytes rather
    /// than the declared content type.
    pub fn format(&self) -> Option<ImageFormat> {
        match image::guess_format(&self.bytes) {
            Ok(format @ (ImageFormat::Png | ImageFormat::Jpeg)) => Some(format),
            _ => None,
        }
    }

    /// MIME string forwarded to the prediction service.
    pub fn mime(&self) -> &str {
        match self.format() {
            Some(ImageFormat::Png) => "image/png",
            Some(ImageFormat::Jpeg) => "image/jpeg",
            _ => &self.content_type,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PredictionData {
    pub pred: String,
}

/// Body returned by the prediction service: `{"data": {"pred": "<latex>"}}`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PredictionResponse {
    pub data: PredictionData,
}

/// Body returned to the page.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenerateResponse {
    pub pred: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    const JPEG_MAGIC: &[u8] = &[0xff, 0xd8, 0xff, 0xe0];

    fn upload(bytes: &[u8], content_type: &str) -> UploadedImage {
        UploadedImage {
            filename: "formula.png".to_string(),
            content_type: content_type.to_string(),
            bytes: Bytes::copy_from_slice(bytes),
        }
    }

    #[test]
    fn png_and_jpeg_pass_the_filter() {
        assert_eq!(
            upload(PNG_MAGIC, "image/png").format(),
            Some(ImageFormat::Png)
        );
        assert_eq!(
            upload(JPEG_MAGIC, "image/jpeg").format(),
            Some(ImageFormat::Jpeg)
        );
    }

    #[test]
    fn other_bytes_fail_the_filter() {
        assert_eq!(upload(b"plain text", "text/plain").format(), None);
        assert_eq!(upload(b"", "image/png").format(), None);
    }

    #[test]
    fn mime_follows_sniffed_format_not_declared_type() {
        let img = upload(PNG_MAGIC, "application/octet-stream");
        assert_eq!(img.mime(), "image/png");
    }

    #[test]
    fn prediction_response_parses_data_pred() {
        let parsed: PredictionResponse =
            serde_json::from_str(r#"{"data": {"pred": "x^2"}}"#).unwrap();
        assert_eq!(parsed.data.pred, "x^2");
    }
}
