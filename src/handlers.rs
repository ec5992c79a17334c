use actix_multipart::Multipart;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use futures_util::StreamExt;
use tracing::{info, warn};
use uuid::Uuid;

use crate::client::PredictClient;
use crate::error::ApiError;
use crate::models::{GenerateResponse, UploadedImage};

const INDEX_HTML: &str = include_str!("../static/index.html");

pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

pub async fn generate(
    payload: Multipart,
    client: web::Data<PredictClient>,
) -> Result<HttpResponse, ApiError> {
    let request_id = Uuid::new_v4();

    let image = match read_upload(payload).await? {
        Some(image) => image,
        None => {
            warn!(%request_id, "generate called without an uploaded image");
            return Err(ApiError::NoImage);
        }
    };

    if image.format().is_none() {
        warn!(
            %request_id,
            filename = %image.filename,
            declared = %image.content_type,
            "rejected upload that is not PNG or JPEG"
        );
        return Err(ApiError::UnsupportedFileType);
    }

    info!(
        %request_id,
        filename = %image.filename,
        bytes = image.bytes.len(),
        "forwarding image to the prediction service"
    );
    let pred = client.predict(&image).await?;
    info!(%request_id, "prediction returned");

    Ok(HttpResponse::Ok().json(GenerateResponse { pred }))
}

/// Drain the multipart payload and keep the first non-empty `file` field.
async fn read_upload(mut payload: Multipart) -> Result<Option<UploadedImage>, ApiError> {
    let mut image: Option<UploadedImage> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| ApiError::Upload(e.to_string()))?;
        let disposition = field.content_disposition();
        let name = disposition.get_name().unwrap_or("").to_string();
        let filename = disposition.get_filename().unwrap_or("upload").to_string();
        let content_type = field.content_type().essence_str().to_string();

        // Every field has to be drained before the next one is polled.
        let mut buf = web::BytesMut::new();
        while let Some(chunk) = field.next().await {
            let data = chunk.map_err(|e| ApiError::Upload(e.to_string()))?;
            buf.extend_from_slice(&data);
        }

        if name == "file" && !buf.is_empty() && image.is_none() {
            image = Some(UploadedImage {
                filename,
                content_type,
                bytes: buf.freeze(),
            });
        }
    }

    Ok(image)
}
