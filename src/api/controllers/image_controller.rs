use crate::api::controllers::dto::image_dto::ImageUploadResponse;
use crate::api::errors::APIErrors;
use crate::api::extractors::AdminGuard;
use crate::api::response::MessageResponse;
use crate::api::state::AppState;
use crate::images::HasImageSources;
use crate::services::image_service::ImageService;
use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use bytes::Bytes;

/// The parts of an image upload form we care about.
#[derive(Debug, Default)]
struct ImageUpload {
    file_name: String,
    content: Bytes,
    alt_text: String,
    sort_order: i32,
}

async fn read_upload(mut multipart: Multipart) -> Result<ImageUpload, APIErrors> {
    let mut upload = ImageUpload::default();
    let mut has_file = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| APIErrors::BadRequest(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" | "image" => {
                upload.file_name = field.file_name().unwrap_or_default().to_string();
                upload.content = field
                    .bytes()
                    .await
                    .map_err(|e| APIErrors::BadRequest(e.body_text()))?;
                has_file = true;
            }
            "alt_text" => {
                upload.alt_text = field
                    .text()
                    .await
                    .map_err(|e| APIErrors::BadRequest(e.body_text()))?;
            }
            "sort_order" => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| APIErrors::BadRequest(e.body_text()))?;
                upload.sort_order = raw
                    .trim()
                    .parse()
                    .map_err(|_| APIErrors::Validation(vec!["sort_order".to_string()]))?;
            }
            _ => {}
        }
    }

    if !has_file {
        return Err(APIErrors::Validation(vec!["file".to_string()]));
    }
    Ok(upload)
}

fn uploaded<E: HasImageSources>(state: &AppState, id: i32, entity: &E) -> ImageUploadResponse {
    ImageUploadResponse {
        id,
        storage_path: entity.image_sources().storage_path().map(str::to_string),
        url: state.resolver.resolve(entity),
    }
}

pub async fn upload_category_image(
    _admin: AdminGuard,
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
    multipart: Multipart,
) -> impl IntoResponse {
    let upload = match read_upload(multipart).await {
        Ok(upload) => upload,
        Err(e) => return e.into_response(),
    };
    let service = ImageService::new(&state.db, state.uploader.clone());

    match service
        .upload_category_image(category_id, &upload.file_name, upload.content)
        .await
    {
        Ok(category) => {
            (StatusCode::OK, Json(uploaded(&state, category.id, &category))).into_response()
        }
        Err(e) => APIErrors::from(e).into_response(),
    }
}

pub async fn upload_product_image(
    _admin: AdminGuard,
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
    multipart: Multipart,
) -> impl IntoResponse {
    let upload = match read_upload(multipart).await {
        Ok(upload) => upload,
        Err(e) => return e.into_response(),
    };
    let service = ImageService::new(&state.db, state.uploader.clone());

    match service
        .upload_product_image(product_id, &upload.file_name, upload.content)
        .await
    {
        Ok(product) => {
            (StatusCode::OK, Json(uploaded(&state, product.id, &product))).into_response()
        }
        Err(e) => APIErrors::from(e).into_response(),
    }
}

pub async fn add_gallery_image(
    _admin: AdminGuard,
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
    multipart: Multipart,
) -> impl IntoResponse {
    let upload = match read_upload(multipart).await {
        Ok(upload) => upload,
        Err(e) => return e.into_response(),
    };
    let service = ImageService::new(&state.db, state.uploader.clone());

    match service
        .add_gallery_image(
            product_id,
            &upload.file_name,
            upload.content,
            &upload.alt_text,
            upload.sort_order,
        )
        .await
    {
        Ok(image) => {
            (StatusCode::CREATED, Json(uploaded(&state, image.id, &image))).into_response()
        }
        Err(e) => APIErrors::from(e).into_response(),
    }
}

pub async fn delete_product(
    _admin: AdminGuard,
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> impl IntoResponse {
    let service = ImageService::new(&state.db, state.uploader.clone());

    match service.delete_product(product_id).await {
        Ok(()) => (StatusCode::OK, Json(MessageResponse::new("Product deleted"))).into_response(),
        Err(e) => APIErrors::from(e).into_response(),
    }
}

pub async fn delete_category(
    _admin: AdminGuard,
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> impl IntoResponse {
    let service = ImageService::new(&state.db, state.uploader.clone());

    match service.delete_category(category_id).await {
        Ok(()) => (StatusCode::OK, Json(MessageResponse::new("Category deleted"))).into_response(),
        Err(e) => APIErrors::from(e).into_response(),
    }
}

pub async fn delete_gallery_image(
    _admin: AdminGuard,
    State(state): State<AppState>,
    Path(image_id): Path<i32>,
) -> impl IntoResponse {
    let service = ImageService::new(&state.db, state.uploader.clone());

    match service.delete_gallery_image(image_id).await {
        Ok(()) => (StatusCode::OK, Json(MessageResponse::new("Image deleted"))).into_response(),
        Err(e) => APIErrors::from(e).into_response(),
    }
}
