use crate::{models::gallery::GALLERY, utils::helpers::ApiResponse};
use actix_web::{HttpResponse, Result};
use tracing::info;

pub async fn all() -> Result<HttpResponse> {
    info!("Getting charity gallery");
    Ok(HttpResponse::Ok().json(ApiResponse::success(GALLERY)))
}
