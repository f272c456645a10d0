use crate::{models::testimony::TESTIMONIES, utils::helpers::ApiResponse};
use actix_web::{HttpResponse, Result};
use tracing::info;

pub async fn all() -> Result<HttpResponse> {
    info!("Getting all testimonies");
    Ok(HttpResponse::Ok().json(ApiResponse::success(TESTIMONIES)))
}
