use crate::{
    requests::contact::QuickSendRequest, services::quick_contact::QuickContact,
    utils::helpers::ApiResponse,
};
use actix_web::{HttpResponse, Result, web};
use tracing::info;

pub async fn quick_messages(quick: web::Data<QuickContact>) -> Result<HttpResponse> {
    info!("Listing quick messages");
    Ok(HttpResponse::Ok().json(ApiResponse::success(quick.list())))
}

pub async fn send(
    quick: web::Data<QuickContact>,
    request: web::Json<QuickSendRequest>,
) -> Result<HttpResponse> {
    let link = quick.send(request.message.as_deref());
    Ok(HttpResponse::Ok().json(ApiResponse::success(link)))
}
