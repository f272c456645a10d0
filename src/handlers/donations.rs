use crate::{
    config::Settings, models::donation::DonationForm, requests::donation::DonationRequest,
    services::whatsapp::ContactTarget, utils::helpers::ApiResponse,
};
use actix_web::{HttpResponse, Result, web};
use tracing::info;

/// Dry-run composition: tells the form UI whether the submit button should
/// be enabled and, when it should, what would be sent.
pub async fn preview(
    settings: web::Data<Settings>,
    target: web::Data<ContactTarget>,
    request: web::Json<DonationRequest>,
) -> Result<HttpResponse> {
    let form = DonationForm::from(request.into_inner());
    let preview = form.preview(&settings.contact, &target);
    Ok(HttpResponse::Ok().json(ApiResponse::success(preview)))
}

pub async fn submit(
    settings: web::Data<Settings>,
    target: web::Data<ContactTarget>,
    request: web::Json<DonationRequest>,
) -> Result<HttpResponse> {
    let mut form = DonationForm::from(request.into_inner());

    match form.submit(&settings.contact, &target) {
        Some(intent) => {
            info!("Composed donation intent for {}", form.full_name);
            Ok(HttpResponse::Ok().json(ApiResponse::success(intent)))
        }
        // A well-behaved client never gets here; its submit button is
        // disabled while the form is incomplete.
        None => {
            info!("Rejected incomplete donation form");
            Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(
                "Donation form is incomplete".to_string(),
            )))
        }
    }
}
