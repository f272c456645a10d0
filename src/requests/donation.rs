use crate::models::donation::{DonationForm, DonationType, PreferredMethod};
use serde::Deserialize;

/// Incoming donation form payload. Every field is optional on the wire;
/// missing fields deserialize to their empty/default values and presence
/// is judged later by the form itself.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DonationRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub donation_type: DonationType,
    pub amount: String,
    pub items: String,
    pub preferred_method: PreferredMethod,
    pub message: String,
}

impl From<DonationRequest> for DonationForm {
    fn from(request: DonationRequest) -> Self {
        let mut form = DonationForm::default();
        form.full_name = request.full_name;
        form.email = request.email;
        form.phone = request.phone;
        form.donation_type = request.donation_type;
        form.amount = request.amount;
        form.items = request.items;
        form.preferred_method = request.preferred_method;
        form.message = request.message;
        form
    }
}
