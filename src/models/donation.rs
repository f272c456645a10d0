use crate::config::ContactSettings;
use crate::services::whatsapp::ContactTarget;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DonationType {
    #[default]
    Money,
    Food,
    Clothes,
    Blankets,
    Other,
}

impl fmt::Display for DonationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DonationType::Money => "money",
            DonationType::Food => "food",
            DonationType::Clothes => "clothes",
            DonationType::Blankets => "blankets",
            DonationType::Other => "other",
        };
        f.write_str(label)
    }
}

impl FromStr for DonationType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "money" => Ok(DonationType::Money),
            "food" => Ok(DonationType::Food),
            "clothes" => Ok(DonationType::Clothes),
            "blankets" => Ok(DonationType::Blankets),
            "other" => Ok(DonationType::Other),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PreferredMethod {
    #[default]
    Whatsapp,
    Eft,
    Inperson,
}

impl PreferredMethod {
    /// The human-readable label rendered into the composed message.
    pub fn label(&self) -> &'static str {
        match self {
            PreferredMethod::Whatsapp => "WhatsApp",
            PreferredMethod::Eft => "EFT (please send banking details)",
            PreferredMethod::Inperson => "In-person drop-off",
        }
    }
}

impl FromStr for PreferredMethod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "whatsapp" => Ok(PreferredMethod::Whatsapp),
            "eft" => Ok(PreferredMethod::Eft),
            "inperson" => Ok(PreferredMethod::Inperson),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonationField {
    FullName,
    Email,
    Phone,
    DonationType,
    Amount,
    Items,
    PreferredMethod,
    Message,
}

/// The donation form as the donor fills it in. Held only while the intent
/// is being composed; it has no identity and is never persisted. Field
/// contents are opaque text until composition — no format validation beyond
/// the presence checks in [`DonationForm::is_submittable`].
#[derive(Debug, Clone, Default)]
pub struct DonationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub donation_type: DonationType,
    pub amount: String,
    pub items: String,
    pub preferred_method: PreferredMethod,
    pub message: String,
    submitting: bool,
}

/// The composed outcome of a submitted form: the multi-line message and
/// the `wa.me` link that carries it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationIntent {
    pub message: String,
    pub whatsapp_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DonationPreview {
    pub submittable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_url: Option<String>,
}

impl DonationForm {
    /// Overwrites one field with raw input. Unrecognised values for the two
    /// enum fields are ignored, matching a `<select>` that can only ever
    /// hold its declared options.
    pub fn set(&mut self, field: DonationField, value: &str) {
        match field {
            DonationField::FullName => self.full_name = value.to_string(),
            DonationField::Email => self.email = value.to_string(),
            DonationField::Phone => self.phone = value.to_string(),
            DonationField::Amount => self.amount = value.to_string(),
            DonationField::Items => self.items = value.to_string(),
            DonationField::Message => self.message = value.to_string(),
            DonationField::DonationType => {
                if let Ok(donation_type) = value.parse() {
                    self.donation_type = donation_type;
                }
            }
            DonationField::PreferredMethod => {
                if let Ok(preferred_method) = value.parse() {
                    self.preferred_method = preferred_method;
                }
            }
        }
    }

    pub fn needs_amount(&self) -> bool {
        self.donation_type == DonationType::Money
    }

    pub fn needs_items(&self) -> bool {
        !self.needs_amount()
    }

    /// Pure derivation from the current field values; recomputed on every
    /// call rather than cached. Exactly one of amount/items is required at
    /// any time, chosen by the donation type.
    pub fn is_submittable(&self) -> bool {
        if self.full_name.is_empty() {
            return false;
        }
        if self.needs_amount() && self.amount.is_empty() {
            return false;
        }
        if self.needs_items() && self.items.is_empty() {
            return false;
        }
        true
    }

    /// Renders the form into the multi-line WhatsApp message. Optional
    /// lines are omitted entirely when their field is empty; a section
    /// header never appears without content under it.
    pub fn compose(&self, contact: &ContactSettings) -> String {
        let mut lines = vec![
            format!(
                "Hi {}, I want to donate to {}.",
                contact.organization, contact.cause
            ),
            String::new(),
            "— My Details —".to_string(),
            format!("Name: {}", self.full_name),
        ];
        if !self.phone.is_empty() {
            lines.push(format!("Phone: {}", self.phone));
        }
        if !self.email.is_empty() {
            lines.push(format!("Email: {}", self.email));
        }
        lines.push(String::new());
        lines.push("— Donation —".to_string());
        lines.push(format!("Type: {}", self.donation_type));
        if self.needs_amount() {
            lines.push(format!("Amount: R{}", self.amount));
        }
        if self.needs_items() {
            lines.push(format!("Items: {}", self.items));
        }
        lines.push(format!(
            "Preferred Method: {}",
            self.preferred_method.label()
        ));
        if !self.message.is_empty() {
            lines.push(String::new());
            lines.push("— Message —".to_string());
            lines.push(self.message.clone());
        }
        lines.join("\n")
    }

    /// True only for the duration of a [`DonationForm::submit`] call; the
    /// flag exists for button feedback, not correctness.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Guarded composition: a silent no-op while the form is incomplete,
    /// mirroring a disabled submit button. The handoff is fire-and-forget,
    /// so the in-flight flag clears on completion regardless of outcome.
    pub fn submit(
        &mut self,
        contact: &ContactSettings,
        target: &ContactTarget,
    ) -> Option<DonationIntent> {
        if !self.is_submittable() {
            return None;
        }
        self.submitting = true;
        let message = self.compose(contact);
        let whatsapp_url = target.deep_link(Some(&message));
        self.submitting = false;
        Some(DonationIntent {
            message,
            whatsapp_url,
        })
    }

    pub fn preview(&self, contact: &ContactSettings, target: &ContactTarget) -> DonationPreview {
        if !self.is_submittable() {
            return DonationPreview {
                submittable: false,
                message: None,
                whatsapp_url: None,
            };
        }
        let message = self.compose(contact);
        DonationPreview {
            submittable: true,
            whatsapp_url: Some(target.deep_link(Some(&message))),
            message: Some(message),
        }
    }
}
