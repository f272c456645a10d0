use ::config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Runtime settings, layered as built-in defaults overridden by
/// `PORTAL_`-prefixed environment variables (`PORTAL_SERVER__PORT=9000`).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub contact: ContactSettings,
    pub widget: WidgetSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Everything the composers need to address the church's WhatsApp line.
/// The number is E.164 with its leading `+`; the quick messages are the
/// canned phrases offered by the floating contact widget, in menu order.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactSettings {
    pub organization: String,
    pub cause: String,
    pub whatsapp_number: String,
    pub quick_messages: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WidgetSettings {
    pub teaser_delay_ms: u64,
    pub teaser_auto_hide_ms: u64,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080_i64)?
            .set_default("contact.organization", "Elijah Church of Christ")?
            .set_default("contact.cause", "Charity & Outreach")?
            .set_default("contact.whatsapp_number", "+27637310437")?
            .set_default(
                "contact.quick_messages",
                vec![
                    "Hi! I’d like to join a service 🙏",
                    "Please pray with me",
                    "How can I partner?",
                ],
            )?
            .set_default("widget.teaser_delay_ms", 600_i64)?
            .set_default("widget.teaser_auto_hide_ms", 10_000_i64)?
            .add_source(Environment::with_prefix("PORTAL").separator("__"))
            .build()?
            .try_deserialize()
    }
}
