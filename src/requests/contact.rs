use serde::Deserialize;

/// `message: null` (or absent) asks for the bare contact link.
#[derive(Debug, Default, Deserialize)]
pub struct QuickSendRequest {
    #[serde(default)]
    pub message: Option<String>,
}
