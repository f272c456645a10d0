use crate::config::WidgetSettings;
use crate::services::whatsapp::ContactTarget;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::info;

/// The floating-widget composer: a fixed menu of canned messages, each
/// producing a deep-link at the same contact target as the donation form.
/// Never gated — every entry is always sendable.
pub struct QuickContact {
    target: ContactTarget,
    messages: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactLink {
    pub whatsapp_url: String,
}

impl QuickContact {
    pub fn new(target: ContactTarget, messages: Vec<String>) -> Self {
        Self { target, messages }
    }

    /// The canned phrases in declaration order, identical for every caller.
    pub fn list(&self) -> &[String] {
        &self.messages
    }

    /// With a message, a deep-link carrying it as prefilled text; without,
    /// the bare contact link. Fire-and-forget: nothing reports whether the
    /// chat was ever opened.
    pub fn send(&self, message: Option<&str>) -> ContactLink {
        match message {
            Some(_) => info!("Building WhatsApp link with prefilled text"),
            None => info!("Building bare WhatsApp link"),
        }
        ContactLink {
            whatsapp_url: self.target.deep_link(message),
        }
    }
}

#[derive(Debug, Default)]
struct WidgetState {
    panel_open: AtomicBool,
    teaser_visible: AtomicBool,
    teaser_spent: AtomicBool,
}

/// Visibility state of the floating contact widget. The teaser bubble
/// appears after a short delay and hides again after a fixed duration
/// unless dismissed first; it never comes back once spent. The quick-panel
/// toggles from the main button and closes on an outside click or Escape.
///
/// The timer task holds the only other reference to the state and is
/// aborted when the widget is dropped, so a torn-down widget can never be
/// mutated by a stale timer.
pub struct ContactWidget {
    state: Arc<WidgetState>,
    teaser_timer: JoinHandle<()>,
}

impl ContactWidget {
    /// Must be called from within a tokio runtime.
    pub fn mount(timings: &WidgetSettings) -> Self {
        let state = Arc::new(WidgetState::default());
        let shared = Arc::clone(&state);
        let delay = Duration::from_millis(timings.teaser_delay_ms);
        let auto_hide = Duration::from_millis(timings.teaser_auto_hide_ms);

        let teaser_timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if shared.teaser_spent.load(Ordering::SeqCst) {
                return;
            }
            shared.teaser_visible.store(true, Ordering::SeqCst);

            tokio::time::sleep(auto_hide).await;
            shared.teaser_visible.store(false, Ordering::SeqCst);
            shared.teaser_spent.store(true, Ordering::SeqCst);
        });

        Self {
            state,
            teaser_timer,
        }
    }

    /// The teaser is suppressed while the panel is open.
    pub fn teaser_visible(&self) -> bool {
        self.state.teaser_visible.load(Ordering::SeqCst) && !self.panel_open()
    }

    pub fn dismiss_teaser(&self) {
        self.state.teaser_visible.store(false, Ordering::SeqCst);
        self.state.teaser_spent.store(true, Ordering::SeqCst);
    }

    pub fn panel_open(&self) -> bool {
        self.state.panel_open.load(Ordering::SeqCst)
    }

    pub fn toggle_panel(&self) {
        self.state.panel_open.fetch_xor(true, Ordering::SeqCst);
    }

    pub fn close_panel(&self) {
        self.state.panel_open.store(false, Ordering::SeqCst);
    }

    pub fn outside_click(&self) {
        self.close_panel();
    }

    pub fn escape(&self) {
        self.close_panel();
    }
}

impl Drop for ContactWidget {
    fn drop(&mut self) {
        self.teaser_timer.abort();
    }
}
