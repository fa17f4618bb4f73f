//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use order_desk_core::{InputField, RenderModel, Tracker, ValidationError};

use crate::storage::BrowserStore;

/// How long a validation notice stays up
const NOTICE_MS: u32 = 4_000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Owned tracker state; every mutation goes through `mutate`
    tracker: RwSignal<Tracker<BrowserStore>>,
    /// Current render pass, recomputed after every mutation
    pub view: Memo<RenderModel>,
    /// Message for the last rejected input
    pub notice: RwSignal<Option<String>>,
    /// Input currently marked invalid
    pub invalid: RwSignal<Option<InputField>>,
}

impl AppContext {
    pub fn new(tracker: Tracker<BrowserStore>) -> Self {
        let tracker = RwSignal::new(tracker);
        Self {
            tracker,
            view: Memo::new(move |_| tracker.with(|t| t.render())),
            notice: RwSignal::new(None),
            invalid: RwSignal::new(None),
        }
    }

    /// Run a tracker operation and re-render
    pub fn mutate<U>(&self, op: impl FnOnce(&mut Tracker<BrowserStore>) -> U) -> Option<U> {
        self.tracker.try_update(op)
    }

    /// Surface a validation failure: show the notice and mark the field
    pub fn report(&self, err: ValidationError) {
        log::warn!("[UI] {}", err);
        let message = err.to_string();
        self.invalid.set(err.field());
        self.notice.set(Some(message.clone()));

        let notice = self.notice;
        Timeout::new(NOTICE_MS, move || {
            notice.update(|n| {
                if n.as_deref() == Some(message.as_str()) {
                    *n = None;
                }
            });
        })
        .forget();
    }

    /// Clear the invalid mark (and notice) after a successful submit
    pub fn clear_invalid(&self) {
        self.invalid.set(None);
        self.notice.set(None);
    }

    pub fn input_class(&self, field: InputField) -> &'static str {
        if self.invalid.get() == Some(field) {
            "form-control is-invalid"
        } else {
            "form-control"
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
