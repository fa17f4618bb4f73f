//! Notice Bar Component
//!
//! Non-blocking replacement for alert boxes.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.notice.get().map(|message| view! {
            <div class="notice" role="alert">
                <span>{message}</span>
                <button class="notice-close" on:click=move |_| ctx.notice.set(None)>"×"</button>
            </div>
        })}
    }
}
