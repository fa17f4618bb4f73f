//! Dashboard Counters Component

use leptos::prelude::*;
use order_desk_core::Counter;

use crate::context::use_app_context;

/// The six task/order counters
#[component]
pub fn DashboardCounters() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="dashboard-counters">
            {Counter::ALL.iter().map(|&counter| view! {
                <div class="counter-card">
                    <span class="counter-label">{counter.label()}</span>
                    <span class="counter-value" id=counter.element_id()>
                        {move || ctx.view.get().dashboard.value(counter)}
                    </span>
                </div>
            }).collect_view()}
        </div>
    }
}
