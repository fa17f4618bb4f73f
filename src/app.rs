//! Order Desk App
//!
//! Loads the tracker from browser storage once, provides it via context,
//! and lays out the dashboard, task, order and inventory sections.

use leptos::prelude::*;
use order_desk_core::{Tracker, TrackerConfig};

use crate::components::{DashboardCounters, InventoryTable, NoticeBar, OrderPanel, TaskPanel};
use crate::context::AppContext;
use crate::storage::BrowserStore;

#[component]
pub fn App() -> impl IntoView {
    let tracker = Tracker::load(BrowserStore, TrackerConfig::default());
    provide_context(AppContext::new(tracker));
    log::info!("[APP] Order desk initialized");

    view! {
        <div class="app-layout">
            <NoticeBar />

            <main class="main-content">
                <h1>"Order Desk"</h1>

                <section class="dashboard-section" id="dashboard">
                    <DashboardCounters />
                </section>

                <TaskPanel />
                <OrderPanel />
                <InventoryTable />
            </main>
        </div>
    }
}
