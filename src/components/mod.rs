//! UI Components
//!
//! Leptos components for each section of the desk.

mod dashboard_counters;
mod task_panel;
mod order_panel;
mod order_editor;
mod inventory_table;
mod delete_confirm_button;
mod notice_bar;

pub use dashboard_counters::DashboardCounters;
pub use task_panel::TaskPanel;
pub use order_panel::OrderPanel;
pub use order_editor::OrderEditor;
pub use inventory_table::InventoryTable;
pub use delete_confirm_button::DeleteConfirmButton;
pub use notice_bar::NoticeBar;
