//! Inventory Table Component
//!
//! Alternate view over the orders: editable name/price/quantity cells
//! committed on change, with the computed line total.

use leptos::prelude::*;
use order_desk_core::{InventoryRow, OrderField, RecordId, RenderTarget};

use super::DeleteConfirmButton;
use crate::context::use_app_context;

#[component]
pub fn InventoryTable() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="inventory-section" id="inventory">
            <h2>"Inventory"</h2>
            <table id=RenderTarget::Inventory.element_id() class="inventory-table">
                <thead>
                    <tr>
                        <th>"Item"</th>
                        <th>"Price"</th>
                        <th>"Quantity"</th>
                        <th>"Total Value"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || ctx.view.get().inventory.into_iter()
                        .map(|row| view! { <InventoryItem row=row /> })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn InventoryItem(row: InventoryRow) -> impl IntoView {
    let ctx = use_app_context();
    let id = row.id;

    view! {
        <tr data-index=row.index.to_string()>
            <td><InventoryCell id=id field=OrderField::Text value=row.text /></td>
            <td><InventoryCell id=id field=OrderField::Price value=row.price_label /></td>
            <td><InventoryCell id=id field=OrderField::Quantity value=row.quantity.to_string() /></td>
            <td>{row.total_label}</td>
            <td>
                <DeleteConfirmButton
                    label="🗑 Delete"
                    on_confirm=move |_: ()| { ctx.mutate(|t| t.delete_inventory_item(id)); }
                />
            </td>
        </tr>
    }
}

/// Editable cell; a rejected value is logged and the stored one re-shown
#[component]
fn InventoryCell(id: RecordId, field: OrderField, value: String) -> impl IntoView {
    let ctx = use_app_context();

    let stored = value.clone();
    let commit = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        match ctx.mutate(|t| t.update_inventory_item(id, field.as_str(), &raw)) {
            // Changed: the whole table re-renders with the new value
            Some(Ok(true)) => return,
            Some(Err(e)) => log::warn!("[INVENTORY] Kept previous {} for {}: {}", field, id, e),
            _ => {}
        }
        event_target::<web_sys::HtmlInputElement>(&ev).set_value(&stored);
    };

    view! {
        <input
            class="inventory-cell"
            type="text"
            data-field=field.as_str()
            value=value
            on:change=commit
        />
    }
}
