//! Order Panel Component
//!
//! Add form, section counters, and pending/completed order lists with
//! toggle, inline edit and delete actions.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use order_desk_core::{Counter, InputField, OrderInput, OrderRow, RecordId, RenderTarget};

use super::OrderEditor;
use crate::context::use_app_context;

const SECTION_COUNTERS: [Counter; 3] = [Counter::OrdersTotal, Counter::OrdersCompleted, Counter::OrdersPending];

#[component]
pub fn OrderPanel() -> impl IntoView {
    let ctx = use_app_context();
    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (editing, set_editing) = signal(None::<RecordId>);

    let add_order = move |ev: SubmitEvent| {
        ev.prevent_default();
        let input = OrderInput::new(name.get_untracked(), price.get_untracked(), quantity.get_untracked());
        match ctx.mutate(|t| t.add_order(&input)) {
            Some(Ok(_)) => {
                set_name.set(String::new());
                set_price.set(String::new());
                set_quantity.set(String::new());
                ctx.clear_invalid();
            }
            Some(Err(e)) => ctx.report(e),
            None => {}
        }
    };

    let order_rows = move |rows: Vec<OrderRow>| {
        rows.into_iter()
            .map(|row| view! { <OrderItem row=row editing=editing set_editing=set_editing /> })
            .collect_view()
    };

    view! {
        <section class="orders-section" id="orders">
            <h2>"Orders"</h2>

            <div class="order-counters">
                {SECTION_COUNTERS.iter().filter_map(|&counter| {
                    counter.section_element_id().map(|element_id| view! {
                        <span class="order-counter">
                            {counter.label()} ": "
                            <strong id=element_id>{move || ctx.view.get().dashboard.value(counter)}</strong>
                        </span>
                    })
                }).collect_view()}
            </div>

            <form class="add-order-form" on:submit=add_order>
                <input
                    id="orderInput"
                    type="text"
                    placeholder="Order name"
                    class=move || ctx.input_class(InputField::OrderName)
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    id="orderPrice"
                    type="number"
                    step="0.01"
                    placeholder="Price"
                    class=move || ctx.input_class(InputField::OrderPrice)
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                />
                <input
                    id="orderQuantity"
                    type="number"
                    step="1"
                    placeholder="Quantity"
                    class=move || ctx.input_class(InputField::OrderQuantity)
                    prop:value=move || quantity.get()
                    on:input=move |ev| set_quantity.set(event_target_value(&ev))
                />
                <button type="submit">"Add Order"</button>
            </form>

            <h3>"Pending"</h3>
            <ul id=RenderTarget::PendingOrders.element_id() class="order-list">
                {move || order_rows(ctx.view.get().orders.pending)}
            </ul>

            <h3>"Completed"</h3>
            <ul id=RenderTarget::CompletedOrders.element_id() class="order-list">
                {move || order_rows(ctx.view.get().orders.completed)}
            </ul>
        </section>
    }
}

/// A single order row; swaps to the inline editor while editing
#[component]
fn OrderItem(
    row: OrderRow,
    editing: ReadSignal<Option<RecordId>>,
    set_editing: WriteSignal<Option<RecordId>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let id = row.id;
    let initial = OrderInput::new(row.text.clone(), row.price.to_string(), row.quantity.to_string());

    view! {
        <li
            class=if row.done { "completed-order" } else { "" }
            data-index=row.index.to_string()
        >
            <Show
                when=move || editing.get() == Some(id)
                fallback=move || view! {
                    <div class="order-summary">{row.label.clone()}</div>
                }
            >
                <OrderEditor
                    id=id
                    initial=initial.clone()
                    on_close=move |_: ()| set_editing.set(None)
                />
            </Show>
            <div class="order-actions">
                <button
                    class="complete-btn action-btn"
                    on:click=move |_| { ctx.mutate(|t| t.toggle_order_done(id)); }
                >
                    "✔"
                </button>
                <button
                    class="edit-btn action-btn"
                    on:click=move |_| set_editing.set(Some(id))
                >
                    "✎"
                </button>
                <button
                    class="delete-btn action-btn"
                    on:click=move |_| {
                        set_editing.set(None);
                        ctx.mutate(|t| t.delete_order(id));
                    }
                >
                    "🗑"
                </button>
            </div>
        </li>
    }
}
