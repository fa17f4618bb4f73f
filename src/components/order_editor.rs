//! Order Editor Component
//!
//! Inline form replacing an order's name, price and quantity. Validation
//! matches the add form; a rejected edit changes nothing.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use order_desk_core::{InputField, OrderInput, RecordId};

use crate::context::use_app_context;

#[component]
pub fn OrderEditor(
    id: RecordId,
    initial: OrderInput,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (name, set_name) = signal(initial.name);
    let (price, set_price) = signal(initial.price);
    let (quantity, set_quantity) = signal(initial.quantity);

    let save = move |ev: SubmitEvent| {
        ev.prevent_default();
        let input = OrderInput::new(name.get_untracked(), price.get_untracked(), quantity.get_untracked());
        match ctx.mutate(|t| t.edit_order(id, &input)) {
            Some(Ok(_)) => {
                ctx.clear_invalid();
                on_close.run(());
            }
            Some(Err(e)) => ctx.report(e),
            None => {}
        }
    };

    view! {
        <form class="edit-order-form" on:submit=save>
            <input
                type="text"
                class=move || ctx.input_class(InputField::OrderName)
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="number"
                step="0.01"
                class=move || ctx.input_class(InputField::OrderPrice)
                prop:value=move || price.get()
                on:input=move |ev| set_price.set(event_target_value(&ev))
            />
            <input
                type="number"
                step="1"
                class=move || ctx.input_class(InputField::OrderQuantity)
                prop:value=move || quantity.get()
                on:input=move |ev| set_quantity.set(event_target_value(&ev))
            />
            <button type="submit" class="confirm-btn">"Save"</button>
            <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>"Cancel"</button>
        </form>
    }
}
