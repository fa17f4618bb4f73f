//! Task Panel Component
//!
//! Add form plus pending and completed task lists.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use order_desk_core::{InputField, RenderTarget, TaskRow};

use crate::context::use_app_context;

#[component]
pub fn TaskPanel() -> impl IntoView {
    let ctx = use_app_context();
    let (new_text, set_new_text) = signal(String::new());

    let add_task = move |ev: SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        match ctx.mutate(|t| t.add_task(&text)) {
            Some(Ok(_)) => {
                set_new_text.set(String::new());
                ctx.clear_invalid();
            }
            Some(Err(e)) => ctx.report(e),
            None => {}
        }
    };

    view! {
        <section class="tasks-section">
            <h2>"Tasks"</h2>
            <form class="add-task-form" on:submit=add_task>
                <input
                    id="taskInput"
                    type="text"
                    placeholder="Add new task..."
                    class=move || ctx.input_class(InputField::TaskText)
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </form>

            <h3>"Pending"</h3>
            <ul id=RenderTarget::PendingTasks.element_id() class="task-list">
                {move || ctx.view.get().tasks.pending.into_iter()
                    .map(|row| view! { <TaskItem row=row /> })
                    .collect_view()}
            </ul>

            <h3>"Completed"</h3>
            <ul id=RenderTarget::CompletedTasks.element_id() class="task-list">
                {move || ctx.view.get().tasks.completed.into_iter()
                    .map(|row| view! { <TaskItem row=row /> })
                    .collect_view()}
            </ul>
        </section>
    }
}

/// A single task row
#[component]
fn TaskItem(row: TaskRow) -> impl IntoView {
    let ctx = use_app_context();
    let id = row.id;

    view! {
        <li
            class=if row.done { "task-item completed" } else { "task-item" }
            data-index=row.index.to_string()
        >
            <span>{row.text}</span>
            <span>
                <button
                    class="complete-btn action-btn"
                    on:click=move |_| { ctx.mutate(|t| t.toggle_task_done(id)); }
                >
                    "✔"
                </button>
                <button
                    class="delete-btn action-btn"
                    on:click=move |_| { ctx.mutate(|t| t.delete_task(id)); }
                >
                    "🗑"
                </button>
            </span>
        </li>
    }
}
