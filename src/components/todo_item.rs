//! Todo Item Component
//!
//! One row of the list: checkbox, title (or title input while editing),
//! edit and delete buttons.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::editor::ItemEditor;
use crate::models::{TodoItem, TodoPayload};

/// A single todo row
#[component]
pub fn TodoItemRow(item: TodoItem) -> impl IntoView {
    let ctx = use_app_context();

    let id = item.id;
    let checkbox_id = format!("todo{}", id);
    let label_for = checkbox_id.clone();
    let editor = RwSignal::new(ItemEditor::new(item));
    let title_input = NodeRef::<leptos::html::Input>::new();

    // Follow the cache; the row keeps its own state only while a request is pending
    Effect::new(move |_| {
        if let Some(latest) = ctx.cache.item(id) {
            editor.update(|e| e.sync(latest));
        }
    });

    // The title input only exists while editing
    Effect::new(move |_| {
        if let Some(input) = title_input.get() {
            let _ = input.focus();
        }
    });

    let send_update = move |payload: TodoPayload| {
        let known = editor.with_untracked(|e| e.server().clone());
        spawn_local(async move {
            let result = ctx.api().update(&known, &payload).await;
            actions::finish_update(result, &ctx.errors, &ctx.cache, || {
                editor.update(|e| e.rollback())
            });
        });
    };

    let commit = move || {
        if let Some(payload) = editor.try_update(|e| e.commit()).flatten() {
            send_update(payload);
        }
    };

    let delete = move |_: web_sys::MouseEvent| {
        spawn_local(async move {
            let result = ctx.api().delete(id).await;
            ctx.settle("delete", result);
        });
    };

    view! {
        <li class="todo-item">
            <div class="todo-main">
                <input
                    id=checkbox_id
                    type="checkbox"
                    class="todo-checkbox"
                    prop:checked=move || editor.with(|e| e.is_complete())
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        if let Some(payload) = editor.try_update(|e| e.toggle(checked)) {
                            send_update(payload);
                        }
                    }
                />
                <Show
                    when=move || editor.with(|e| e.is_editing())
                    fallback=move || view! {
                        <label for=label_for.clone() class="todo-title">
                            {move || editor.with(|e| e.displayed_title().to_string())}
                        </label>
                    }
                >
                    <input
                        type="text"
                        class="todo-title-input"
                        node_ref=title_input
                        prop:value=move || editor.with(|e| e.draft().title.clone())
                        on:input=move |ev| editor.update(|e| e.set_title(event_target_value(&ev)))
                        on:blur=move |_| commit()
                    />
                </Show>
            </div>
            <div class="todo-actions">
                <button class="edit-btn" on:click=move |_| editor.update(|e| e.begin_edit())>
                    "Edit"
                </button>
                <button class="delete-btn" on:click=delete>"Delete"</button>
            </div>
        </li>
    }
}
