//! Todo Composer Component
//!
//! Form for creating new todos.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::composer::InputDraft;
use crate::context::use_app_context;

/// Form for creating a new todo
#[component]
pub fn TodoComposer() -> impl IntoView {
    let ctx = use_app_context();
    let draft = RwSignal::new(InputDraft::default());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = draft.with_untracked(|d| d.title().to_string());

        spawn_local(async move {
            let result = ctx.api().create(&title).await;
            actions::finish_create(result, &ctx.errors, &ctx.cache, || {
                draft.update(|d| d.clear())
            });
        });
    };

    view! {
        <form class="todo-composer" on:submit=create_todo>
            <input
                type="text"
                class="todo-composer-input"
                placeholder="Add a new todo..."
                prop:value=move || draft.with(|d| d.title().to_string())
                on:input=move |ev| draft.update(|d| d.set_title(event_target_value(&ev)))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
