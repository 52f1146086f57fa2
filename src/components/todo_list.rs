//! Todo List Component
//!
//! Renders the cached collection in server order.

use leptos::prelude::*;

use crate::cache::ListStatus;
use crate::components::TodoItemRow;
use crate::context::use_app_context;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();

    // Only changes of status rebuild the view; rows are kept across refetches
    let status = Memo::new(move |_| ctx.cache.status());

    view! {
        <section class="todo-list-section">
            {move || match status.get() {
                ListStatus::Loading => {
                    view! { <div class="list-status">"Loading..."</div> }.into_any()
                }
                ListStatus::Failed => {
                    view! { <div class="list-status error">"Error..."</div> }.into_any()
                }
                ListStatus::NoData => {
                    view! { <div class="list-status">"No data..."</div> }.into_any()
                }
                ListStatus::Ready => view! {
                    <ul class="todo-list">
                        <For
                            each=move || ctx.cache.items()
                            key=|todo| todo.id
                            children=move |todo| view! { <TodoItemRow item=todo /> }
                        />
                    </ul>
                }.into_any(),
            }}
        </section>
    }
}
