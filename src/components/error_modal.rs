//! Error Modal Component
//!
//! Shows the error channel's message in a modal `<dialog>` rendered on
//! `document.body`. Nothing is in the document while no error is live.

use gloo_timers::callback::Timeout;
use leptos::portal::Portal;
use leptos::prelude::*;

use crate::actions;
use crate::context::{use_error_channel, ErrorSink};

#[component]
pub fn ErrorModal() -> impl IntoView {
    let errors = use_error_channel();
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    // showModal() is a no-op on a node that isn't attached yet, so open it
    // on the next tick after the dialog has been mounted.
    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            Timeout::new(0, move || {
                if dialog.open() {
                    return;
                }
                if let Err(err) = dialog.show_modal() {
                    log::warn!("could not open error dialog: {:?}", err);
                }
            })
            .forget();
        }
    });

    let acknowledge = move |_: web_sys::MouseEvent| {
        actions::acknowledge(&errors, || {
            if let Some(dialog) = dialog_ref.get_untracked() {
                dialog.close();
            }
        });
    };

    view! {
        <Show when=move || errors.is_live()>
            <Portal>
                <dialog
                    class="error-modal"
                    node_ref=dialog_ref
                    // Escape closes the dialog natively; keep the channel in step
                    on:cancel=move |_: web_sys::Event| errors.close_error()
                >
                    <p class="error-message">
                        {move || errors.current_message().unwrap_or_default()}
                    </p>
                    <button class="error-ok-btn" on:click=acknowledge>"OK"</button>
                </dialog>
            </Portal>
        </Show>
    }
}
