//! Submission confirmation dialog

use leptos::prelude::*;

#[component]
pub fn ConfirmationDialog(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    let on_dismiss_overlay = on_dismiss.clone();
    let on_dismiss_btn = on_dismiss.clone();

    view! {
        <Show when=move || message.get().is_some()>
            <div class="modal-overlay" on:click=move |_| on_dismiss_overlay.run(())>
                <div class="modal" on:click=|e| e.stop_propagation()>
                    <div class="modal-body">
                        <span class="modal-icon">"💗"</span>
                        <p class="modal-message">
                            {move || message.get().unwrap_or_default()}
                        </p>
                    </div>
                    <div class="modal-footer">
                        <button class="btn btn--primary" on:click=move |_| on_dismiss_btn.run(())>
                            "OK"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
