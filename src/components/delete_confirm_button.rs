//! Delete Confirm Button Component
//!
//! Inline confirmation for bulk delete. The core never prompts; this button
//! decides the `confirmed` flag.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows a "Delete" button initially. When clicked, shows "Delete N?" with ✓/✗ buttons.
///
/// # Arguments
/// * `count` - Number of records the delete would remove; the button is disabled at 0
/// * `on_decide` - Called with `true` on confirm, `false` on cancel
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] count: Signal<usize>,
    #[prop(into)] on_decide: Callback<bool>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class="delete-btn"
                disabled=move || count.get() == 0
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                {move || format!("Delete ({})", count.get())}
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">{move || format!("Delete {}?", count.get())}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_decide.run(true);
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_decide.run(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
