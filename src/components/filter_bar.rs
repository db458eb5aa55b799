//! Filter Bar Component
//!
//! Search box (debounced), location/status dropdowns, refresh and bulk delete.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::use_table;
use crate::store::{use_table_store, TableStateStoreFields};

/// Search input applying `set_search_text` once typing pauses
#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = use_table();
    let debounce_ms = ctx.config().search_debounce_ms;
    // Latest keystroke wins; older timers see a stale ticket and drop out
    let ticket = StoredValue::new(0u64);

    let on_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        let current = ticket.get_value() + 1;
        ticket.set_value(current);
        spawn_local(async move {
            TimeoutFuture::new(debounce_ms).await;
            if ticket.get_value() == current {
                ctx.dispatch(|controller| controller.set_search_text(&text));
            }
        });
    };

    view! {
        <div class="search-bar">
            <input
                type="search"
                class="search-input"
                placeholder="Search"
                autocomplete="off"
                on:input=on_input
            />
            <span class="search-icon">"⌕"</span>
        </div>
    }
}

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_table();
    let store = use_table_store();

    let selected_count = Signal::derive(move || store.list().read().selected_ids.len());

    view! {
        <div class="filters">
            <select
                class="filter-dropdown"
                prop:value=move || store.list().read().filter.location_filter.clone()
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.dispatch(|controller| controller.set_location_filter(&value));
                }
            >
                <option value="">"Location"</option>
                {move || {
                    let locations = store.options().read().locations.clone();
                    locations.into_iter().map(|location| {
                        view! { <option value=location.clone()>{location.clone()}</option> }
                    }).collect_view()
                }}
            </select>
            <select
                class="filter-dropdown"
                prop:value=move || store.list().read().filter.status_filter.clone()
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.dispatch(|controller| controller.set_status_filter(&value));
                }
            >
                <option value="">"Status"</option>
                {move || {
                    let statuses = store.options().read().statuses.clone();
                    statuses.into_iter().map(|status| {
                        view! { <option value=status.clone()>{status.clone()}</option> }
                    }).collect_view()
                }}
            </select>

            <div class="filter-actions">
                <button
                    class="refresh-btn"
                    disabled=move || store.loading().get()
                    on:click=move |_| ctx.refresh()
                >
                    "Refresh"
                </button>
                <DeleteConfirmButton
                    count=selected_count
                    on_decide=move |confirmed: bool| {
                        ctx.dispatch(|controller| {
                            let removed = controller.bulk_delete(confirmed);
                            log::debug!("[FilterBar] Bulk delete confirmed={} removed={}", confirmed, removed);
                        });
                    }
                />
            </div>
        </div>
    }
}
