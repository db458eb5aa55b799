//! Pagination Bar Component
//!
//! Page-size choice, "start-end of total" label and first/prev/next/last.

use camera_list::parse_clamped;
use leptos::prelude::*;

use crate::context::use_table;
use crate::store::{use_table_store, TableStateStoreFields};

#[component]
pub fn PaginationBar() -> impl IntoView {
    let ctx = use_table();
    let store = use_table_store();
    let page_size_options = ctx.config().page_size_options;

    let no_previous = move || !store.list().read().can_go_previous;
    let no_next = move || !store.list().read().can_go_next;

    view! {
        <div class="pagination">
            <select
                class="page-size"
                prop:value=move || store.list().read().items_per_page.to_string()
                on:change=move |ev| {
                    let size = parse_clamped(&event_target_value(&ev));
                    ctx.dispatch(|controller| controller.set_page_size(size));
                }
            >
                {page_size_options.into_iter().map(|size| {
                    view! { <option value=size.to_string()>{size.to_string()}</option> }
                }).collect_view()}
            </select>
            <span class="page-range">{move || store.list().read().range_label()}</span>
            <button class="page-btn" title="First page" disabled=no_previous
                on:click=move |_| ctx.dispatch(|controller| controller.first_page())>
                "«"
            </button>
            <button class="page-btn" title="Previous page" disabled=no_previous
                on:click=move |_| ctx.dispatch(|controller| controller.previous_page())>
                "‹"
            </button>
            <button class="page-btn" title="Next page" disabled=no_next
                on:click=move |_| ctx.dispatch(|controller| controller.next_page())>
                "›"
            </button>
            <button class="page-btn" title="Last page" disabled=no_next
                on:click=move |_| ctx.dispatch(|controller| controller.last_page())>
                "»"
            </button>
        </div>
    }
}
