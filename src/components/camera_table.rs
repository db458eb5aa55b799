//! Camera Table Component
//!
//! Header, filters, the current page of cameras and the pagination bar.

use leptos::prelude::*;

use crate::components::{CameraRow, FilterBar, PaginationBar, SearchBox};
use crate::context::use_table;
use crate::store::{use_table_store, TableStateStoreFields};

#[component]
pub fn CameraTable() -> impl IntoView {
    let ctx = use_table();
    let store = use_table_store();

    let is_empty = move || !store.loading().get() && store.list().read().visible_records.is_empty();

    view! {
        <div class="camera-table">
            <header class="table-header">
                <div class="title-section">
                    <h2 class="title">"Cameras"</h2>
                    <p class="subtitle">"Manage your cameras here."</p>
                </div>
                <SearchBox />
            </header>

            <FilterBar />

            {move || store.list().read().load_error.clone().map(|e| view! {
                <div class="load-error">{format!("Could not load cameras: {}", e)}</div>
            })}

            <div class="table-scroll">
                <table class="cameras">
                    <thead>
                        <tr>
                            <th>
                                <input
                                    type="checkbox"
                                    title="Select page"
                                    prop:checked=move || store.list().read().all_visible_selected
                                    on:change=move |_| ctx.dispatch(|controller| controller.toggle_visible_selection())
                                />
                                " Name"
                            </th>
                            <th>"Health"</th>
                            <th>"Location"</th>
                            <th>"Recorder"</th>
                            <th>"Tasks"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.list().read().visible_records.clone()
                            // Whole record as key: an edited camera with the same id re-renders
                            key=|record| record.clone()
                            children=move |record| view! { <CameraRow record=record /> }
                        />
                    </tbody>
                </table>
            </div>

            <Show when=move || store.loading().get()>
                <div class="loading">"Loading..."</div>
            </Show>
            <Show when=is_empty>
                <div class="empty">"No cameras found"</div>
            </Show>

            <PaginationBar />
        </div>
    }
}
