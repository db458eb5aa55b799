//! Camera Table App
//!
//! Root component: builds the table context and triggers the initial load.

use leptos::prelude::*;

use crate::components::CameraTable;
use crate::config::AppConfig;
use crate::context::TableContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = TableContext::new(config);

    // Provide context to all children
    provide_context(ctx);
    provide_context(ctx.store);

    // Load cameras on mount
    Effect::new(move |_| {
        log::debug!("[APP] Loading cameras");
        ctx.load();
    });

    view! {
        <main class="camera-app">
            <CameraTable />
        </main>
    }
}
