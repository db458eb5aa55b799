//! Table State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Components read
//! from the store; only `TableContext` writes to it.

use camera_list::{FilterOptions, ListController, ListView};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::storage::LocalSnapshotStore;

/// Everything the view renders, published after every intent
#[derive(Clone, Debug, Default, Store)]
pub struct TableState {
    /// Current page, counts, selection and load error
    pub list: ListView,
    /// Location/status dropdown choices from the loaded records
    pub options: FilterOptions,
    /// A load or refresh is in flight
    pub loading: bool,
}

/// Type alias for the store
pub type TableStore = Store<TableState>;

/// Get the table store from context
pub fn use_table_store() -> TableStore {
    expect_context::<TableStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Copy the controller's derived state into the store
pub fn store_publish(store: &TableStore, controller: &ListController<LocalSnapshotStore>) {
    *store.list().write() = controller.view().clone();

    let options = controller.filter_options();
    if *store.options().read_untracked() != options {
        *store.options().write() = options;
    }
}

pub fn store_set_loading(store: &TableStore, loading: bool) {
    *store.loading().write() = loading;
}
