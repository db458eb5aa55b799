//! Table Context
//!
//! Owns the list controller and funnels every user intent through it,
//! publishing the recomputed view into the store afterwards.

use camera_list::{DataSource, ListController, Snapshot};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::storage::LocalSnapshotStore;
use crate::store::{store_publish, store_set_loading, TableState, TableStore};

type Controller = ListController<LocalSnapshotStore>;

#[derive(Clone, Copy)]
pub struct TableContext {
    controller: StoredValue<Controller>,
    config: StoredValue<AppConfig>,
    pub store: TableStore,
}

impl TableContext {
    pub fn new(config: AppConfig) -> Self {
        let snapshot = Snapshot::new(LocalSnapshotStore, config.source.snapshot_key.clone());
        let controller = ListController::new(snapshot, config.default_page_size);
        let store = Store::new(TableState {
            list: controller.view().clone(),
            ..Default::default()
        });
        Self {
            controller: StoredValue::new(controller),
            config: StoredValue::new(config),
            store,
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Apply one intent and publish the result
    pub fn dispatch(&self, intent: impl FnOnce(&mut Controller)) {
        let store = self.store;
        self.controller.update_value(|controller| {
            intent(controller);
            store_publish(&store, controller);
        });
    }

    /// Initial load: snapshot first, remote otherwise
    pub fn load(&self) {
        let ctx = *self;
        store_set_loading(&ctx.store, true);
        spawn_local(async move {
            let config = ctx.config();
            let source = DataSource::from_config(&config.source, LocalSnapshotStore);
            let outcome = source.load().await;
            ctx.dispatch(|controller| controller.install(outcome));
            store_set_loading(&ctx.store, false);
        });
    }

    /// Bypass the snapshot and fetch again
    pub fn refresh(&self) {
        let ctx = *self;
        store_set_loading(&ctx.store, true);
        spawn_local(async move {
            let config = ctx.config();
            let source = DataSource::from_config(&config.source, LocalSnapshotStore);
            let result = source.refresh().await;
            ctx.dispatch(|controller| controller.apply_refresh(result));
            store_set_loading(&ctx.store, false);
        });
    }
}

/// Get the table context
pub fn use_table() -> TableContext {
    expect_context::<TableContext>()
}
