//! List Controller
//!
//! Owns the full record list together with the filter, page and selection
//! state. Every intent updates the inputs and recomputes the derived
//! [`ListView`] wholesale.

use std::collections::BTreeSet;

use crate::error::FetchResult;
use crate::filter::{self, FilterOptions, FilterState};
use crate::models::{CameraId, CameraRecord};
use crate::paginate::{self, PageState};
use crate::selection::SelectionTracker;
use crate::snapshot::{Snapshot, SnapshotStore};
use crate::source::LoadOutcome;

/// Read-only state handed to the view after every intent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListView {
    pub visible_records: Vec<CameraRecord>,
    /// Length of the filtered list
    pub total_items: usize,
    /// Length of the full, unfiltered list
    pub record_count: usize,
    pub total_pages: usize,
    pub range_start: usize,
    pub range_end: usize,
    pub current_page: usize,
    pub items_per_page: usize,
    pub selected_ids: BTreeSet<CameraId>,
    pub load_error: Option<String>,
    pub filter: FilterState,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub all_visible_selected: bool,
}

impl ListView {
    pub fn is_selected(&self, id: &CameraId) -> bool {
        self.selected_ids.contains(id)
    }

    /// "start-end of total" label for the pagination bar
    pub fn range_label(&self) -> String {
        format!("{}-{} of {}", self.range_start, self.range_end, self.total_items)
    }
}

pub struct ListController<S> {
    records: Vec<CameraRecord>,
    filter: FilterState,
    page: PageState,
    selection: SelectionTracker,
    snapshot: Snapshot<S>,
    load_error: Option<String>,
    filtered: Vec<CameraRecord>,
    view: ListView,
}

impl<S: SnapshotStore> ListController<S> {
    pub fn new(snapshot: Snapshot<S>, items_per_page: usize) -> Self {
        let mut controller = Self {
            records: Vec::new(),
            filter: FilterState::default(),
            page: PageState::new(items_per_page),
            selection: SelectionTracker::new(),
            snapshot,
            load_error: None,
            filtered: Vec::new(),
            view: ListView::default(),
        };
        controller.refilter();
        controller
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    pub fn records(&self) -> &[CameraRecord] {
        &self.records
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    /// Dropdown choices for the location and status filters
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_records(&self.records)
    }

    // ========================
    // Loading
    // ========================

    /// Install the result of the initial load
    pub fn install(&mut self, outcome: LoadOutcome) {
        self.load_error = outcome.error.map(|e| e.to_string());
        self.replace_records(outcome.records);
    }

    /// Install the result of an explicit refresh; failures keep current records
    pub fn apply_refresh(&mut self, result: FetchResult<Vec<CameraRecord>>) {
        match result {
            Ok(records) => {
                self.load_error = None;
                self.replace_records(records);
            }
            Err(e) => {
                self.load_error = Some(e.to_string());
                self.rebuild_view();
            }
        }
    }

    fn replace_records(&mut self, records: Vec<CameraRecord>) {
        self.records = records;
        self.prune_selection();
        self.page.current_page = 1;
        self.refilter();
    }

    // ========================
    // Filter intents
    // ========================

    pub fn set_search_text(&mut self, text: &str) {
        if self.filter.search_text != text {
            self.filter.search_text = text.to_string();
            self.on_filter_changed();
        }
    }

    pub fn set_location_filter(&mut self, value: &str) {
        if self.filter.location_filter != value {
            self.filter.location_filter = value.to_string();
            self.on_filter_changed();
        }
    }

    pub fn set_status_filter(&mut self, value: &str) {
        if self.filter.status_filter != value {
            self.filter.status_filter = value.to_string();
            self.on_filter_changed();
        }
    }

    fn on_filter_changed(&mut self) {
        self.page.current_page = 1;
        self.refilter();
    }

    // ========================
    // Page intents
    // ========================

    pub fn set_page(&mut self, n: i64) {
        let total = self.view.total_pages;
        self.page.set_page(n, total);
        self.rebuild_view();
    }

    pub fn set_page_size(&mut self, n: i64) {
        self.page.set_page_size(n);
        self.rebuild_view();
    }

    pub fn first_page(&mut self) {
        let total = self.view.total_pages;
        self.page.first(total);
        self.rebuild_view();
    }

    pub fn previous_page(&mut self) {
        let total = self.view.total_pages;
        self.page.previous(total);
        self.rebuild_view();
    }

    pub fn next_page(&mut self) {
        let total = self.view.total_pages;
        self.page.next(total);
        self.rebuild_view();
    }

    pub fn last_page(&mut self) {
        let total = self.view.total_pages;
        self.page.last(total);
        self.rebuild_view();
    }

    // ========================
    // Selection intents
    // ========================

    /// Flip selection of a loaded record; unknown ids are ignored
    pub fn toggle_selection(&mut self, id: &CameraId) {
        if !self.records.iter().any(|r| &r.id == id) {
            log::debug!("[controller] Ignoring toggle for unknown camera {}", id);
            return;
        }
        self.selection.toggle(id);
        self.rebuild_view();
    }

    /// Select every visible record, or deselect them if all already are
    pub fn toggle_visible_selection(&mut self) {
        let all_selected = self.view.all_visible_selected;
        for record in &self.view.visible_records {
            if all_selected {
                self.selection.deselect(&record.id);
            } else {
                self.selection.select(&record.id);
            }
        }
        self.rebuild_view();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.rebuild_view();
    }

    /// Remove every selected record. Returns how many were removed.
    ///
    /// Unconfirmed or empty-selection calls change nothing.
    pub fn bulk_delete(&mut self, confirmed: bool) -> usize {
        if !confirmed || self.selection.is_empty() {
            return 0;
        }

        let before = self.records.len();
        let selection = &self.selection;
        self.records.retain(|record| !selection.is_selected(&record.id));
        let removed = before - self.records.len();
        self.selection.clear();

        if let Err(e) = self.snapshot.write(&self.records) {
            log::warn!("[controller] Failed to update snapshot after delete: {}", e);
        }
        log::info!("[controller] Deleted {} cameras, {} remain", removed, self.records.len());

        self.refilter();
        removed
    }

    // ========================
    // Recompute
    // ========================

    fn prune_selection(&mut self) {
        let records = &self.records;
        self.selection.retain(|id| records.iter().any(|r| &r.id == id));
    }

    fn refilter(&mut self) {
        self.filtered = filter::apply(&self.records, &self.filter);
        log::debug!(
            "[controller] {} of {} cameras match filter",
            self.filtered.len(),
            self.records.len()
        );
        self.rebuild_view();
    }

    fn rebuild_view(&mut self) {
        let total_pages = paginate::total_pages(self.filtered.len(), self.page.items_per_page);
        self.page.clamp(total_pages);
        let page = paginate::page(&self.filtered, &self.page);

        let all_visible_selected = !page.visible.is_empty()
            && page.visible.iter().all(|r| self.selection.is_selected(&r.id));

        self.view = ListView {
            visible_records: page.visible.to_vec(),
            total_items: self.filtered.len(),
            record_count: self.records.len(),
            total_pages: page.total_pages,
            range_start: page.range_start,
            range_end: page.range_end,
            current_page: self.page.current_page,
            items_per_page: self.page.items_per_page,
            selected_ids: self.selection.selected_ids().clone(),
            load_error: self.load_error.clone(),
            filter: self.filter.clone(),
            can_go_previous: page.total_pages > 0 && self.page.current_page > 1,
            can_go_next: self.page.current_page < page.total_pages,
            all_visible_selected,
        };
    }
}
