//! Selection Tracker
//!
//! Checked record ids, kept independently of the current page and filter.

use std::collections::BTreeSet;

use crate::models::CameraId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: BTreeSet<CameraId>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership; returns whether `id` is selected afterwards
    pub fn toggle(&mut self, id: &CameraId) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.clone());
            true
        }
    }

    pub fn select(&mut self, id: &CameraId) {
        self.selected.insert(id.clone());
    }

    pub fn deselect(&mut self, id: &CameraId) {
        self.selected.remove(id);
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, id: &CameraId) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_ids(&self) -> &BTreeSet<CameraId> {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Drop every id for which `keep` returns false
    pub fn retain(&mut self, mut keep: impl FnMut(&CameraId) -> bool) {
        self.selected.retain(|id| keep(id));
    }
}
