//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Never hold a read guard on one field while writing another: all fields
//! share the store's lock.

use leptos::prelude::*;
use reactive_stores::Store;

use gantt_core::timeline::unit_width;
use gantt_core::{Gesture, Project, TaskId, Theme};

/// View-root state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks, scale, window anchor and project name
    pub project: Project,
    pub theme: Theme,
    /// Task awaiting delete confirmation
    pub pending_delete: Option<TaskId>,
    /// Export in progress (button disabled)
    pub exporting: bool,
    /// Active bar drag/resize
    pub gesture: Gesture,
    /// Measured width of the time-scale header in pixels
    pub viewport_width: f64,
}

impl AppState {
    pub fn new(project: Project, theme: Theme) -> Self {
        Self {
            project,
            theme,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Unit width for the active scale (tracked)
pub fn store_unit_width(store: &AppStore) -> f64 {
    let width = store.viewport_width().get();
    let scale = store.project().read().current_scale;
    unit_width(scale, width)
}

/// Unit width for the active scale, without subscribing
pub fn store_unit_width_untracked(store: &AppStore) -> f64 {
    let width = store.viewport_width().get_untracked();
    let scale = store.project().read_untracked().current_scale;
    unit_width(scale, width)
}

/// Name of a task, if it still exists
pub fn store_task_name(store: &AppStore, id: TaskId) -> Option<String> {
    store.project().read().task(id).map(|t| t.name.clone())
}
