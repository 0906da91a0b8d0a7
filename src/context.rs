//! Application Context
//!
//! Store handle and configuration provided via Leptos Context API, with the
//! mutate-then-persist helpers every handler goes through.

use leptos::prelude::*;
use log::warn;

use gantt_core::persistence::{save_project, save_theme};
use gantt_core::{AppConfig, Project, Theme};

use crate::storage::LocalStorage;
use crate::store::{AppStateStoreFields, AppStore};
use crate::theme::apply_theme;

#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig) -> Self {
        Self { store, config }
    }

    /// Run a project mutation; persist when it reports a change
    pub fn commit<F>(&self, mutate: F) -> bool
    where
        F: FnOnce(&mut Project) -> bool,
    {
        let changed = mutate(&mut self.store.project().write());
        if changed {
            self.persist();
        }
        changed
    }

    /// Write the current project to local storage
    pub fn persist(&self) {
        let project = self.store.project().read_untracked();
        if let Err(e) = save_project(&LocalStorage, &project) {
            warn!("failed to save project: {}", e);
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.store.theme().set(theme);
        apply_theme(theme);
        if let Err(e) = save_theme(&LocalStorage, theme) {
            warn!("failed to save theme: {}", e);
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
