//! GanttRoll Frontend App
//!
//! Root component: loads the saved project, owns the store and provides it to
//! every child through context.

use leptos::prelude::*;
use log::info;
use reactive_stores::Store;

use gantt_core::persistence::{load_project, load_theme};
use gantt_core::{AppConfig, Project};

use crate::components::{DeleteModal, GanttChart, ProjectHeader, Toolbar};
use crate::context::AppContext;
use crate::storage::LocalStorage;
use crate::store::AppState;
use crate::theme::apply_theme;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();

    let project = load_project(&LocalStorage, Project::default());
    let theme = load_theme(&LocalStorage);
    apply_theme(theme);
    info!("[APP] Starting with {} tasks, scale={}", project.tasks.len(), project.current_scale);

    let store = Store::new(AppState::new(project, theme));
    provide_context(AppContext::new(store, config));

    view! {
        <div class="app-container">
            <ProjectHeader />
            <Toolbar />
            <GanttChart />
            <DeleteModal />
        </div>
    }
}
