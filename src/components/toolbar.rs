//! Toolbar Component
//!
//! Add task, scale switcher and date navigation.

use leptos::prelude::*;

use gantt_core::labels::range_text;
use gantt_core::{Scale, TaskSeed};

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Entropy for a new task: clock millis for the id, `Math.random()` for color
fn browser_seed() -> TaskSeed {
    TaskSeed::new(js_sys::Date::now() as u64, js_sys::Math::random())
}

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let add_task = move |_| {
        ctx.commit(|p| {
            p.add_task(browser_seed());
            true
        });
    };

    let navigate = move |direction: i32| {
        ctx.commit(|p| {
            p.navigate(direction);
            true
        });
    };

    let go_today = move |_| {
        let today = chrono::Local::now().date_naive();
        ctx.commit(|p| {
            p.reset_to_today(today);
            true
        });
    };

    let range = move || {
        let project = store.project().read();
        range_text(project.current_start_date, project.current_scale)
    };

    view! {
        <div class="toolbar">
            <button id="add-task-btn" class="add-task-btn" on:click=add_task>"+ Nueva tarea"</button>

            <div class="scale-selector">
                {Scale::ALL.iter().map(|&scale| {
                    let is_active = move || store.project().read().current_scale == scale;
                    view! {
                        <button
                            class=move || if is_active() { "scale-btn active" } else { "scale-btn" }
                            data-scale=scale.as_str()
                            on:click=move |_| {
                                ctx.commit(|p| p.set_scale(scale.as_str()));
                            }
                        >
                            {scale.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="date-navigation">
                <button id="prev-date-btn" class="nav-btn" on:click=move |_| navigate(-1)>"‹"</button>
                <button id="today-btn" class="nav-btn today" on:click=go_today>"Hoy"</button>
                <button id="next-date-btn" class="nav-btn" on:click=move |_| navigate(1)>"›"</button>
                <span id="current-range" class="current-range">{range}</span>
            </div>
        </div>
    }
}
