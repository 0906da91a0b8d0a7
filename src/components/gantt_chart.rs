//! Gantt Chart Component
//!
//! Timeline title, time-scale header and task rows. Owns the document-level
//! listeners for bar gestures and row reordering.

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::JsCast;

use gantt_core::labels::{header_units, timeline_title};

use crate::components::TaskRow;
use crate::context::use_app_context;
use crate::store::{store_unit_width_untracked, AppStateStoreFields, AppStore};

use leptos_dragdrop::*;

const TIME_SCALE_ID: &str = "time-scale";

/// Current pixel width of the time-scale header
fn time_scale_width() -> Option<f64> {
    let el = web_sys::window()?
        .document()?
        .get_element_by_id(TIME_SCALE_ID)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()?;
    Some(f64::from(el.offset_width()))
}

fn measure_viewport(store: AppStore) {
    if let Some(width) = time_scale_width() {
        if width != store.viewport_width().get_untracked() {
            store.viewport_width().set(width);
        }
    }
}

/// Re-measure whenever the window is resized
fn bind_window_resize(store: AppStore) {
    use wasm_bindgen::closure::Closure;

    let on_resize = Closure::<dyn FnMut()>::new(move || measure_viewport(store));
    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }
    on_resize.forget();
}

/// Time-scale header cells
#[component]
fn TimeScale() -> impl IntoView {
    let store = use_app_context().store;

    let units = move || {
        let project = store.project().read();
        header_units(project.current_start_date, project.current_scale)
    };

    view! {
        <div id=TIME_SCALE_ID class="time-scale">
            {move || units().into_iter().map(|unit| {
                let mut class = String::from("time-unit");
                if unit.marker { class.push_str(" marker"); }
                if unit.weekend { class.push_str(" weekend"); }
                view! { <div class=class>{unit.label}</div> }
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn GanttChart() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    // Row reordering
    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |dragged_id, target| match target {
        DropTarget::Row(before_id) => {
            debug!("[DND] Drop row {} onto {}", dragged_id, before_id);
            ctx.commit(|p| p.reorder_task(dragged_id, before_id));
        }
    });

    // Bar drag/resize: live writes on move, one save on release
    bind_pointer_tracking(
        move |x| {
            let gesture = store.gesture().get_untracked();
            if !gesture.is_active() {
                return;
            }
            let unit_width = store_unit_width_untracked(&store);
            gesture.pointer_move(&mut store.project().write(), f64::from(x), unit_width);
        },
        move || {
            if !store.gesture().get_untracked().is_active() {
                return;
            }
            let released = store.gesture().write().release();
            if released.is_some() {
                ctx.persist();
            }
        },
    );

    Effect::new(move |_| measure_viewport(store));
    bind_window_resize(store);

    let title = move || {
        let project = store.project().read();
        timeline_title(project.current_start_date, project.current_scale)
    };
    let task_ids = move || {
        store
            .project()
            .read()
            .tasks
            .iter()
            .map(|t| t.id)
            .collect::<Vec<_>>()
    };

    view! {
        <section class="gantt-timeline">
            <div class="timeline-header">
                <div class="task-column-title">"Tareas"</div>
                <div class="timeline-scale-wrapper">
                    <div id="timeline-title" class="timeline-title">{title}</div>
                    <TimeScale />
                </div>
            </div>
            <div id="tasks-container" class="tasks-container">
                <For
                    each=task_ids
                    key=|id| *id
                    children=move |id| view! { <TaskRow id=id dnd=dnd /> }
                />
            </div>
        </section>
    }
}
