//! Task Row Component
//!
//! Left info cell (handle, color, name, delete) and the bar on the timeline.

use leptos::prelude::*;

use gantt_core::config::MAX_TASK_NAME_CHARS;
use gantt_core::labels::{char_counter, truncate_chars};
use gantt_core::timeline::pixels_for_task;
use gantt_core::TaskId;

use crate::components::project_header::blur_target;
use crate::context::use_app_context;
use crate::store::{store_unit_width, AppStateStoreFields, AppStore};

use leptos_dragdrop::*;

/// Which gesture a press on the bar starts
#[derive(Clone, Copy, PartialEq)]
enum BarHit {
    Body,
    RightEdge,
}

#[component]
pub fn TaskRow(id: TaskId, dnd: DndSignals) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (draft, set_draft) = signal(name_untracked(store, id));

    let color = move || {
        store
            .project()
            .read()
            .task(id)
            .map(|t| t.color.clone())
            .unwrap_or_default()
    };
    let name = move || {
        store
            .project()
            .read()
            .task(id)
            .map(|t| t.name.clone())
            .unwrap_or_default()
    };

    let bar_style = move || {
        let unit_width = store_unit_width(&store);
        let project = store.project().read();
        let scale = project.current_scale;
        let Some(task) = project.task(id) else {
            return String::new();
        };
        let geometry = pixels_for_task(task.state(scale), unit_width);
        format!(
            "left: {}px; width: {}px; background: {};",
            geometry.left_px.round(),
            geometry.width_px.round(),
            task.color
        )
    };

    let commit_name = move |_| {
        let value = draft.get_untracked();
        ctx.commit(|p| p.rename_task(id, &value));
        // Show the stored (trimmed) name, or the old one if rejected
        set_draft.set(name_untracked(store, id));
    };

    let start_gesture = move |ev: web_sys::MouseEvent, hit: BarHit| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        let mut gesture = store.gesture().get_untracked();
        let x = f64::from(ev.client_x());
        let started = {
            let project = store.project().read_untracked();
            match hit {
                BarHit::Body => gesture.begin_drag(&project, id, x),
                BarHit::RightEdge => gesture.begin_resize(&project, id, x),
            }
        };
        if started {
            store.gesture().set(gesture);
        }
    };

    let row_class = move || {
        let mut c = String::from("task-row");
        if dnd.dragging_id_read.get() == Some(id) { c.push_str(" dragging-vertical"); }
        if dnd.drop_target_read.get() == Some(DropTarget::Row(id)) { c.push_str(" drop-zone"); }
        c
    };
    let bar_class = move || {
        if store.gesture().get().task() == Some(id) { "task-bar dragging" } else { "task-bar" }
    };

    view! {
        <div
            class=row_class
            data-task-id=id.to_string()
            on:mouseenter=make_on_row_mouseenter(dnd, id)
            on:mouseleave=make_on_mouseleave(dnd)
        >
            <div class="task-info">
                <div class="drag-handle" title="Arrastrar para reordenar" on:mousedown=make_on_mousedown(dnd, id)>
                    "⋮⋮"
                </div>
                <input
                    type="color"
                    class="color-picker"
                    prop:value=color
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.commit(|p| p.recolor_task(id, &value));
                    }
                />
                <input
                    type="text"
                    class="task-name"
                    maxlength=MAX_TASK_NAME_CHARS.to_string()
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(truncate_chars(&event_target_value(&ev), MAX_TASK_NAME_CHARS))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            blur_target(&ev);
                        }
                    }
                    on:blur=commit_name
                />
                <div class="char-counter">{move || char_counter(&draft.get(), MAX_TASK_NAME_CHARS)}</div>
                <button class="delete-btn" title="Eliminar" on:click=move |_| store.pending_delete().set(Some(id))>
                    "×"
                </button>
            </div>

            <div class="task-bar-container">
                <div
                    class=bar_class
                    style=bar_style
                    on:mousedown=move |ev| start_gesture(ev, BarHit::Body)
                >
                    <span class="task-bar-label">{name}</span>
                    <div
                        class="resize-handle right"
                        on:mousedown=move |ev| start_gesture(ev, BarHit::RightEdge)
                    ></div>
                </div>
            </div>
        </div>
    }
}

fn name_untracked(store: AppStore, id: TaskId) -> String {
    store
        .project()
        .read_untracked()
        .task(id)
        .map(|t| t.name.clone())
        .unwrap_or_default()
}
