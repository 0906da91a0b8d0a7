//! Leptos DragDrop Utilities
//!
//! Mouse-event drag and drop for Leptos.
//! Rows are reordered by pressing a handle and moving past a threshold;
//! horizontal gestures get raw pointer tracking on the document.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DropTarget {
    /// Take the slot of this row
    Row(u64),
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u64>>,
    pub dragging_id_write: WriteSignal<Option<u64>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    /// Pending row id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u64>>,
    pub pending_id_write: WriteSignal<Option<u64>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Whether the pointer moved far enough from the press to count as a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// Pair a dragged row with its hovered target; a row is never its own target
pub fn resolve_drop(dragging: Option<u64>, target: Option<DropTarget>) -> Option<(u64, DropTarget)> {
    match (dragging, target) {
        (Some(dragged), Some(DropTarget::Row(id))) if id != dragged => Some((dragged, DropTarget::Row(id))),
        _ => None,
    }
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u64>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (pending_id_read, pending_id_write) = signal(None::<u64>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
}

/// Create mousedown handler for a row's drag handle
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, row_id: u64) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // Keep text selection from following the pointer
            ev.prevent_default();
            dnd.pending_id_write.set(Some(row_id));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dnd.dragging_id_read.get_untracked().is_none() {
            let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_id_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for rows (become drop target)
pub fn make_on_row_mouseenter(dnd: DndSignals, row_id: u64) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_id_read.get_untracked() {
            // Don't allow dropping on self
            if dragging != row_id {
                dnd.drop_target_write.set(Some(DropTarget::Row(row_id)));
            }
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(u64, DropTarget) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dropped = resolve_drop(
            dnd.dragging_id_read.get_untracked(),
            dnd.drop_target_read.get_untracked(),
        );

        end_drag(&dnd);
        if let Some((dragged, target)) = dropped {
            on_drop(dragged, target);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

/// Track the pointer across the whole document.
///
/// `on_move` receives every mousemove's `clientX`, `on_up` every mouseup.
/// Callers keep their own "active" flag; both fire even when idle.
pub fn bind_pointer_tracking<M, U>(on_move: M, on_up: U)
where
    M: Fn(i32) + 'static,
    U: Fn() + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        on_move(ev.client_x());
    });
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        on_up();
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
    on_mouseup.forget();
}
