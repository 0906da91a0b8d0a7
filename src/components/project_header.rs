//! Project Header Component
//!
//! Editable project name, local-storage info tooltip, theme toggle and PNG
//! export button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, error};
use wasm_bindgen::JsCast;

use gantt_core::config::MAX_PROJECT_NAME_CHARS;
use gantt_core::labels::{char_counter, truncate_chars};
use gantt_core::Theme;

use crate::context::use_app_context;
use crate::export::export_chart;
use crate::store::AppStateStoreFields;

/// Blur the element an event came from (Enter commits an edit)
pub fn blur_target(ev: &web_sys::KeyboardEvent) {
    if let Some(el) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok()) {
        let _ = el.blur();
    }
}

/// Inline project name editor with live counter
#[component]
fn ProjectNameEditor() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (draft, set_draft) = signal(store.project().read_untracked().project_name.clone());

    let commit = move |_| {
        let name = draft.get_untracked();
        ctx.commit(|p| p.rename_project(&name));
        // Blank names restore the previous one
        set_draft.set(store.project().read_untracked().project_name.clone());
    };

    view! {
        <div class="project-name-wrapper">
            <input
                id="project-name-input"
                class="project-name-input"
                type="text"
                maxlength=MAX_PROJECT_NAME_CHARS.to_string()
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(truncate_chars(&event_target_value(&ev), MAX_PROJECT_NAME_CHARS))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        blur_target(&ev);
                    }
                }
                on:blur=commit
            />
            <span class="project-char-counter">
                {move || char_counter(&draft.get(), MAX_PROJECT_NAME_CHARS)}
            </span>
        </div>
    }
}

/// Info button explaining that data stays in this browser
#[component]
fn InfoTooltip() -> impl IntoView {
    use wasm_bindgen::closure::Closure;

    let (open, set_open) = signal(false);

    // Close on any outside click or Escape
    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        set_open.set(false);
    });
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            set_open.set(false);
        }
    });
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    }
    on_click.forget();
    on_keydown.forget();

    view! {
        <button
            class="info-btn"
            title="Almacenamiento"
            on:click=move |ev| {
                ev.stop_propagation();
                set_open.update(|v| *v = !*v);
            }
        >
            "ⓘ"
        </button>
        <div class=move || if open.get() { "info-tooltip show" } else { "info-tooltip" }>
            <div class="tooltip-title">"Almacenamiento Local"</div>
            <div class="tooltip-text">
                "Tus tareas se guardan automáticamente en este navegador. "
                "Si limpias el historial o cambias de navegador, se reiniciará el tablero."
            </div>
            <div class="tooltip-note">"Solo visible para ti en este dispositivo"</div>
        </div>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <label class="theme-switch" title="Tema claro / oscuro">
            <input
                id="theme-toggle"
                type="checkbox"
                prop:checked=move || store.theme().get() == Theme::Light
                on:change=move |_| ctx.set_theme(store.theme().get_untracked().toggled())
            />
            <span class="theme-slider"></span>
        </label>
    }
}

/// Log lines dumped alongside a failed export
const EXPORT_LOG_CONTEXT_LINES: usize = 20;

/// Disabled while an export runs; restored whatever the outcome
#[component]
fn ExportButton() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let on_export = move |_| {
        if store.exporting().get_untracked() {
            return;
        }
        store.exporting().set(true);
        let name = store.project().read_untracked().project_name.clone();
        let config = ctx.config;
        spawn_local(async move {
            if let Err(e) = export_chart(name, config).await {
                let context = rolling_logger::recent_lines(EXPORT_LOG_CONTEXT_LINES);
                error!("export failed: {}", e);
                debug!("log before failed export:\n{}", context.join("\n"));
                if let Some(win) = web_sys::window() {
                    let _ = win.alert_with_message("Error al generar la imagen. Intenta nuevamente.");
                }
            }
            store.exporting().set(false);
        });
    };

    view! {
        <button
            class=move || if store.exporting().get() { "export-btn exporting" } else { "export-btn" }
            prop:disabled=move || store.exporting().get()
            on:click=on_export
        >
            {move || if store.exporting().get() { "⏳ Generando..." } else { "📷 Exportar PNG" }}
        </button>
    }
}

/// Top bar of the app
#[component]
pub fn ProjectHeader() -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="header-title">
                <h1>"GanttRoll"</h1>
                <ProjectNameEditor />
            </div>
            <div class="header-actions">
                <InfoTooltip />
                <ThemeToggle />
                <ExportButton />
            </div>
        </header>
    }
}
