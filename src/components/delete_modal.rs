//! Delete Modal Component
//!
//! Confirm-before-delete dialog for the task in `pending_delete`.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_task_name, AppStateStoreFields};

#[component]
pub fn DeleteModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let close = move || store.pending_delete().set(None);

    let confirm = move |_| {
        if let Some(id) = store.pending_delete().get_untracked() {
            ctx.commit(|p| p.remove_task(id));
        }
        close();
    };

    let message = move || {
        let name = store
            .pending_delete()
            .get()
            .and_then(|id| store_task_name(&store, id))
            .unwrap_or_default();
        format!(
            "¿Estás seguro de que quieres eliminar la tarea \"{}\"? Esta acción no se puede deshacer.",
            name
        )
    };

    view! {
        <Show when=move || store.pending_delete().get().is_some()>
            <div id="delete-modal" class="modal-overlay" on:click=move |_| close()>
                <div class="modal" on:click=move |ev| ev.stop_propagation()>
                    <h3>"Eliminar tarea"</h3>
                    <p id="delete-task-name">{message}</p>
                    <div class="modal-actions">
                        <button id="cancel-delete-btn" class="cancel-btn" on:click=move |_| close()>
                            "Cancelar"
                        </button>
                        <button id="confirm-delete-btn" class="confirm-btn" on:click=confirm>
                            "Eliminar"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
