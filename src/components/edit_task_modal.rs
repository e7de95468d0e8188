use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;

use crate::models::Task;

/// Edit dialog for an existing task. Stays mounted the whole time; the
/// `dialog_open` flag only toggles its visibility, and the inputs write
/// straight into the shared working copy in `editing`.
#[component]
pub fn EditTaskModal(
    editing: RwSignal<Option<Task>>,
    dialog_open: RwSignal<bool>,
    on_save: Box<dyn Fn() + 'static>,
    on_cancel: Arc<dyn Fn() + Send + Sync + 'static>,
) -> impl IntoView {
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_save();
    };

    let close_modal_x = {
        let on_cancel = on_cancel.clone();
        move |_| on_cancel()
    };
    let close_modal_cancel = move |_| on_cancel();

    view! {
        <div class="modal-overlay" class:open=move || dialog_open.get()>
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"EDIT TASK"</h3>
                    <button type="button" class="modal-close" on:click=close_modal_x>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"TITLE"</label>
                        <input
                            type="text"
                            placeholder="Task title..."
                            prop:value=move || {
                                editing.with(|editing| {
                                    editing
                                        .as_ref()
                                        .map(|task| task.title.clone())
                                        .unwrap_or_default()
                                })
                            }
                            on:input=move |ev| {
                                editing.update(|editing| {
                                    if let Some(task) = editing {
                                        task.title = event_target_value(&ev);
                                    }
                                })
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label>"DESCRIPTION"</label>
                        <textarea
                            placeholder="Task description..."
                            rows="4"
                            prop:value=move || {
                                editing.with(|editing| {
                                    editing
                                        .as_ref()
                                        .map(|task| task.description.clone())
                                        .unwrap_or_default()
                                })
                            }
                            on:input=move |ev| {
                                editing.update(|editing| {
                                    if let Some(task) = editing {
                                        task.description = event_target_value(&ev);
                                    }
                                })
                            }
                        ></textarea>
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal_cancel>
                            "CANCEL"
                        </button>
                        <button type="submit" class="btn-primary">"SAVE CHANGES"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
