use std::sync::Arc;

use leptos::prelude::*;

use crate::models::Task;

/// The task list mirror rendered as cards. Re-renders whenever the mirror
/// signal is replaced by a refetch.
///
/// The callbacks are captured by the reactive children closure below, so
/// they have to be `Send` like the closure itself.
#[component]
pub fn TaskList(
    tasks: ReadSignal<Vec<Task>>,
    on_toggle: Arc<dyn Fn(Task) + Send + Sync + 'static>,
    on_edit: Arc<dyn Fn(Task) + Send + Sync + 'static>,
    on_delete: Arc<dyn Fn(i64) + Send + Sync + 'static>,
) -> impl IntoView {
    view! {
        <div class="task-list">
            {move || {
                tasks.with(|tasks| {
                    tasks
                        .iter()
                        .cloned()
                        .map(|task| {
                            // Each handler closure needs its own copy of the task
                            let task_for_toggle = task.clone();
                            let task_for_edit = task.clone();
                            let task_id = task.id;
                            let toggle = on_toggle.clone();
                            let edit = on_edit.clone();
                            let delete = on_delete.clone();

                            view! {
                                <article class="task-card">
                                    <input
                                        type="checkbox"
                                        class="task-checkbox"
                                        prop:checked=task.completed
                                        on:change=move |_| toggle(task_for_toggle.clone())
                                    />
                                    <div class="task-content">
                                        <h3 class="task-title" class:completed=task.completed>
                                            {task.title.clone()}
                                        </h3>
                                        <p class="task-description">{task.description.clone()}</p>
                                        <span class=format!(
                                            "status-chip {}",
                                            if task.completed { "success" } else { "warning" },
                                        )>{task.status_label()}</span>
                                    </div>
                                    <div class="task-actions">
                                        <button
                                            class="icon-btn edit-btn"
                                            title="Edit task"
                                            on:click=move |_| edit(task_for_edit.clone())
                                        >
                                            "✎"
                                        </button>
                                        <button
                                            class="icon-btn delete-btn"
                                            title="Delete task"
                                            on:click=move |_| {
                                                // A task fresh from the server always has an id;
                                                // guard anyway rather than panic.
                                                if let Some(id) = task_id {
                                                    delete(id);
                                                }
                                            }
                                        >
                                            "🗑"
                                        </button>
                                    </div>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()
                })
            }}
        </div>
    }
}
