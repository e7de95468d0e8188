use leptos::prelude::*;

use crate::components::{EditTaskModal, TaskForm, TaskList, Toast};
use crate::context::provide_notifications;
use crate::hooks::use_tasks;

#[component]
pub fn App() -> impl IntoView {
    let notify = provide_notifications();
    let hook = use_tasks(notify);

    view! {
        <main class="app">
            <h1 class="app-title">"Task Manager"</h1>
            <TaskForm draft=hook.draft on_create=hook.create_task />
            <TaskList
                tasks=hook.tasks
                on_toggle=hook.toggle_complete
                on_edit=hook.open_edit
                on_delete=hook.delete_task
            />
            <EditTaskModal
                editing=hook.editing
                dialog_open=hook.dialog_open
                on_save=hook.save_task
                on_cancel=hook.close_edit
            />
            <Toast />
        </main>
    }
}
