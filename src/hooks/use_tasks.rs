use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::NotifyHandle;
use crate::models::Task;
use crate::services::task_operations::{
    close_edit_dialog, open_edit_dialog, refresh_tasks, remove_task, save_edited_task,
    submit_new_task, toggle_complete,
};

/// Everything the board needs: the list mirror, the two drafts, the dialog
/// flag, and the operations wired to them.
///
/// The per-row callables are `Arc<dyn Fn + Send + Sync>` rather than `Rc`:
/// the list component invokes them from inside its reactive children
/// closure, and the renderer requires that closure to be `Send`.
pub struct TasksHook {
    pub tasks: ReadSignal<Vec<Task>>,
    pub draft: RwSignal<Task>,
    pub editing: RwSignal<Option<Task>>,
    pub dialog_open: RwSignal<bool>,
    pub create_task: Box<dyn Fn() + 'static>,
    pub save_task: Box<dyn Fn() + 'static>,
    pub delete_task: Arc<dyn Fn(i64) + Send + Sync + 'static>,
    pub toggle_complete: Arc<dyn Fn(Task) + Send + Sync + 'static>,
    pub open_edit: Arc<dyn Fn(Task) + Send + Sync + 'static>,
    pub close_edit: Arc<dyn Fn() + Send + Sync + 'static>,
}

pub fn use_tasks(notify: NotifyHandle) -> TasksHook {
    let tasks = RwSignal::new(Vec::<Task>::new());
    let draft = RwSignal::new(Task::default());
    let editing = RwSignal::new(None::<Task>);
    let dialog_open = RwSignal::new(false);

    // Load the collection on mount
    spawn_local(async move {
        refresh_tasks(tasks, notify).await;
    });

    let create_task =
        Box::new(move || submit_new_task(draft, tasks, notify)) as Box<dyn Fn() + 'static>;

    let save_task = Box::new(move || save_edited_task(editing, dialog_open, tasks, notify))
        as Box<dyn Fn() + 'static>;

    let delete_task = Arc::new(move |id: i64| remove_task(id, tasks, notify))
        as Arc<dyn Fn(i64) + Send + Sync + 'static>;

    let toggle = Arc::new(move |task: Task| toggle_complete(task, tasks, notify))
        as Arc<dyn Fn(Task) + Send + Sync + 'static>;

    let open_edit = Arc::new(move |task: Task| open_edit_dialog(editing, dialog_open, task))
        as Arc<dyn Fn(Task) + Send + Sync + 'static>;

    let close_edit = Arc::new(move || close_edit_dialog(editing, dialog_open))
        as Arc<dyn Fn() + Send + Sync + 'static>;

    TasksHook {
        tasks: tasks.read_only(),
        draft,
        editing,
        dialog_open,
        create_task,
        save_task,
        delete_task,
        toggle_complete: toggle,
        open_edit,
        close_edit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The list invokes these from inside its reactive children closure,
    // which the renderer requires to be Send. The check is type-level:
    // building a real hook needs the browser's task executor, so the
    // signature carries the test.
    fn row_callables_can_cross_into_a_send_closure(hook: TasksHook) -> impl Fn() + Send {
        move || {
            (hook.toggle_complete)(Task::default());
            (hook.open_edit)(Task::default());
            (hook.delete_task)(0);
            (hook.close_edit)();
        }
    }

    #[test]
    fn row_callables_are_send() {
        let _ = row_callables_can_cross_into_a_send_closure;
    }
}
