use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::NotifyHandle;
use crate::models::Task;

// Every mutation below is one write followed by a `finish_*` continuation
// that applies the outcome to local state and decides whether to refetch.
// Success resets whatever local state the action owns, raises the success
// toast and triggers the refetch; failure raises only the error toast so
// the mirror and any draft stay untouched and the user can retry.

/// Fetch the full collection and replace the local mirror. On failure the
/// mirror keeps the last successful fetch.
pub async fn refresh_tasks(tasks: RwSignal<Vec<Task>>, notify: NotifyHandle) {
    match api::list_tasks().await {
        Ok(list) => tasks.set(list),
        Err(e) => {
            log_error(&format!("Error fetching tasks: {}", e));
            notify.error("Error fetching tasks");
        }
    }
}

/// Submit the new-task draft. Does nothing while the title is empty — the
/// form disables its button for the same condition, this is the non-UI
/// half of that guard.
pub fn submit_new_task(draft: RwSignal<Task>, tasks: RwSignal<Vec<Task>>, notify: NotifyHandle) {
    let new_task = draft.get_untracked();
    if !new_task.can_submit() {
        return;
    }

    spawn_local(async move {
        if finish_create(api::create_task(&new_task).await, draft, notify) {
            refresh_tasks(tasks, notify).await;
        }
    });
}

/// Send the edit draft as a full replace. Success closes the dialog and
/// drops the draft; failure leaves both so the user can correct and retry.
pub fn save_edited_task(
    editing: RwSignal<Option<Task>>,
    dialog_open: RwSignal<bool>,
    tasks: RwSignal<Vec<Task>>,
    notify: NotifyHandle,
) {
    if let Some(task) = editing.get_untracked() {
        spawn_local(async move {
            if finish_save(api::update_task(&task).await, editing, dialog_open, notify) {
                refresh_tasks(tasks, notify).await;
            }
        });
    }
}

pub fn remove_task(id: i64, tasks: RwSignal<Vec<Task>>, notify: NotifyHandle) {
    spawn_local(async move {
        if finish_remove(api::delete_task(id).await, notify) {
            refresh_tasks(tasks, notify).await;
        }
    });
}

/// Replace the task with its `completed` flag flipped. The toast wording
/// follows the value the task was flipped to.
pub fn toggle_complete(task: Task, tasks: RwSignal<Vec<Task>>, notify: NotifyHandle) {
    let updated = task.toggled();
    spawn_local(async move {
        let completed = updated.completed;
        if finish_toggle(api::update_task(&updated).await, completed, notify) {
            refresh_tasks(tasks, notify).await;
        }
    });
}

/// Copy the target task into the edit draft and raise the dialog flag.
pub fn open_edit_dialog(editing: RwSignal<Option<Task>>, dialog_open: RwSignal<bool>, task: Task) {
    editing.set(Some(task));
    dialog_open.set(true);
}

/// Close the dialog and discard the edit draft.
pub fn close_edit_dialog(editing: RwSignal<Option<Task>>, dialog_open: RwSignal<bool>) {
    dialog_open.set(false);
    editing.set(None);
}

/// Apply a create outcome: a successful write resets the draft, a failed
/// one keeps it for retry. Returns whether the list should be refetched.
fn finish_create(
    outcome: Result<Task, String>,
    draft: RwSignal<Task>,
    notify: NotifyHandle,
) -> bool {
    match outcome {
        Ok(_) => {
            draft.set(Task::default());
            notify.success("Task created successfully!");
            true
        }
        Err(e) => {
            log_error(&format!("Error creating task: {}", e));
            notify.error("Error creating task");
            false
        }
    }
}

/// Apply a save outcome: success drops the edit draft and closes the
/// dialog, failure leaves the dialog open with the draft intact.
fn finish_save(
    outcome: Result<Task, String>,
    editing: RwSignal<Option<Task>>,
    dialog_open: RwSignal<bool>,
    notify: NotifyHandle,
) -> bool {
    match outcome {
        Ok(_) => {
            editing.set(None);
            dialog_open.set(false);
            notify.success("Task updated successfully!");
            true
        }
        Err(e) => {
            log_error(&format!("Error updating task: {}", e));
            notify.error("Error updating task");
            false
        }
    }
}

fn finish_remove(outcome: Result<(), String>, notify: NotifyHandle) -> bool {
    match outcome {
        Ok(()) => {
            notify.success("Task deleted successfully!");
            true
        }
        Err(e) => {
            log_error(&format!("Error deleting task: {}", e));
            notify.error("Error deleting task");
            false
        }
    }
}

fn finish_toggle(outcome: Result<Task, String>, completed: bool, notify: NotifyHandle) -> bool {
    match outcome {
        Ok(_) => {
            notify.success(toggle_message(completed));
            true
        }
        Err(e) => {
            log_error(&format!("Error toggling task completion: {}", e));
            notify.error("Error updating task status");
            false
        }
    }
}

pub fn toggle_message(completed: bool) -> &'static str {
    if completed {
        "Task marked as completed!"
    } else {
        "Task marked as pending!"
    }
}

/// Browser console diagnostic. Compiled out off-wasm so the failure arms
/// above stay exercisable by native tests.
#[cfg(target_arch = "wasm32")]
fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn log_error(_message: &str) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Severity;

    fn sample_task() -> Task {
        Task {
            id: Some(1),
            title: "A".to_string(),
            description: String::new(),
            completed: false,
        }
    }

    #[test]
    fn toggle_message_follows_new_value() {
        assert_eq!(toggle_message(true), "Task marked as completed!");
        assert_eq!(toggle_message(false), "Task marked as pending!");
    }

    #[test]
    fn open_edit_copies_task_and_raises_flag() {
        let editing = RwSignal::new(None::<Task>);
        let dialog_open = RwSignal::new(false);

        open_edit_dialog(editing, dialog_open, sample_task());

        assert_eq!(editing.get_untracked(), Some(sample_task()));
        assert!(dialog_open.get_untracked());
    }

    #[test]
    fn close_edit_discards_draft_and_clears_flag() {
        let editing = RwSignal::new(Some(sample_task()));
        let dialog_open = RwSignal::new(true);

        close_edit_dialog(editing, dialog_open);

        assert_eq!(editing.get_untracked(), None);
        assert!(!dialog_open.get_untracked());
    }

    #[test]
    fn submitting_an_empty_draft_is_a_no_op() {
        let draft = RwSignal::new(Task {
            description: "text without a title".to_string(),
            ..Task::default()
        });
        let tasks = RwSignal::new(Vec::<Task>::new());
        let notify = NotifyHandle::new();

        // Guard returns before any request is issued; the draft is kept.
        submit_new_task(draft, tasks, notify);

        assert_eq!(
            draft.get_untracked().description,
            "text without a title".to_string()
        );
        assert!(!notify.signal().get_untracked().visible);
    }

    #[test]
    fn successful_create_resets_the_draft_and_requests_a_refetch() {
        let draft = RwSignal::new(Task {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            ..Task::default()
        });
        let notify = NotifyHandle::new();
        let created = Task {
            id: Some(1),
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            completed: false,
        };

        let refetch = finish_create(Ok(created), draft, notify);

        assert!(refetch);
        assert_eq!(draft.get_untracked(), Task::default());
        let n = notify.signal().get_untracked();
        assert_eq!(n.message, "Task created successfully!");
        assert_eq!(n.severity, Severity::Success);
    }

    #[test]
    fn failed_create_keeps_the_draft_and_raises_the_error_toast() {
        let draft = RwSignal::new(Task {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            ..Task::default()
        });
        let notify = NotifyHandle::new();

        let refetch = finish_create(
            Err("server responded with status 500".to_string()),
            draft,
            notify,
        );

        assert!(!refetch);
        let kept = draft.get_untracked();
        assert_eq!(kept.title, "Buy milk");
        assert_eq!(kept.description, "2%");
        let n = notify.signal().get_untracked();
        assert!(n.visible);
        assert_eq!(n.message, "Error creating task");
        assert_eq!(n.severity, Severity::Error);
    }

    #[test]
    fn successful_save_closes_the_dialog_and_drops_the_draft() {
        let editing = RwSignal::new(Some(sample_task()));
        let dialog_open = RwSignal::new(true);
        let notify = NotifyHandle::new();

        let refetch = finish_save(Ok(sample_task()), editing, dialog_open, notify);

        assert!(refetch);
        assert_eq!(editing.get_untracked(), None);
        assert!(!dialog_open.get_untracked());
        assert_eq!(
            notify.signal().get_untracked().message,
            "Task updated successfully!"
        );
    }

    #[test]
    fn failed_save_leaves_the_dialog_open_for_retry() {
        let editing = RwSignal::new(Some(sample_task()));
        let dialog_open = RwSignal::new(true);
        let notify = NotifyHandle::new();

        let refetch = finish_save(
            Err("request failed".to_string()),
            editing,
            dialog_open,
            notify,
        );

        assert!(!refetch);
        assert_eq!(editing.get_untracked(), Some(sample_task()));
        assert!(dialog_open.get_untracked());
        let n = notify.signal().get_untracked();
        assert_eq!(n.message, "Error updating task");
        assert_eq!(n.severity, Severity::Error);
    }

    #[test]
    fn failure_toasts_name_the_operation() {
        let notify = NotifyHandle::new();

        assert!(!finish_remove(Err("request failed".to_string()), notify));
        assert_eq!(
            notify.signal().get_untracked().message,
            "Error deleting task"
        );

        assert!(!finish_toggle(Err("request failed".to_string()), true, notify));
        assert_eq!(
            notify.signal().get_untracked().message,
            "Error updating task status"
        );
    }

    #[test]
    fn toggle_success_reports_the_new_state() {
        let notify = NotifyHandle::new();

        let refetch = finish_toggle(Ok(sample_task().toggled()), true, notify);

        assert!(refetch);
        assert_eq!(
            notify.signal().get_untracked().message,
            "Task marked as completed!"
        );
    }
}
