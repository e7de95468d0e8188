use leptos::ev;
use leptos::prelude::*;

use crate::models::Task;

/// Inline card for composing a new task. The draft lives in the parent so
/// a failed create keeps whatever the user typed.
#[component]
pub fn TaskForm(draft: RwSignal<Task>, on_create: Box<dyn Fn() + 'static>) -> impl IntoView {
    let handle_submit = move |ev: ev::SubmitEvent| {
        // Prevent the default form submission behavior (page reload)
        ev.prevent_default();
        on_create();
    };

    view! {
        <section class="create-card">
            <form class="task-form" on:submit=handle_submit>
                <input
                    type="text"
                    placeholder="Task Title"
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Description"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                />
                // Disabled is a pure function of the title being empty
                <button
                    type="submit"
                    class="btn-primary"
                    prop:disabled=move || draft.with(|d| !d.can_submit())
                >
                    "Add Task"
                </button>
            </form>
        </section>
    }
}
