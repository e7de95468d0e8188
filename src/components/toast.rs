use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_notifications;

/// How long a toast stays on screen before hiding itself.
const AUTO_HIDE_MS: u32 = 3_000;

/// Transient notification banner. One instance is mounted near the app root
/// and reacts to whatever the notification context currently holds.
#[component]
pub fn Toast() -> impl IntoView {
    let notify = use_notifications();
    let state = notify.signal();

    // Every time a toast becomes visible, arm a timer for it. The sequence
    // number stamped on the notification tells the timer whether it is still
    // the latest one; a newer toast resets the countdown by winning the check.
    Effect::new(move |_| {
        let current = state.get();
        if !current.visible {
            return;
        }
        let seq = current.seq;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_HIDE_MS).await;
            if state.with_untracked(|n| n.visible && n.seq == seq) {
                notify.dismiss();
            }
        });
    });

    view! {
        <div class=move || {
            state.with(|n| {
                let mut classes = format!("toast {}", n.severity.as_class());
                if n.visible {
                    classes.push_str(" visible");
                }
                classes
            })
        }>
            <span class="toast-message">{move || state.with(|n| n.message.clone())}</span>
            <button type="button" class="toast-close" on:click=move |_| notify.dismiss()>
                "×"
            </button>
        </div>
    }
}
