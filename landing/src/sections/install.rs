use crate::clipboard::{self, ClipboardError};
use crate::content::{INSTALL_COMMAND, INSTALL_PROMPT};
use crate::copy_state::{CopyState, RESET_DELAY, ResetTicket};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn InstallSection() -> impl IntoView {
    let copy_state = RwSignal::new(CopyState::default());
    let pending_reset = StoredValue::new(None::<TimeoutHandle>);

    // A reset firing after unmount would write to a disposed signal.
    on_cleanup(move || cancel_pending(pending_reset));

    let handle_copy = move |_| {
        spawn_local(async move {
            let result = clipboard::write_text(INSTALL_COMMAND).await;
            if let Some(ticket) = apply_write(copy_state, &result) {
                schedule_reset(copy_state, pending_reset, ticket);
            }
        });
    };

    view! {
        <div class="w-full max-w-3xl mb-12 sm:mb-20">
            <div class="bg-gray-50/50 backdrop-blur-sm dark:bg-gray-800/50 rounded-2xl p-6 shadow-lg border border-gray-200/50 dark:border-gray-700/50">
                <p class="text-sm mb-4 text-gray-600 dark:text-gray-300">{INSTALL_PROMPT}</p>
                <div class="relative group">
                    <pre class="bg-gray-900 dark:bg-black rounded-xl p-4 overflow-x-auto transition-transform group-hover:scale-[1.01]">
                        <code class="text-white font-mono">{INSTALL_COMMAND}</code>
                    </pre>
                    <button
                        class=move || copy_state.get().button_class()
                        on:click=handle_copy
                    >
                        {move || copy_state.get().label()}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Fold a finished clipboard write into the button state. Returns the ticket
/// to schedule a reset with, if the write succeeded.
fn apply_write(
    copy_state: RwSignal<CopyState>,
    result: &Result<(), ClipboardError>,
) -> Option<ResetTicket> {
    match result {
        Ok(()) => tracing::debug!(command = INSTALL_COMMAND, "install command copied"),
        Err(err) => tracing::warn!(error = %err, "failed to copy install command"),
    }
    copy_state.try_update(|state| state.on_write(result)).flatten()
}

/// Timer body for the reset belonging to `ticket`.
fn reset_after(copy_state: RwSignal<CopyState>, ticket: ResetTicket) -> impl FnOnce() + 'static {
    move || {
        copy_state.try_update(|state| state.expire(ticket));
    }
}

/// Restart the reset window from now, replacing any reset still pending.
fn schedule_reset(
    copy_state: RwSignal<CopyState>,
    pending_reset: StoredValue<Option<TimeoutHandle>>,
    ticket: ResetTicket,
) {
    cancel_pending(pending_reset);

    match set_timeout_with_handle(reset_after(copy_state, ticket), RESET_DELAY) {
        Ok(handle) => {
            pending_reset.try_update_value(|slot| *slot = Some(handle));
        }
        Err(err) => tracing::warn!(?err, "failed to schedule copy reset"),
    }
}

fn cancel_pending(pending_reset: StoredValue<Option<TimeoutHandle>>) {
    if let Some(handle) = pending_reset.try_update_value(Option::take).flatten() {
        handle.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn successful_write_shows_copied_and_hands_out_ticket() {
        let copy_state = RwSignal::new(CopyState::default());

        let ticket = apply_write(copy_state, &Ok(()));

        assert!(ticket.is_some());
        assert_eq!(copy_state.get_untracked().label(), "Copied!");
    }

    #[test]
    fn denied_write_leaves_copy_label() {
        let copy_state = RwSignal::new(CopyState::default());

        let ticket = apply_write(copy_state, &Err(ClipboardError::PermissionDenied));

        assert_eq!(ticket, None);
        assert_eq!(copy_state.get_untracked().label(), "Copy");
    }

    #[test]
    fn reset_timer_body_reverts_label() {
        let copy_state = RwSignal::new(CopyState::default());
        let ticket = apply_write(copy_state, &Ok(())).expect("ticket for successful write");

        reset_after(copy_state, ticket)();

        assert_eq!(copy_state.get_untracked().label(), "Copy");
    }

    #[test]
    fn reset_from_superseded_copy_keeps_label() {
        let copy_state = RwSignal::new(CopyState::default());
        let first = apply_write(copy_state, &Ok(())).expect("first ticket");
        let second = apply_write(copy_state, &Ok(())).expect("second ticket");

        reset_after(copy_state, first)();
        assert_eq!(copy_state.get_untracked().label(), "Copied!");

        reset_after(copy_state, second)();
        assert_eq!(copy_state.get_untracked().label(), "Copy");
    }
}
