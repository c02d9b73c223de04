//! Transient notification shown at the top of a screen.
//!
//! Each screen owns one [`Notifier`]. A new message replaces the visible one
//! and restarts the auto-hide countdown; a countdown started for an older
//! message never hides a newer one.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Visible notification plus the generation of the last change
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationSlot {
    current: Option<Notification>,
    generation: u64,
}

impl NotificationSlot {
    /// Replaces the visible message, returns the token for its expiry
    pub fn show(&mut self, notification: Notification) -> u64 {
        self.generation += 1;
        self.current = Some(notification);
        self.generation
    }

    /// Hides the message only if nothing was shown since `generation`
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.generation != generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn dismiss(&mut self) {
        self.generation += 1;
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

/// Screen-local notification channel with auto-hide
#[derive(Clone, Copy)]
pub struct Notifier {
    slot: RwSignal<NotificationSlot>,
    timeout_ms: u32,
}

impl Notifier {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            slot: RwSignal::new(NotificationSlot::default()),
            timeout_ms,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(Notification::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(Notification::error(message));
    }

    pub fn show(&self, notification: Notification) {
        let Some(generation) = self.slot.try_update(|s| s.show(notification)) else {
            return;
        };
        let slot = self.slot;
        let timeout_ms = self.timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            // The screen may be gone by now; try_update is a no-op then.
            let _ = slot.try_update(|s| s.expire(generation));
        });
    }

    pub fn dismiss(&self) {
        self.slot.update(|s| s.dismiss());
    }

    /// Reactive read of the visible message
    pub fn current(&self) -> Option<Notification> {
        self.slot.with(|s| s.current().cloned())
    }
}

#[component]
pub fn NotificationBanner(notifier: Notifier) -> impl IntoView {
    view! {
        {move || {
            notifier.current().map(|n| {
                let intent = match n.severity {
                    Severity::Success => MessageBarIntent::Success,
                    Severity::Error => MessageBarIntent::Error,
                };
                view! {
                    <div class="notification" style="margin-bottom: var(--spacing-md);">
                        <MessageBar intent=intent>
                            <MessageBarBody>
                                <div style="display: flex; align-items: center; justify-content: space-between; gap: var(--spacing-sm);">
                                    <span>{n.message}</span>
                                    <Button
                                        appearance=ButtonAppearance::Transparent
                                        size=ButtonSize::Small
                                        on_click=move |_| notifier.dismiss()
                                    >
                                        "×"
                                    </Button>
                                </div>
                            </MessageBarBody>
                        </MessageBar>
                    </div>
                }
            })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_replaces_previous() {
        let mut slot = NotificationSlot::default();
        slot.show(Notification::success("Loja criada com sucesso!"));
        slot.show(Notification::error("Erro ao excluir loja"));
        assert_eq!(slot.current(), Some(&Notification::error("Erro ao excluir loja")));
    }

    #[test]
    fn test_stale_timer_does_not_hide_newer_message() {
        let mut slot = NotificationSlot::default();
        let first = slot.show(Notification::success("a"));
        let second = slot.show(Notification::success("b"));
        assert!(!slot.expire(first));
        assert_eq!(slot.current().map(|n| n.message.as_str()), Some("b"));
        assert!(slot.expire(second));
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn test_dismiss_invalidates_pending_expiry() {
        let mut slot = NotificationSlot::default();
        let generation = slot.show(Notification::success("a"));
        slot.dismiss();
        assert!(slot.current().is_none());
        assert!(!slot.expire(generation));
    }
}
