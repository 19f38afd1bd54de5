//! Inline notice banner (`alert alert--*`) for operation outcomes.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const SUCCESS_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "alert alert--success",
            NoticeKind::Error => "alert alert--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoticeMessage {
    pub kind: NoticeKind,
    pub text: String,
    id: u64,
}

/// Slot for at most one message. Copy it into closures freely.
#[derive(Clone, Copy)]
pub struct Notices {
    current: RwSignal<Option<NoticeMessage>>,
    next_id: StoredValue<u64>,
}

impl Notices {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(0),
        }
    }

    /// Success messages clear themselves after a few seconds.
    pub fn success(&self, text: impl Into<String>) {
        let id = self.show(NoticeKind::Success, text.into());
        let current = self.current;
        spawn_local(async move {
            TimeoutFuture::new(SUCCESS_DISMISS_MS).await;
            // only if nothing newer replaced it
            if current.try_with_untracked(|c| c.as_ref().map(|m| m.id)) == Some(Some(id)) {
                current.set(None);
            }
        });
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(NoticeKind::Error, text.into());
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    pub fn get(&self) -> Option<NoticeMessage> {
        self.current.get()
    }

    fn show(&self, kind: NoticeKind, text: String) -> u64 {
        let id = self.next_id.get_value() + 1;
        self.next_id.set_value(id);
        self.current.set(Some(NoticeMessage { kind, text, id }));
        id
    }
}

impl Default for Notices {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn NoticeBanner(notices: Notices) -> impl IntoView {
    move || {
        notices.get().map(|msg| {
            view! {
                <div class=msg.kind.class() role="status">
                    <span class="alert__text">{msg.text}</span>
                    <button class="alert__close" title="Dismiss" on:click=move |_| notices.dismiss()>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
