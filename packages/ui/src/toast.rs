use std::time::Duration;

use dioxus::core::{current_scope_id, Runtime};
use dioxus::prelude::*;
use tracing::debug;

use crate::i18n::{t, use_lang};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast_success",
            ToastKind::Info => "toast toast_info",
            ToastKind::Error => "toast toast_error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Info => "ℹ",
            ToastKind::Error => "!",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

/// Handle to the notification queue, shared through context.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    queue: Signal<Vec<Toast>>,
    issued: Signal<u64>,
    ttl: Option<Duration>,
    /// Scope of the provider. Expiry timers live there, so they outlast the
    /// component that raised the toast.
    owner: ScopeId,
}

impl Toasts {
    /// Queue a notification. It expires after the provider's TTL, if any.
    pub fn show(
        &self,
        kind: ToastKind,
        title: impl Into<String>,
        description: Option<String>,
    ) -> u64 {
        let mut issued = self.issued;
        let id = *issued.peek() + 1;
        issued.set(id);

        let mut queue = self.queue;
        queue.write().push(Toast {
            id,
            kind,
            title: title.into(),
            description,
        });
        debug!(id, ?kind, "toast shown");

        if let Some(ttl) = self.ttl {
            let handle = *self;
            Runtime::current().spawn(self.owner, async move {
                gloo_timers::future::sleep(ttl).await;
                handle.dismiss(id);
            });
        }
        id
    }

    pub fn success(&self, title: impl Into<String>, description: Option<String>) -> u64 {
        self.show(ToastKind::Success, title, description)
    }

    pub fn info(&self, title: impl Into<String>, description: Option<String>) -> u64 {
        self.show(ToastKind::Info, title, description)
    }

    pub fn error(&self, title: impl Into<String>, description: Option<String>) -> u64 {
        self.show(ToastKind::Error, title, description)
    }

    /// Unknown or already expired ids are ignored.
    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue;
        queue.write().retain(|toast| toast.id != id);
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

/// Provides [`Toasts`]. `ttl_ms = 0` keeps toasts until dismissed.
#[component]
pub fn ToastProvider(#[props(default = 5000)] ttl_ms: u64, children: Element) -> Element {
    let queue = use_signal(Vec::<Toast>::new);
    let issued = use_signal(|| 0_u64);
    let toasts = use_context_provider(|| Toasts {
        queue,
        issued,
        ttl: (ttl_ms > 0).then(|| Duration::from_millis(ttl_ms)),
        owner: current_scope_id(),
    });

    rsx! {
        {children}
        section { class: "toast_region", role: "status", "aria-live": "polite",
            for toast in queue() {
                ToastCard { key: "{toast.id}", toast: toast.clone(), toasts }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast, toasts: Toasts) -> Element {
    let lang = use_lang().current();
    let id = toast.id;

    rsx! {
        div { class: toast.kind.class(),
            span { class: "toast_icon", {toast.kind.icon()} }
            div { class: "toast_content",
                p { class: "toast_title", "{toast.title}" }
                if let Some(description) = &toast.description {
                    p { class: "toast_body", "{description}" }
                }
            }
            button {
                class: "toast_close",
                "aria-label": t(lang, "toast.dismiss"),
                onclick: move |_| toasts.dismiss(id),
                "×"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use dioxus::core::NoOpMutations;

    use super::*;
    use crate::i18n::I18nProvider;

    #[test]
    fn each_kind_has_its_own_class() {
        assert_eq!(ToastKind::Success.class(), "toast toast_success");
        assert_ne!(ToastKind::Error.class(), ToastKind::Info.class());
        assert_ne!(ToastKind::Error.icon(), ToastKind::Success.icon());
    }

    thread_local! {
        static HANDLE: Cell<Option<(Toasts, ScopeId)>> = const { Cell::new(None) };
    }

    #[allow(non_snake_case)]
    fn Raiser() -> Element {
        let toasts = use_toasts();
        HANDLE.with(|slot| slot.set(Some((toasts, current_scope_id()))));
        rsx! {}
    }

    #[allow(non_snake_case)]
    fn Manual() -> Element {
        rsx! {
            I18nProvider {
                ToastProvider { ttl_ms: 0, Raiser {} }
            }
        }
    }

    fn titles(toasts: &Toasts) -> Vec<(u64, ToastKind, String)> {
        toasts
            .queue
            .peek()
            .iter()
            .map(|toast| (toast.id, toast.kind, toast.title.clone()))
            .collect()
    }

    #[test]
    fn toasts_queue_in_order_and_dismiss_by_id() {
        let mut dom = VirtualDom::new(Manual);
        dom.rebuild_in_place();
        let (toasts, _) = HANDLE.with(Cell::get).unwrap();
        assert_eq!(toasts.ttl, None);

        let (first, second) = dom.in_runtime(|| {
            let first = toasts.success("Sent", Some("We will reply soon".to_string()));
            let second = toasts.error("Missing fields", None);
            (first, second)
        });
        assert_eq!((first, second), (1, 2));
        dom.in_runtime(|| {
            assert_eq!(
                titles(&toasts),
                [
                    (1, ToastKind::Success, "Sent".to_string()),
                    (2, ToastKind::Error, "Missing fields".to_string()),
                ]
            );
        });
        dom.process_events();
        dom.render_immediate(&mut NoOpMutations);

        dom.in_runtime(|| {
            toasts.dismiss(first);
            toasts.dismiss(first);
            toasts.dismiss(99);
            assert_eq!(titles(&toasts), [(2, ToastKind::Error, "Missing fields".to_string())]);

            assert_eq!(toasts.info("Later", None), 3);
        });
    }

    #[test]
    fn expiry_timers_belong_to_the_provider() {
        let mut dom = VirtualDom::new(Manual);
        dom.rebuild_in_place();
        let (toasts, raiser) = HANDLE.with(Cell::get).unwrap();
        assert_ne!(toasts.owner, raiser);
    }
}
