use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A user-facing toast message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

#[cfg(any(feature = "web", feature = "desktop", feature = "mobile"))]
pub const TOAST_MS: u32 = 3_000;

#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<(u64, Notice)>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn push(&mut self, notice: Notice) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.items.write().push((id, notice));

        #[cfg(feature = "web")]
        {
            let mut toasts = *self;
            gloo_timers::callback::Timeout::new(TOAST_MS, move || toasts.dismiss(id)).forget();
        }
        // scheduled on the root scope so the timer outlives the caller
        #[cfg(all(not(feature = "web"), any(feature = "desktop", feature = "mobile")))]
        {
            let mut toasts = *self;
            spawn_forever(async move {
                tokio::time::sleep(std::time::Duration::from_millis(TOAST_MS.into())).await;
                toasts.dismiss(id);
            });
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.write().retain(|(i, _)| *i != id);
    }
}

pub fn use_toast_provider() -> Toasts {
    let items = use_signal(Vec::new);
    let next_id = use_signal(|| 0u64);
    use_context_provider(|| Toasts { items, next_id })
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[allow(non_snake_case)]
#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_toasts();
    let items = toasts.items.read().clone();

    rsx! {
        div { class: "fixed top-4 left-1/2 -translate-x-1/2 z-50 flex flex-col items-center gap-2",
            for (id, notice) in items {
                {
                    let cls = match notice.level {
                        NoticeLevel::Success => "border-emerald-500/40 text-emerald-300",
                        NoticeLevel::Error => "border-red-500/40 text-red-300",
                    };
                    let mark = match notice.level {
                        NoticeLevel::Success => "✓",
                        NoticeLevel::Error => "✗",
                    };
                    rsx! {
                        div {
                            key: "{id}",
                            class: "rounded-lg border bg-slate-900 shadow-lg px-4 py-2 text-sm cursor-pointer {cls}",
                            onclick: move |_| toasts.dismiss(id),
                            "{mark} {notice.text}"
                        }
                    }
                }
            }
        }
    }
}
