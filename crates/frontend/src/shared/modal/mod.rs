use crate::shared::icons::icon;
use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Modal(
    /// Title of the modal
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// Message shown by [`AlertDialog`].
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Error => "notice notice--error",
            NoticeKind::Info => "notice notice--info",
        }
    }
}

/// Modal alert bound to `notice`; `None` hides it.
///
/// With `auto_close_ms` the notice clears itself unless it was replaced
/// in the meantime.
#[component]
pub fn AlertDialog(
    notice: RwSignal<Option<Notice>>,
    #[prop(optional)] auto_close_ms: Option<u32>,
) -> impl IntoView {
    if let Some(ms) = auto_close_ms {
        Effect::new(move |_| {
            if let Some(current) = notice.get() {
                Timeout::new(ms, move || {
                    if notice.try_get_untracked().flatten().as_ref() == Some(&current) {
                        notice.try_set(None);
                    }
                })
                .forget();
            }
        });
    }

    let close = Callback::new(move |_| notice.set(None));

    view! {
        {move || notice.get().map(|n| {
            let class = n.css_class();
            let Notice { title, message, .. } = n;
            view! {
                <Modal title=title on_close=close>
                    <div class=class>
                        <p>{message}</p>
                    </div>
                    <div class="modal-actions">
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| close.run(())>
                            "Aceptar"
                        </Button>
                    </div>
                </Modal>
            }
        })}
    }
}

/// Yes/no dialog; `on_confirm` runs after the dialog closes.
#[component]
pub fn ConfirmDialog(
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    on_confirm: Callback<()>,
    #[prop(optional, into)] confirm_label: Option<String>,
) -> impl IntoView {
    let title = StoredValue::new(title);
    let message = StoredValue::new(message);
    let confirm_label =
        StoredValue::new(confirm_label.unwrap_or_else(|| "Confirmar".to_string()));
    let close = Callback::new(move |_| open.set(false));

    view! {
        <Show when=move || open.get()>
            <Modal title=title.get_value() on_close=close>
                <p>{message.get_value()}</p>
                <div class="modal-actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| close.run(())>
                        "Cancelar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            open.set(false);
                            on_confirm.run(());
                        }
                    >
                        {confirm_label.get_value()}
                    </Button>
                </div>
            </Modal>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_constructors() {
        let ok = Notice::success("Listo", "Operador asignado");
        assert_eq!(ok.kind, NoticeKind::Success);
        assert_eq!(ok.css_class(), "notice notice--success");
        assert_ne!(ok, Notice::error("Listo", "Operador asignado"));
    }
}
