use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

/// Which dialog a list page shows. Exactly one is active at a time.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ModalState<T> {
    #[default]
    None,
    Add,
    Edit(T),
    View(T),
    Delete(T),
}

impl<T> ModalState<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::None)
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            ModalState::Edit(item) | ModalState::View(item) | ModalState::Delete(item) => Some(item),
            ModalState::None | ModalState::Add => None,
        }
    }

    pub fn is_form(&self) -> bool {
        matches!(self, ModalState::Add | ModalState::Edit(_))
    }
}

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Optional footer buttons (Save, Cancel, etc.)
    #[prop(optional)]
    footer: Option<ChildrenFn>,
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
                {footer.map(|buttons| view! { <div class="modal-footer">{buttons()}</div> })}
            </div>
        </div>
    }
}

/// Delete confirmation naming the record
#[component]
pub fn ConfirmDeleteModal(
    /// Record label, e.g. "produk Ayam Geprek"
    #[prop(into)]
    subject: String,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    on_confirm: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let footer: ChildrenFn = std::sync::Arc::new(move || {
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| on_close.run(())
                disabled=busy
            >
                "Batal"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| on_confirm.run(())
                disabled=busy
            >
                {move || if busy.get() { "Menghapus..." } else { "Hapus" }}
            </Button>
        }
        .into_any()
    });

    view! {
        <Modal title="Konfirmasi Hapus" on_close=on_close footer=footer>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <p>{format!("Yakin ingin menghapus {}? Tindakan ini tidak dapat dibatalkan.", subject)}</p>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_only_for_record_dialogs() {
        assert!(!ModalState::<u8>::None.is_open());
        assert_eq!(ModalState::<u8>::Add.payload(), None);
        assert!(ModalState::<u8>::Add.is_form());
        assert_eq!(ModalState::Edit(3u8).payload(), Some(&3));
        assert_eq!(ModalState::Delete(4u8).payload(), Some(&4));
        assert!(!ModalState::View(1u8).is_form());
    }
}
