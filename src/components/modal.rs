use gloo_timers::callback::Timeout;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Focus moves to the confirm button once the modal has had time to lay out.
pub const FOCUS_DELAY_MS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalState {
    Hidden,
    Visible,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalTrigger {
    CloseButton,
    ConfirmButton,
    Backdrop,
    Escape,
    OtherKey,
}

impl ModalTrigger {
    pub fn from_key(key: &str) -> Self {
        if key == "Escape" {
            ModalTrigger::Escape
        } else {
            ModalTrigger::OtherKey
        }
    }
}

impl ModalState {
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            ModalState::Visible
        } else {
            ModalState::Hidden
        }
    }

    pub fn open(self) -> Self {
        ModalState::Visible
    }

    pub fn close(self) -> Self {
        ModalState::Hidden
    }

    pub fn is_visible(&self) -> bool {
        *self == ModalState::Visible
    }

    /// Only Escape among keys dismisses, and only while shown.
    pub fn after(self, trigger: ModalTrigger) -> Self {
        match (self, trigger) {
            (ModalState::Hidden, _) => ModalState::Hidden,
            (ModalState::Visible, ModalTrigger::OtherKey) => ModalState::Visible,
            (ModalState::Visible, _) => self.close(),
        }
    }
}

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.style().set_property("overflow", value);
    }
}

#[derive(Properties, PartialEq)]
pub struct SuccessModalProps {
    pub visible: bool,
    pub on_close: Callback<()>,
}

#[function_component(SuccessModal)]
pub fn success_modal(props: &SuccessModalProps) -> Html {
    let ok_ref = use_node_ref();
    let state = ModalState::from_visible(props.visible);

    // Lock page scroll and focus the confirm button while shown
    {
        let ok_ref = ok_ref.clone();
        use_effect_with_deps(
            move |visible| {
                let visible = *visible;
                let focus = visible.then(|| {
                    set_body_overflow("hidden");
                    Timeout::new(FOCUS_DELAY_MS, move || {
                        if let Some(button) = ok_ref.cast::<HtmlElement>() {
                            let _ = button.focus();
                        }
                    })
                });
                move || {
                    drop(focus);
                    if visible {
                        set_body_overflow("");
                    }
                }
            },
            props.visible,
        );
    }

    let dismiss = {
        let on_close = props.on_close.clone();
        move |trigger: ModalTrigger| {
            if state.after(trigger) != state {
                on_close.emit(());
            }
        }
    };

    {
        let dismiss = dismiss.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            dismiss(ModalTrigger::from_key(&e.key()));
        });
    }

    let on_backdrop = {
        let dismiss = dismiss.clone();
        Callback::from(move |_: MouseEvent| dismiss(ModalTrigger::Backdrop))
    };
    let on_close_button = {
        let dismiss = dismiss.clone();
        Callback::from(move |_: MouseEvent| dismiss(ModalTrigger::CloseButton))
    };
    let on_confirm = Callback::from(move |_: MouseEvent| dismiss(ModalTrigger::ConfirmButton));

    html! {
        <div id="success-modal" class={classes!("modal", (!state.is_visible()).then(|| "hidden"))}>
            <style>
                {r#"
                    .modal {
                        position: fixed;
                        inset: 0;
                        z-index: 1000;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                    }
                    .modal.hidden {
                        display: none;
                    }
                    .modal__backdrop {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.5);
                    }
                    .modal__content {
                        position: relative;
                        background: #fcfcf9;
                        border-radius: 12px;
                        padding: 2.5rem 2rem 2rem;
                        max-width: 420px;
                        width: 100%;
                        text-align: center;
                        box-shadow: 0 16px 40px rgba(0, 0, 0, 0.2);
                    }
                    .modal__close {
                        position: absolute;
                        top: 0.75rem;
                        right: 0.75rem;
                        background: none;
                        border: none;
                        font-size: 1.5rem;
                        cursor: pointer;
                        color: #626c71;
                    }
                    .modal__icon {
                        font-size: 3rem;
                        color: #21808d;
                        margin-bottom: 1rem;
                    }
                "#}
            </style>
            <div id="modal-backdrop" class="modal__backdrop" onclick={on_backdrop}></div>
            <div class="modal__content" role="dialog" aria-modal="true" aria-labelledby="modal-title">
                <button id="modal-close" class="modal__close" aria-label="Close" onclick={on_close_button}>
                    {"×"}
                </button>
                <div class="modal__icon">{"✓"}</div>
                <h3 id="modal-title">{"Consultation Booked!"}</h3>
                <p>{"Thank you for reaching out. One of our coaches will contact you within 24 hours to confirm your session."}</p>
                <button id="modal-ok" ref={ok_ref} class="btn btn--primary" onclick={on_confirm}>
                    {"OK"}
                </button>
            </div>
        </div>
    }
}
