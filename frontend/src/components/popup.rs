use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::toast::ToastAction;
use crate::signup::SignupForm;

#[derive(Properties, PartialEq)]
pub struct PopupProps {
    pub on_close: Callback<()>,
    pub on_toast: Callback<ToastAction>,
}

/// Join-the-movement modal the landing page opens after a delay.
#[function_component(SignupPopup)]
pub fn signup_popup(props: &PopupProps) -> Html {
    let input_ref = use_node_ref();

    let onsubmit = {
        let input_ref = input_ref.clone();
        let on_toast = props.on_toast.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let value = input_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            match SignupForm::Popup.submit(&value) {
                Ok((address, feedback)) => {
                    log::info!("Popup signup for {}", address);
                    on_toast.emit(ToastAction::success(feedback.title, &feedback.description));
                    on_close.emit(());
                }
                Err(feedback) => {
                    on_toast.emit(ToastAction::destructive(feedback.title, &feedback.description));
                }
            }
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Clicks inside the dialog must not reach the backdrop
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="popup-backdrop" onclick={close.clone()}>
            <style>
                {r#"
                    .popup-backdrop {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.6);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 90;
                    }
                    .popup-dialog {
                        position: relative;
                        background: #fff;
                        border-radius: 16px;
                        padding: 40px 32px;
                        max-width: 440px;
                        width: calc(100% - 48px);
                        text-align: center;
                    }
                    .popup-close {
                        position: absolute;
                        top: 12px;
                        right: 16px;
                        border: none;
                        background: none;
                        font-size: 24px;
                        cursor: pointer;
                    }
                    .popup-dialog form {
                        display: flex;
                        flex-direction: column;
                        gap: 12px;
                        margin-top: 24px;
                    }
                "#}
            </style>
            <div class="popup-dialog" role="dialog" aria-modal="true" onclick={stop}>
                <button class="popup-close" aria-label="Close" onclick={close}>{"×"}</button>
                <h2>{"The future of money is here"}</h2>
                <p>{"Be first in line when the Centra wallet opens to the public."}</p>
                <form {onsubmit}>
                    <input ref={input_ref} type="email" name="popup-email" placeholder="you@example.com" aria-label="Email address" />
                    <button type="submit" class="cta-button">{"Join Centra"}</button>
                </form>
            </div>
        </div>
    }
}
