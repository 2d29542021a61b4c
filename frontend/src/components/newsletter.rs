use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::toast::ToastAction;
use crate::signup::SignupForm;

#[derive(Properties, PartialEq)]
pub struct NewsletterProps {
    pub on_toast: Callback<ToastAction>,
}

#[function_component(Newsletter)]
pub fn newsletter(props: &NewsletterProps) -> Html {
    let email = use_state(String::new);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let on_toast = props.on_toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match SignupForm::Newsletter.submit(&email) {
                Ok((address, feedback)) => {
                    log::info!("Newsletter signup for {}", address);
                    on_toast.emit(ToastAction::success(feedback.title, &feedback.description));
                    email.set(String::new());
                }
                Err(feedback) => {
                    on_toast.emit(ToastAction::destructive(feedback.title, &feedback.description));
                }
            }
        })
    };

    html! {
        <section id="newsletter-section" class="newsletter-section">
            <h2>{"Stay in the loop"}</h2>
            <p>{"Launch news, wallet releases and community calls, straight to your inbox."}</p>
            <form class="newsletter-form" {onsubmit}>
                <input
                    type="email"
                    placeholder="you@example.com"
                    aria-label="Email address"
                    value={(*email).clone()}
                    {oninput}
                />
                <button type="submit" class="cta-button">{"Subscribe"}</button>
            </form>
        </section>
    }
}
