use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::session::{clear_stored_session, stored_session};
use crate::Route;

#[function_component(Community)]
pub fn community() -> Html {
    let navigator = use_navigator();
    let session = use_memo(|_| stored_session(), ());

    {
        let signed_in = session.is_some();
        use_effect_with_deps(
            move |_| {
                if !signed_in {
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::Login);
                    }
                }
                || ()
            },
            (),
        );
    }

    let on_sign_out = Callback::from(|_: MouseEvent| {
        clear_stored_session();
        // Full reload so the nav picks up the signed out state
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
    });

    if session.is_none() {
        return html! {};
    }

    html! {
        <div class="community-page">
            <section class="community-hero">
                <h1>{"Welcome to the Centra community"}</h1>
                <p>{"Discussion, polls and announcements from people building the future of money."}</p>
                <button class="cta-button secondary" onclick={on_sign_out}>{"Sign out"}</button>
            </section>
        </div>
    }
}
