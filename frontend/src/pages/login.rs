use log::{info, warn};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::auth::session::{is_logged_in, SupabaseSessionProvider};
use crate::config;
use crate::Route;

#[function_component(Login)]
pub fn login() -> Html {
    let error = use_search_param("error".to_string());
    let logged_in = is_logged_in();

    let onclick = Callback::from(|_: MouseEvent| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let origin = match window.location().origin() {
            Ok(origin) => origin,
            Err(_) => {
                warn!("Cannot read page origin, login aborted");
                return;
            }
        };
        let url = SupabaseSessionProvider::default()
            .authorize_url(config::AUTH_PROVIDER, &format!("{}{}", origin, config::CALLBACK_PATH));
        info!("Redirecting to {} sign in", config::AUTH_PROVIDER);
        let _ = window.location().set_href(&url);
    });

    html! {
        <div class="login-page">
            <div class="login-container">
                <h1>{"Sign in to Centra"}</h1>
                {
                    if let Some(message) = error.filter(|m| !m.is_empty()) {
                        html! { <div class="message error-message">{message}</div> }
                    } else {
                        html! {}
                    }
                }
                if logged_in {
                    <p>{"You're already signed in."}</p>
                    <Link<Route> to={Route::Community} classes="cta-button">
                        {"Go to the community"}
                    </Link<Route>>
                } else {
                    <p>{"Join the conversation with Centra believers worldwide."}</p>
                    <button class="cta-button" {onclick}>{"Continue with Discord"}</button>
                }
            </div>
        </div>
    }
}
