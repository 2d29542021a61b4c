use log::warn;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::gate::{run_callback_gate, Destination, GateState, Navigate};
use crate::auth::session::SupabaseSessionProvider;
use crate::Route;

#[derive(Serialize)]
struct LoginQuery {
    error: String,
}

// Replacing keeps the token fragment out of the back button history.
impl Navigate for Navigator {
    fn navigate(&self, destination: &Destination) {
        match destination {
            Destination::Community => self.replace(&Route::Community),
            Destination::Login { error: None } => self.replace(&Route::Login),
            Destination::Login { error: Some(message) } => {
                let query = LoginQuery { error: message.clone() };
                if let Err(e) = self.replace_with_query(&Route::Login, &query) {
                    warn!("Could not attach error to login redirect: {:?}", e);
                    self.replace(&Route::Login);
                }
            }
        }
    }
}

/// Landing spot for the OAuth redirect. Checks the session once, then
/// routes on.
#[function_component(AuthCallback)]
pub fn auth_callback() -> Html {
    let navigator = use_navigator();
    let state = use_state(|| GateState::Pending);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                match navigator {
                    Some(navigator) => spawn_local(async move {
                        let provider = SupabaseSessionProvider::default();
                        let outcome = run_callback_gate(&provider, &navigator).await;
                        state.set(outcome);
                    }),
                    None => gloo_console::error!("Auth callback rendered outside of a router"),
                }
                || ()
            },
            (),
        );
    }

    let message = match *state {
        GateState::Pending => "Verifying your account...",
        GateState::Authenticated => "Welcome back! Taking you to the community...",
        GateState::Unauthenticated | GateState::Errored => "Redirecting to sign in...",
    };

    html! {
        <div class="auth-callback">
            <style>
                {r#"
                    .auth-callback {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 16px;
                    }
                    .spinner {
                        width: 32px;
                        height: 32px;
                        border-radius: 50%;
                        border-bottom: 2px solid #1C60FF;
                        animation: spin 1s linear infinite;
                    }
                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                "#}
            </style>
            <div class="spinner"></div>
            <p>{message}</p>
        </div>
    }
}
