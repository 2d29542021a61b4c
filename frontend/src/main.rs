use log::{info, Level};
use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod listener;
mod signup;
mod auth {
    pub mod gate;
    pub mod session;
}
mod timeline {
    pub mod carousel;
    pub mod component;
    pub mod stops;
}
mod components {
    pub mod feature_tabs;
    pub mod newsletter;
    pub mod persistent_cta;
    pub mod popup;
    pub mod toast;
}
mod pages {
    pub mod auth_callback;
    pub mod community;
    pub mod landing;
    pub mod login;
}

use auth::session::{clear_stored_session, is_logged_in};
use listener::{scroll_to_section, scroll_top, Listener};
use pages::{
    auth_callback::AuthCallback,
    community::Community,
    landing::Landing,
    login::Login,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/community")]
    Community,
    #[at("/auth/login")]
    Login,
    #[at("/auth/callback")]
    AuthCallback,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::Community => {
            info!("Rendering Community page");
            html! { <Community /> }
        }
        Route::Login => {
            info!("Rendering Login page");
            html! { <Login /> }
        }
        Route::AuthCallback => {
            info!("Rendering AuthCallback page");
            html! { <AuthCallback /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Landing}>{"Back to Centra"}</Link<Route>>
                </div>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_logout: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { on_logout } = props;
    let route = use_route::<Route>();
    // Re-read on every route change, the callback page stores the session
    // right before it routes on
    let logged_in = *use_memo(|_| is_logged_in(), route);
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = Listener::on_window("scroll", move |_| {
                    is_scrolled.set(scroll_top() > config::CTA_SCROLL_THRESHOLD);
                });
                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let section_link = |id: &'static str| {
        let close = close_menu.clone();
        Callback::from(move |e: MouseEvent| {
            close.emit(e);
            scroll_to_section(id);
        })
    };

    let handle_logout = {
        let on_logout = on_logout.clone();
        let close = close_menu.clone();
        Callback::from(move |e: MouseEvent| {
            close.emit(e);
            on_logout.emit(());
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Landing} classes="nav-logo">
                    {"Centra"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <button class="nav-link" onclick={section_link("features-section")}>{"Features"}</button>
                    <button class="nav-link" onclick={section_link("newsletter-section")}>{"Newsletter"}</button>
                    if logged_in {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Community} classes="nav-link">
                                {"Community"}
                            </Link<Route>>
                        </div>
                        <button onclick={handle_logout} class="nav-logout-button">
                            {"Sign out"}
                        </button>
                    } else {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Login} classes="nav-login-button">
                                {"Sign in"}
                            </Link<Route>>
                        </div>
                    }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let handle_logout = Callback::from(move |_: ()| {
        clear_stored_session();
        // Reload the page to reflect the logged out state
        if let Some(window) = window() {
            let _ = window.location().set_href("/");
        }
    });

    html! {
        <BrowserRouter>
            <Nav on_logout={handle_logout} />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Centra");
    yew::Renderer::<App>::new().render();
}
