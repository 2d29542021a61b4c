use chrono::Datelike;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::feature_tabs::FeatureTabs;
use crate::components::newsletter::Newsletter;
use crate::components::persistent_cta::PersistentCta;
use crate::components::popup::SignupPopup;
use crate::components::toast::{toast_callback, ToastAction, ToastList, ToastStack};
use crate::config;
use crate::listener::scroll_to_section;
use crate::timeline::component::InteractiveTimeline;

struct CtaCard {
    title: &'static str,
    body: &'static str,
    link_text: &'static str,
    href: &'static str,
    external: bool,
}

static CLOSING_CARDS: [CtaCard; 3] = [
    CtaCard {
        title: "Get Started with Centra",
        body: "Download the Centra wallet app and start your journey today.",
        link_text: "Get started →",
        href: "/download",
        external: false,
    },
    CtaCard {
        title: "Discover the Whitepaper",
        body: "Dive deeper into the Centra vision with our whitepaper and interactive explainer.",
        link_text: "Read now →",
        href: "/whitepaper.pdf",
        external: true,
    },
    CtaCard {
        title: "Join the Community",
        body: "Be part of the movement. Connect with Centra believers worldwide.",
        link_text: "Join now →",
        href: "https://discord.gg/centra",
        external: true,
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let show_popup = use_state(|| false);
    let toasts = use_reducer(ToastList::default);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // The popup fires once per visit, dropping the timeout on unmount cancels it
    {
        let show_popup = show_popup.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::POPUP_DELAY_MS, move || {
                    log::info!("Showing signup popup");
                    show_popup.set(true);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    let on_toast = toast_callback(&toasts);
    let on_dismiss = {
        let on_toast = on_toast.clone();
        Callback::from(move |id: u32| on_toast.emit(ToastAction::Dismiss(id)))
    };
    let close_popup = {
        let show_popup = show_popup.clone();
        Callback::from(move |_: ()| show_popup.set(false))
    };

    let to_newsletter = Callback::from(|_: MouseEvent| scroll_to_section("newsletter-section"));
    let to_features = Callback::from(|_: MouseEvent| scroll_to_section("features-section"));

    let cards = CLOSING_CARDS.iter().enumerate().map(|(index, card)| {
        let class = if index % 2 == 0 { "cta-card muted" } else { "cta-card bordered" };
        let (target, rel) = if card.external {
            (Some("_blank"), Some("noopener noreferrer"))
        } else {
            (None, None)
        };
        html! {
            <div class={class}>
                <h3>{card.title}</h3>
                <p>{card.body}</p>
                <a href={card.href} {target} {rel}>{card.link_text}</a>
            </div>
        }
    });

    html! {
        <div class="landing-page">
            <PersistentCta />

            <header class="hero">
                <div class="hero-content">
                    <h1>{"Money that belongs to everyone"}</h1>
                    <p class="hero-subtitle">
                        {"Centra is a stable, transparent digital currency built for the whole world, not just the few."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={to_newsletter}>{"Join the waitlist"}</button>
                        <button class="hero-secondary" onclick={to_features}>{"Learn more ↓"}</button>
                    </div>
                </div>
            </header>

            <FeatureTabs />

            <section class="timeline-section">
                <div class="section-intro">
                    <h2>{"The history of money"}</h2>
                    <p>{"Drag, swipe or click through ten thousand years of how people pay each other."}</p>
                </div>
                <InteractiveTimeline />
            </section>

            <Newsletter on_toast={on_toast.clone()} />

            <section class="closing-section">
                <h2>{"Centra isn't coming. It's here."}<br />{"And it belongs to the world."}</h2>
                <div class="cta-grid">
                    { for cards }
                </div>
            </section>

            <footer class="site-footer" role="contentinfo">
                <p>{format!("© {} Centra. All rights reserved.", chrono::Utc::now().year())}</p>
            </footer>

            {
                if *show_popup {
                    html! { <SignupPopup on_close={close_popup} on_toast={on_toast} /> }
                } else {
                    html! {}
                }
            }

            <ToastStack toasts={toasts.toasts.clone()} {on_dismiss} />
        </div>
    }
}
