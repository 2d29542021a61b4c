use yew::prelude::*;

use crate::config;
use crate::listener::{scroll_to_section, scroll_top, Listener};

/// Sticky "join" bar that slides in once the hero is scrolled away.
#[function_component(PersistentCta)]
pub fn persistent_cta() -> Html {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let listener = Listener::on_window("scroll", move |_| {
                    visible.set(scroll_top() > config::CTA_SCROLL_THRESHOLD);
                });
                move || drop(listener)
            },
            (),
        );
    }

    let onclick = Callback::from(|_: MouseEvent| scroll_to_section("newsletter-section"));

    html! {
        <div class={classes!("persistent-cta", (*visible).then(|| "visible"))} aria-hidden={(!*visible).to_string()}>
            <span>{"Centra is live. Be part of it."}</span>
            <button class="cta-button" {onclick}>{"Join the waitlist"}</button>
        </div>
    }
}
