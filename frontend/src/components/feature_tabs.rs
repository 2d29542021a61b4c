use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeatureTab {
    #[default]
    Stability,
    Transparency,
    Access,
}

impl FeatureTab {
    pub const ALL: [FeatureTab; 3] = [FeatureTab::Stability, FeatureTab::Transparency, FeatureTab::Access];

    pub fn key(self) -> &'static str {
        match self {
            FeatureTab::Stability => "stability",
            FeatureTab::Transparency => "transparency",
            FeatureTab::Access => "access",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FeatureTab::Stability => "Stability",
            FeatureTab::Transparency => "Transparency",
            FeatureTab::Access => "Access",
        }
    }

    fn points(self) -> &'static [&'static str] {
        match self {
            FeatureTab::Stability => &[
                "Backed by a diversified reserve basket",
                "Issuance rules enforced on chain",
                "Designed to hold value through market cycles",
            ],
            FeatureTab::Transparency => &[
                "Reserves published and verifiable by anyone",
                "Open source protocol and audits",
                "Every transaction settles on a public ledger",
            ],
            FeatureTab::Access => &[
                "A wallet in your pocket, no bank account required",
                "Near-instant transfers across borders",
                "Fees measured in fractions of a cent",
            ],
        }
    }

    fn icon(self) -> &'static str {
        match self {
            FeatureTab::Stability => "📉",
            FeatureTab::Transparency => "🔍",
            FeatureTab::Access => "🌍",
        }
    }
}

#[function_component(FeatureTabs)]
pub fn feature_tabs() -> Html {
    let active_tab = use_state(FeatureTab::default);

    let tabs = FeatureTab::ALL.into_iter().map(|tab| {
        let onclick = {
            let active_tab = active_tab.clone();
            Callback::from(move |_: MouseEvent| active_tab.set(tab))
        };
        html! {
            <button
                key={tab.key()}
                role="tab"
                aria-selected={(*active_tab == tab).to_string()}
                class={classes!("feature-tab", (*active_tab == tab).then(|| "active"))}
                {onclick}
            >
                {tab.title()}
            </button>
        }
    });

    let active = *active_tab;

    html! {
        <section id="features-section" class="features-section">
            <h2>{"Why Centra"}</h2>
            <div class="feature-tab-list" role="tablist">
                { for tabs }
            </div>
            <div class="feature-tab-panel" role="tabpanel">
                <span class="feature-icon">{active.icon()}</span>
                <h3>{active.title()}</h3>
                <ul class="feature-list">
                    { for active.points().iter().map(|point| html! { <li>{*point}</li> }) }
                </ul>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stability_is_the_default_tab() {
        assert_eq!(FeatureTab::default(), FeatureTab::Stability);
        assert_eq!(FeatureTab::default().key(), "stability");
    }

    #[test]
    fn every_tab_has_content() {
        for tab in FeatureTab::ALL {
            assert!(!tab.points().is_empty());
            assert!(!tab.title().is_empty());
        }
    }
}
