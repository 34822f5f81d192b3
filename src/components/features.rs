//! Static features showcase grid.

use leptos::prelude::*;

/// A single feature card.
struct Feature {
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "🍳",
        title: "Smart Recipe Discovery",
        blurb: "AI-powered recommendations based on your taste preferences and dietary restrictions",
    },
    Feature {
        icon: "👥",
        title: "Community Sharing",
        blurb: "Connect with fellow food enthusiasts and share your culinary creations with the world",
    },
    Feature {
        icon: "📱",
        title: "Interactive Cooking",
        blurb: "Step-by-step guided cooking with timers, tips, and real-time adjustments",
    },
];

/// Features grid — fixed marketing content, no state.
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <div class="features">
            <h2>"Platform Features"</h2>
            <div class="features__grid">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="feature-card">
                                <div class="feature-card__icon">{feature.icon}</div>
                                <h3>{feature.title}</h3>
                                <p>{feature.blurb}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
