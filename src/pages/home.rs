//! Home page — hero, waitlist capture, and features showcase over the rain.

use leptos::prelude::*;

use crate::components::features::Features;
use crate::components::rain_host::RainHost;
use crate::components::waitlist_form::WaitlistForm;

/// The single marketing page: the animated background canvas sits behind a
/// hero header, the waitlist form, and the static features grid.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <RainHost/>
            <header class="home-page__content">
                <h1 class="home-page__title">"Recipe Sharing"</h1>
                <p class="home-page__tagline">
                    "Discover and share amazing recipes with food lovers around the world"
                </p>

                <WaitlistForm/>
                <Features/>
            </header>
        </div>
    }
}
