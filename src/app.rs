//! Root application component with meta and state context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::home::HomePage;
use crate::state::waitlist::WaitlistState;

/// Root application component.
///
/// Provides the shared waitlist state context and renders the single page —
/// there is no routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let waitlist = RwSignal::new(WaitlistState::default());
    provide_context(waitlist);

    view! {
        <Title text="Recipe Sharing"/>

        <HomePage/>
    }
}
