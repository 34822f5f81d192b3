//! Waitlist email capture with a local thank-you toggle.

use leptos::prelude::*;

use crate::state::waitlist::WaitlistState;

/// Waitlist form — shows the email capture until the first accepted submit,
/// then a static thank-you message for the rest of the session.
///
/// Email format checking is delegated to the browser: the input is
/// `type="email"` and `required`, so the submit handler only sees values
/// the browser already accepted (plus programmatic empty submits, which it
/// silently ignores).
#[component]
pub fn WaitlistForm() -> impl IntoView {
    let waitlist = expect_context::<RwSignal<WaitlistState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        waitlist.update(|state| {
            state.submit();
        });
    };

    view! {
        {move || {
            if waitlist.get().submitted {
                view! {
                    <div class="waitlist waitlist--done">
                        <h2>"Thank you!"</h2>
                        <p>
                            "You've been added to our waitlist. We'll notify you when we launch!"
                        </p>
                    </div>
                }
                    .into_any()
            } else {
                view! {
                    <div class="waitlist">
                        <h2>"Join the Waitlist"</h2>
                        <p>"Be the first to know when we launch!"</p>
                        <form class="waitlist__form" on:submit=on_submit>
                            <input
                                class="waitlist__input"
                                type="email"
                                placeholder="Enter your email"
                                required
                                prop:value=move || waitlist.get().email
                                on:input=move |ev| {
                                    waitlist.update(|state| state.set_email(event_target_value(&ev)));
                                }
                            />
                            <button type="submit" class="btn btn--primary waitlist__submit">
                                "Join Waitlist"
                            </button>
                        </form>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
