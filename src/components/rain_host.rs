//! Bridge component between the Leptos UI and the imperative `rain::Engine`.
//!
//! Mounts the background `<canvas>` element and owns the engine lifecycle:
//! the tick interval and the window resize listener are acquired together
//! once the element exists, stored in a single teardown slot, and released
//! together exactly once when the page unmounts. No tick can run after
//! cleanup.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::ev;
use leptos::prelude::*;

use crate::util::viewport;

/// Timer and listener handles, released as a pair.
struct RainTeardown {
    interval: Interval,
    resize: WindowListenerHandle,
}

/// Canvas host — full-viewport background canvas driven by [`rain::Engine`].
///
/// The engine receives the canvas element by reference rather than looking
/// it up by id, so it never depends on document-global state.
#[component]
pub fn RainHost() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let teardown = StoredValue::new_local(None::<RainTeardown>);

    Effect::new(move || {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if teardown.with_value(Option::is_some) {
            return;
        }

        let (width, height) = viewport::size();
        let engine = match rain::engine::Engine::new(canvas, width, height) {
            Ok(engine) => engine,
            Err(err) => {
                log::error!("rain engine init failed: {err:?}");
                return;
            }
        };
        let engine = Rc::new(RefCell::new(engine));

        let tick_engine = Rc::clone(&engine);
        let interval = Interval::new(rain::consts::TICK_MS, move || {
            if let Err(err) = tick_engine.borrow_mut().tick() {
                log::error!("rain tick failed: {err:?}");
            }
        });

        // Resize only re-sizes the canvas; columns are not recomputed
        // unless the engine's reflow flag is enabled.
        let resize_engine = Rc::clone(&engine);
        let resize = window_event_listener(ev::resize, move |_| {
            let (width, height) = viewport::size();
            resize_engine.borrow_mut().set_viewport(width, height);
        });

        teardown.set_value(Some(RainTeardown { interval, resize }));
    });

    on_cleanup(move || {
        teardown.update_value(|slot| {
            if let Some(handles) = slot.take() {
                handles.interval.cancel();
                handles.resize.remove();
            }
        });
    });

    view! {
        <canvas class="rain-host" node_ref=canvas_ref>
            "Your browser does not support canvas."
        </canvas>
    }
}
