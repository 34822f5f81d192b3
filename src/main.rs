//! Client entry point: installs the panic hook and console logger, then
//! mounts the application to `<body>`.

use recipe_waitlist::app::App;

fn main() {
    console_error_panic_hook::set_once();
    // Logger init only fails when one is already installed; keep going.
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(App);
}
