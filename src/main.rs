#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logging unavailable: {err}").into());
    }
    leptos::mount::mount_to_body(portfolio::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("portfolio is a browser app; build it with `--features csr` (e.g. via trunk)");
}
