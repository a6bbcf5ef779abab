use yanyu_app::{App, AppConfig};

fn main() {
    console_error_panic_hook::set_once();

    // The logger needs the level, so a bad config is reported after it is up.
    let (config, config_error) = match AppConfig::from_build_env() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    _ = console_log::init_with_level(config.log_level);
    if let Some(err) = config_error {
        log::warn!("Ignoring build configuration: {}", err);
    }

    leptos::mount::mount_to_body(move || leptos::view! { <App config=config/> });
}
