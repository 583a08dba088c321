use dioxus::prelude::*;
use tracing::{error, info, Level};
use ui::{AppMode, SiteConfig};

use layout::SiteLayout;
use views::{About, Blog, Contact, DespreNoi, Home, NotFound, Services, Servicii};

mod layout;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/services")]
    Services {},
    #[route("/servicii")]
    Servicii {},
    #[route("/about")]
    About {},
    #[route("/despre-noi")]
    DespreNoi {},
    #[route("/contact")]
    Contact {},
    #[route("/blog")]
    Blog {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let config = SiteConfig::from_build_env();
    if let Err(err) = dioxus::logger::init(log_level(config.mode)) {
        eprintln!("startup: logger already initialised: {err}");
    }
    log_runtime_config(&config);
    dioxus::launch(App);
}

fn log_level(mode: AppMode) -> Level {
    match mode {
        AppMode::Local => Level::DEBUG,
        AppMode::Production => Level::INFO,
    }
}

/// Route panics through tracing, then hand over to whatever hook the
/// platform installed at launch.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        error!("panic: {panic}");
        previous(panic);
    }));
}

fn log_runtime_config(config: &SiteConfig) {
    info!(
        mode = ?config.mode,
        submit_delay_ms = config.submit_delay.as_millis() as u64,
        toast_ttl_ms = config.toast_ttl.as_millis() as u64,
        "startup"
    );
}

#[component]
fn App() -> Element {
    use_hook(install_panic_hook);
    let config = use_context_provider(SiteConfig::from_build_env);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::SiteTheme {}
        ui::I18nProvider {
            ui::ToastProvider { ttl_ms: config.toast_ttl.as_millis() as u64,
                Router::<Route> {}
            }
        }
    }
}
