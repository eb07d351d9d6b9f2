use dioxus::prelude::*;

use store::AdminConfig;
use ui::views::{Blog, Businesses, Contacts, Dealerships, Inventory, Offers, Parts, Service, Specials};
use ui::ConsoleProvider;
use views::{AdminLayout, Dashboard, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/admin/login")]
    Login {},
    #[layout(AdminLayout)]
        #[route("/admin/dashboard")]
        Dashboard {},
        #[route("/admin/specials")]
        Specials {},
        #[route("/admin/inventory")]
        Inventory {},
        #[route("/admin/offers")]
        Offers {},
        #[route("/admin/dealerships")]
        Dealerships {},
        #[route("/admin/businesses")]
        Businesses {},
        #[route("/admin/service")]
        Service {},
        #[route("/admin/parts")]
        Parts {},
        #[route("/admin/blog")]
        Blog {},
        #[route("/admin/contacts")]
        Contacts {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Heading shown in the admin header bar.
    fn title(&self) -> &'static str {
        match self {
            Route::Dashboard {} => "Dashboard",
            Route::Specials {} => "Weekly Specials",
            Route::Inventory {} => "Inventory",
            Route::Offers {} => "Special Offers",
            Route::Dealerships {} => "Dealerships",
            Route::Businesses {} => "Auto Businesses",
            Route::Service {} => "Service Bookings",
            Route::Parts {} => "Parts Requests",
            Route::Blog {} => "Community Blog",
            Route::Contacts {} => "Contact Submissions",
            Route::Root {} | Route::Login {} | Route::NotFound { .. } => "Admin",
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialise logger: {e}");
    }
    dioxus::launch(App);
}

/// Configuration baked in at build time. A full `admin.toml` document in
/// `NELLIS_ADMIN_CONFIG` wins over the single `NELLIS_API_URL` variable.
fn load_config() -> AdminConfig {
    match option_env!("NELLIS_ADMIN_CONFIG") {
        Some(doc) => match AdminConfig::from_toml(doc) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid NELLIS_ADMIN_CONFIG: {}", e);
                AdminConfig::from_env()
            }
        },
        None => AdminConfig::from_env(),
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ConsoleProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the login screen
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Login {});
    rsx! {}
}

/// Unknown paths land on the dashboard
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("No route for /{}", segments.join("/"));
    nav.replace(Route::Dashboard {});
    rsx! {}
}
