use dioxus::prelude::*;
use ui::icons::{
    FaBriefcase, FaBuilding, FaCar, FaEnvelope, FaGauge, FaGears, FaNewspaper, FaPercent,
    FaRightFromBracket, FaTag, FaWrench,
};
use ui::{use_auth, Icon, LogoutButton, ProtectedRoute};

use crate::Route;

/// Shell for every signed-in screen: sidebar navigation, a header with the
/// current page title and the routed page below it.
#[component]
pub fn AdminLayout() -> Element {
    let nav = use_navigator();
    let auth = use_auth();
    let route = use_route::<Route>();

    let who = auth
        .read()
        .identity()
        .map(|i| i.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        ProtectedRoute {
            on_denied: move |_| {
                nav.replace(Route::Login {});
            },
            div {
                class: "admin-shell",
                aside {
                    class: "admin-sidebar",
                    div { class: "sidebar-brand", "Nellis Auto Admin" }
                    nav {
                        class: "sidebar-nav",
                        NavItem { to: Route::Dashboard {}, label: "Dashboard",
                            Icon { icon: FaGauge, width: 16, height: 16 }
                        }
                        NavItem { to: Route::Specials {}, label: "Weekly Specials",
                            Icon { icon: FaTag, width: 16, height: 16 }
                        }
                        NavItem { to: Route::Inventory {}, label: "Inventory",
                            Icon { icon: FaCar, width: 16, height: 16 }
                        }
                        NavItem { to: Route::Offers {}, label: "Special Offers",
                            Icon { icon: FaPercent, width: 16, height: 16 }
                        }
                        NavItem { to: Route::Dealerships {}, label: "Dealerships",
                            Icon { icon: FaBuilding, width: 16, height: 16 }
                        }
                        NavItem { to: Route::Businesses {}, label: "Auto Businesses",
                            Icon { icon: FaBriefcase, width: 16, height: 16 }
                        }
                        NavItem { to: Route::Service {}, label: "Service Bookings",
                            Icon { icon: FaWrench, width: 16, height: 16 }
                        }
                        NavItem { to: Route::Parts {}, label: "Parts Requests",
                            Icon { icon: FaGears, width: 16, height: 16 }
                        }
                        NavItem { to: Route::Blog {}, label: "Community Blog",
                            Icon { icon: FaNewspaper, width: 16, height: 16 }
                        }
                        NavItem { to: Route::Contacts {}, label: "Contact Submissions",
                            Icon { icon: FaEnvelope, width: 16, height: 16 }
                        }
                    }
                    LogoutButton {
                        class: "sidebar-logout",
                        Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                    }
                }
                div {
                    class: "admin-main",
                    header {
                        class: "admin-header",
                        h1 { "{route.title()}" }
                        span { class: "admin-identity", "{who}" }
                    }
                    main {
                        class: "admin-content",
                        Outlet::<Route> {}
                    }
                }
            }
        }
    }
}

#[component]
fn NavItem(to: Route, label: &'static str, children: Element) -> Element {
    rsx! {
        Link {
            class: "sidebar-link",
            active_class: "active",
            to,
            {children}
            span { "{label}" }
        }
    }
}
