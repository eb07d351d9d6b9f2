use api::DashboardStats;
use dioxus::prelude::*;
use ui::icons::{FaCar, FaNewspaper, FaPlus, FaTag};
use ui::{use_api, use_notifications, Icon, StatCard, StatGrid, Tone};

use crate::Route;

fn cards(stats: Option<DashboardStats>) -> Vec<StatCard> {
    let value = |pick: fn(&DashboardStats) -> u64| match stats {
        Some(ref s) => pick(s).to_string(),
        None => "-".to_string(),
    };
    vec![
        StatCard::new("Total Vehicles", value(|s| s.vehicles), Tone::Info),
        StatCard::new("Dealerships", value(|s| s.dealerships), Tone::Neutral),
        StatCard::new("Service Bookings", value(|s| s.service_bookings), Tone::Warning),
        StatCard::new("Inquiries", value(|s| s.inquiries), Tone::Success),
        StatCard::new("Blog Posts", value(|s| s.blog_posts), Tone::Neutral),
        StatCard::new("Weekly Specials", value(|s| s.weekly_specials), Tone::Danger),
    ]
}

#[component]
pub fn Dashboard() -> Element {
    let api = use_api();
    let mut notes = use_notifications();

    let stats = use_resource(move || {
        let api = api.clone();
        async move {
            match api.dashboard_stats().await {
                Ok(stats) => Some(stats),
                Err(e) => {
                    tracing::error!("Failed to load dashboard stats: {}", e);
                    notes.write().error(e.user_message());
                    None
                }
            }
        }
    });

    let loaded = (*stats.read()).flatten();

    rsx! {
        div {
            class: "dashboard",
            StatGrid { cards: cards(loaded) }

            section {
                class: "quick-actions",
                h3 { "Quick Actions" }
                div {
                    class: "quick-actions-grid",
                    Link {
                        class: "quick-action",
                        to: Route::Inventory {},
                        Icon { icon: FaCar, width: 18, height: 18 }
                        span { "Manage Inventory" }
                    }
                    Link {
                        class: "quick-action",
                        to: Route::Specials {},
                        Icon { icon: FaTag, width: 18, height: 18 }
                        span { "Weekly Specials" }
                    }
                    Link {
                        class: "quick-action",
                        to: Route::Blog {},
                        Icon { icon: FaNewspaper, width: 18, height: 18 }
                        span { "Write a Post" }
                    }
                    Link {
                        class: "quick-action",
                        to: Route::Dealerships {},
                        Icon { icon: FaPlus, width: 18, height: 18 }
                        span { "Add Dealership" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_stats_show_placeholders() {
        assert!(cards(None).iter().all(|c| c.value == "-"));
    }

    #[test]
    fn test_loaded_stats_fill_every_card() {
        let stats = DashboardStats {
            vehicles: 42,
            dealerships: 3,
            service_bookings: 7,
            inquiries: 11,
            blog_posts: 5,
            weekly_specials: 2,
        };
        let values: Vec<String> = cards(Some(stats)).into_iter().map(|c| c.value).collect();
        assert_eq!(values, vec!["42", "3", "7", "11", "5", "2"]);
    }
}
