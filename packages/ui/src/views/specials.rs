use api::WeeklySpecial;
use dioxus::prelude::*;

use super::short_date;
use crate::resource_page::{resource_page, AdminResource};
use crate::table::Column;

impl AdminResource for WeeklySpecial {
    const TITLE: &'static str = "Weekly Specials";
    const NOUN: &'static str = "Weekly Special";
    const SEARCH_PLACEHOLDER: &'static str = "Search specials...";
    const NEEDS_DEALERSHIPS: bool = true;

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Title", |s, _| rsx! { "{s.title}" }),
            Column::new("Dealership", |s, lookups| {
                rsx! { "{lookups.dealership(s.dealership.as_ref())}" }
            }),
            Column::new("Date", |s, _| rsx! { "{short_date(&s.date)}" }),
            Column::new("Thumbnail", |s, _| {
                if s.thumbnail.is_empty() {
                    rsx! { span { class: "cell-muted", "None" } }
                } else {
                    rsx! { img { class: "cell-thumb", src: "{s.thumbnail}", alt: "{s.title}" } }
                }
            }),
            Column::new("Video", |s, _| {
                if s.video.is_empty() {
                    rsx! { span { class: "cell-muted", "None" } }
                } else {
                    rsx! { a { href: "{s.video}", target: "_blank", "Watch" } }
                }
            }),
        ]
    }

    fn search_text(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.description.clone(),
            self.dealership
                .as_ref()
                .and_then(|d| d.name())
                .unwrap_or_default()
                .to_string(),
        ]
    }

    fn label(&self) -> String {
        format!("\"{}\"", self.title)
    }
}

#[component]
pub fn Specials() -> Element {
    resource_page::<WeeklySpecial>()
}
