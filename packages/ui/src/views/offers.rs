use api::SpecialOffer;
use dioxus::prelude::*;

use super::{short_date, today};
use crate::resource_page::{resource_page, AdminResource};
use crate::table::{Column, Lookups};
use crate::widgets::{Badge, DetailRow, Tone};

/// Active/Expired badge against today's date.
#[component]
fn ExpiryBadge(offer: SpecialOffer) -> Element {
    if offer.is_expired_on(&today()) {
        rsx! { Badge { label: "Expired", tone: Tone::Danger } }
    } else {
        rsx! { Badge { label: "Active", tone: Tone::Success } }
    }
}

impl AdminResource for SpecialOffer {
    const TITLE: &'static str = "Special Offers";
    const NOUN: &'static str = "Special Offer";
    const SEARCH_PLACEHOLDER: &'static str = "Search offers...";
    const VIEWABLE: bool = true;
    const NEEDS_DEALERSHIPS: bool = true;

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Offer", |o, _| {
                rsx! {
                    div { "{o.title}" }
                    div { class: "cell-muted", "{o.offer}" }
                }
            }),
            Column::new("Dealership", |o, lookups| {
                rsx! { "{lookups.dealership(o.dealership.as_ref())}" }
            }),
            Column::new("Valid Until", |o, _| rsx! { "{short_date(&o.valid_until)}" }),
            Column::new("Status", |o, _| rsx! { ExpiryBadge { offer: o.clone() } }),
        ]
    }

    fn search_text(&self) -> Vec<String> {
        vec![self.title.clone(), self.offer.clone(), self.tag.clone()]
    }

    fn label(&self) -> String {
        format!("\"{}\"", self.title)
    }

    fn detail(&self, lookups: &Lookups) -> Element {
        rsx! {
            if !self.image.is_empty() {
                div {
                    class: "detail-media",
                    img { src: "{self.image}", alt: "{self.title}" }
                }
            }
            DetailRow { label: "Title", value: self.title.clone() }
            DetailRow { label: "Offer", value: self.offer.clone() }
            DetailRow { label: "Tag", value: self.tag.clone() }
            DetailRow { label: "Dealership", value: lookups.dealership(self.dealership.as_ref()) }
            DetailRow { label: "Valid Until", value: short_date(&self.valid_until) }
            DetailRow { label: "Description", value: self.description.clone() }
            DetailRow { label: "Terms & Conditions", value: self.terms_conditions.clone() }
            ExpiryBadge { offer: self.clone() }
        }
    }
}

#[component]
pub fn Offers() -> Element {
    resource_page::<SpecialOffer>()
}
