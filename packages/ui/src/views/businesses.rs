use api::AutoBusiness;
use dioxus::prelude::*;

use crate::resource_page::{resource_page, AdminResource};
use crate::table::{Column, Lookups};
use crate::widgets::{Badge, DetailRow, Tone};

impl AdminResource for AutoBusiness {
    const TITLE: &'static str = "Auto Businesses";
    const NOUN: &'static str = "Auto Business";
    const SEARCH_PLACEHOLDER: &'static str = "Search businesses...";
    const VIEWABLE: bool = true;

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Business", |b, _| {
                rsx! {
                    div { "{b.name}" }
                    div { class: "cell-muted", "{b.address}" }
                }
            }),
            Column::new("Type", |b, _| rsx! { Badge { label: b.kind.clone(), tone: Tone::Info } }),
            Column::new("Contact", |b, _| {
                rsx! {
                    div { "{b.phone}" }
                    div { class: "cell-muted", "{b.email}" }
                }
            }),
            Column::new("Services", |b, _| {
                let services = b.services.join(", ");
                rsx! { "{services}" }
            }),
        ]
    }

    fn search_text(&self) -> Vec<String> {
        vec![self.name.clone(), self.kind.clone(), self.address.clone()]
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn detail(&self, _lookups: &Lookups) -> Element {
        rsx! {
            DetailRow { label: "Name", value: self.name.clone() }
            DetailRow { label: "Type", value: self.kind.clone() }
            DetailRow { label: "Address", value: self.address.clone() }
            DetailRow { label: "Phone", value: self.phone.clone() }
            DetailRow { label: "Email", value: self.email.clone() }
            DetailRow { label: "Website", value: self.website.clone() }
            DetailRow { label: "Hours", value: self.hours_services.join("\n") }
            DetailRow { label: "Services", value: self.services.join(", ") }
            DetailRow { label: "Description", value: self.description.clone() }
        }
    }
}

#[component]
pub fn Businesses() -> Element {
    resource_page::<AutoBusiness>()
}
